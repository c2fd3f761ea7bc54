// Runtime configuration for the IRMS engine and its driver binary

use crate::errors::{IrmsError, IrmsResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrmsConfig {
    pub policy: CredentialPolicy,
    pub badges: BadgeSettings,
    pub audit: AuditSettings,
    pub logging: LoggingSettings,
}

/// Limits applied to analyst names and passwords at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialPolicy {
    pub name_min_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        CredentialPolicy {
            name_min_length: 4,
            password_min_length: 10,
            password_max_length: 16,
        }
    }
}

/// Source of truth for which badge IDs may request supervisor access.
/// Empty settings accept no badge at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeSettings {
    pub allow_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Number of audit events retained in memory; 0 disables retention
    pub max_events: usize,
}

impl Default for AuditSettings {
    fn default() -> Self {
        AuditSettings { max_events: 1024 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl LoggingSettings {
    pub fn tracing_level(&self) -> IrmsResult<tracing::Level> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| IrmsError::config(format!("unknown log level '{}'", self.level)))
    }
}

impl IrmsConfig {
    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> IrmsResult<()> {
        let policy = &self.policy;
        if policy.name_min_length == 0 {
            return Err(IrmsError::config("policy.name_min_length must be at least 1"));
        }
        if policy.password_min_length > policy.password_max_length {
            return Err(IrmsError::config(format!(
                "policy.password_min_length ({}) exceeds policy.password_max_length ({})",
                policy.password_min_length, policy.password_max_length
            )));
        }
        if let Some(pattern) = &self.badges.pattern {
            regex::Regex::new(pattern).map_err(|e| {
                IrmsError::config(format!("badges.pattern does not compile: {e}"))
            })?;
        }
        self.logging.tracing_level()?;
        Ok(())
    }
}
