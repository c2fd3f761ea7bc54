use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analyst role. Promotion only ever moves upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Member,
    Supervisor,
}

impl Role {
    /// Supervisors are exempt from the rising-floor rule
    pub fn bypasses_rating_floor(&self) -> bool {
        matches!(self, Role::Supervisor)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(input: &str) -> Result<Role, Self::Err> {
        match input.to_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "supervisor" => Ok(Role::Supervisor),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Member => write!(f, "MEMBER"),
            Role::Supervisor => write!(f, "SUPERVISOR"),
        }
    }
}
