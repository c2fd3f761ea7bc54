//! Badge validity is decided outside the rule engine.
//!
//! The engine only asks a [`BadgeValidator`] whether a badge may request
//! supervisor access. Deployments plug in an allow-list, a format pattern,
//! or any predicate of their own.

use crate::config::BadgeSettings;
use crate::errors::{IrmsError, IrmsResult};
use regex::Regex;
use std::collections::HashSet;

/// External authority answering whether a badge ID is acceptable
pub trait BadgeValidator: Send + Sync {
    fn is_valid_badge(&self, badge_id: &str) -> bool;
}

impl<F> BadgeValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid_badge(&self, badge_id: &str) -> bool {
        self(badge_id)
    }
}

/// Fixed set of accepted badge IDs
#[derive(Debug, Clone, Default)]
pub struct AllowListBadges {
    allowed: HashSet<String>,
}

impl AllowListBadges {
    pub fn new<I, S>(badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: badges.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl BadgeValidator for AllowListBadges {
    fn is_valid_badge(&self, badge_id: &str) -> bool {
        self.allowed.contains(badge_id)
    }
}

/// Badge IDs must match a regular expression in full
#[derive(Debug, Clone)]
pub struct PatternBadges {
    pattern: Regex,
}

impl PatternBadges {
    pub fn new(pattern: &str) -> IrmsResult<Self> {
        let anchored = format!("^(?:{pattern})$");
        let pattern = Regex::new(&anchored)
            .map_err(|e| IrmsError::config(format!("invalid badge pattern: {e}")))?;
        Ok(Self { pattern })
    }
}

impl BadgeValidator for PatternBadges {
    fn is_valid_badge(&self, badge_id: &str) -> bool {
        self.pattern.is_match(badge_id)
    }
}

/// Accepts a badge if any of its members does. Empty means reject everything.
#[derive(Default)]
pub struct AnyOfBadges {
    validators: Vec<Box<dyn BadgeValidator>>,
}

impl AnyOfBadges {
    pub fn with(mut self, validator: impl BadgeValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl BadgeValidator for AnyOfBadges {
    fn is_valid_badge(&self, badge_id: &str) -> bool {
        self.validators.iter().any(|v| v.is_valid_badge(badge_id))
    }
}

impl BadgeSettings {
    /// Build the validator described by configuration
    pub fn build_validator(&self) -> IrmsResult<Box<dyn BadgeValidator>> {
        let mut combined = AnyOfBadges::default();

        if !self.allow_list.is_empty() {
            combined = combined.with(AllowListBadges::new(self.allow_list.iter().cloned()));
        }
        if let Some(pattern) = &self.pattern {
            combined = combined.with(PatternBadges::new(pattern)?);
        }

        if combined.validators.is_empty() {
            log::warn!("No badge source configured; all supervisor requests will be refused");
        }

        Ok(Box::new(combined))
    }
}
