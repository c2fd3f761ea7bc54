//! Registered analysts, their credentials, roles and session flags.

use crate::credentials::PasswordSecret;
use crate::errors::{IrmsError, IrmsResult};
use crate::role::Role;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Analyst {
    name: String,
    secret: PasswordSecret,
    role: Role,
    authenticated: bool,
    registered_at: DateTime<Utc>,
    promoted_at: Option<DateTime<Utc>>,
}

impl Analyst {
    fn new(name: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            secret: PasswordSecret::derive(password),
            role: Role::Member,
            authenticated: false,
            registered_at: Utc::now(),
            promoted_at: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn promoted_at(&self) -> Option<DateTime<Utc>> {
        self.promoted_at
    }
}

/// Outcome of a supervisor promotion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    Promoted,
    AlreadySupervisor,
}

#[derive(Debug, Default)]
pub struct AnalystDirectory {
    analysts: HashMap<String, Analyst>,
}

impl AnalystDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new MEMBER. Name and password must already be validated.
    pub fn insert(&mut self, name: &str, password: &str) -> IrmsResult<()> {
        if self.analysts.contains_key(name) {
            return Err(IrmsError::duplicate_analyst(name));
        }
        self.analysts
            .insert(name.to_string(), Analyst::new(name, password));
        Ok(())
    }

    pub fn get(&self, name: &str) -> IrmsResult<&Analyst> {
        self.analysts
            .get(name)
            .ok_or_else(|| IrmsError::no_such_analyst(name))
    }

    fn get_mut(&mut self, name: &str) -> IrmsResult<&mut Analyst> {
        self.analysts
            .get_mut(name)
            .ok_or_else(|| IrmsError::no_such_analyst(name))
    }

    /// A failed check clears the session flag before reporting the error.
    pub fn authenticate(&mut self, name: &str, password: &str) -> IrmsResult<()> {
        let analyst = self.get_mut(name)?;
        if !analyst.secret.verify(password) {
            analyst.authenticated = false;
            return Err(IrmsError::incorrect_password(name));
        }
        analyst.authenticated = true;
        Ok(())
    }

    pub fn logout(&mut self, name: &str) -> IrmsResult<()> {
        self.get_mut(name)?.authenticated = false;
        Ok(())
    }

    /// Raise the analyst to SUPERVISOR; never lowers a role
    pub fn promote(&mut self, name: &str) -> IrmsResult<Promotion> {
        let analyst = self.get_mut(name)?;
        if analyst.role == Role::Supervisor {
            return Ok(Promotion::AlreadySupervisor);
        }
        analyst.role = Role::Supervisor;
        analyst.promoted_at = Some(Utc::now());
        Ok(Promotion::Promoted)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.analysts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.analysts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analysts.is_empty()
    }
}
