//! Rule engine for the incident report management service
//!
//! `Irms` owns the analyst directory and the incident ledger. Every public
//! operation resolves the analyst first, runs its guards in a fixed order,
//! and only then commits. The first failing guard decides the error and
//! leaves state untouched, with one exception: a wrong password clears the
//! analyst's authenticated flag as part of reporting `IncorrectPassword`.

use crate::audit::{AuditAction, AuditEvent, AuditTrail};
use crate::badge::BadgeValidator;
use crate::config::{CredentialPolicy, IrmsConfig};
use crate::directory::{AnalystDirectory, Promotion};
use crate::errors::{IrmsError, IrmsResult};
use crate::input_validator::InputValidator;
use crate::ledger::{Incident, IncidentLedger};
use crate::role::Role;
use chrono::{DateTime, Utc};

pub struct Irms {
    directory: AnalystDirectory,
    ledger: IncidentLedger,
    validator: InputValidator,
    badges: Box<dyn BadgeValidator>,
    audit: AuditTrail,
}

impl Irms {
    /// Engine with the default credential policy and the given badge authority
    pub fn new(badges: impl BadgeValidator + 'static) -> Self {
        Self::with_policy(CredentialPolicy::default(), Box::new(badges))
    }

    pub fn with_policy(policy: CredentialPolicy, badges: Box<dyn BadgeValidator>) -> Self {
        Self {
            directory: AnalystDirectory::new(),
            ledger: IncidentLedger::new(),
            validator: InputValidator::new(policy),
            badges,
            audit: AuditTrail::default(),
        }
    }

    /// Engine wired from loaded configuration
    pub fn from_config(config: &IrmsConfig) -> IrmsResult<Self> {
        let badges = config.badges.build_validator()?;
        let mut engine = Self::with_policy(config.policy.clone(), badges);
        engine.audit = AuditTrail::new(config.audit.max_events);
        Ok(engine)
    }

    pub fn register_analyst(&mut self, name: &str, password: &str) -> IrmsResult<()> {
        let result = self
            .validator
            .validate_name(name)
            .and_then(|_| self.validator.validate_password(password))
            .and_then(|_| self.directory.insert(name, password));
        let context = match &result {
            Ok(()) => self
                .directory
                .get(name)
                .ok()
                .map(|a| format!("registered at {}", a.registered_at().to_rfc3339())),
            Err(_) => None,
        };
        self.audited(name, AuditAction::Register, context, result)
    }

    /// On a wrong password the analyst ends up unauthenticated, even if they
    /// were authenticated before the call.
    pub fn authenticate(&mut self, name: &str, password: &str) -> IrmsResult<()> {
        let result = self.directory.authenticate(name, password);
        self.audited(name, AuditAction::Authenticate, None, result)
    }

    pub fn logout(&mut self, name: &str) -> IrmsResult<()> {
        let result = self.directory.logout(name);
        self.audited(name, AuditAction::Logout, None, result)
    }

    /// Does not require the analyst to be authenticated
    pub fn request_supervisor_access(&mut self, name: &str, badge_id: &str) -> IrmsResult<()> {
        let result = self.promote(name, badge_id);
        let promoted_at = self.directory.get(name).ok().and_then(|a| a.promoted_at());
        let context = match (&result, promoted_at) {
            (Ok(Promotion::Promoted), Some(at)) => {
                Some(format!("promoted at {}", at.to_rfc3339()))
            }
            (Ok(Promotion::AlreadySupervisor), Some(at)) => {
                Some(format!("supervisor since {}", at.to_rfc3339()))
            }
            _ => None,
        };
        self.audited(
            name,
            AuditAction::RequestSupervisorAccess,
            context,
            result.map(|_| ()),
        )
    }

    fn promote(&mut self, name: &str, badge_id: &str) -> IrmsResult<Promotion> {
        self.directory.get(name)?;
        if !self.badges.is_valid_badge(badge_id) {
            return Err(IrmsError::invalid_badge(name));
        }
        self.directory.promote(name)
    }

    pub fn submit_incident(&mut self, name: &str, id: &str, rating: i64) -> IrmsResult<()> {
        let result = self.accept_incident(name, id, rating);
        let context = match &result {
            Ok(at) => format!(
                "incident {id} rating {rating} submitted at {}",
                at.to_rfc3339()
            ),
            Err(_) => format!("incident {id} rating {rating}"),
        };
        self.audited(
            name,
            AuditAction::SubmitIncident,
            Some(context),
            result.map(|_| ()),
        )
    }

    /// Runs the submission guards and commits; returns the commit time
    fn accept_incident(
        &mut self,
        name: &str,
        id: &str,
        rating: i64,
    ) -> IrmsResult<DateTime<Utc>> {
        let analyst = self.directory.get(name)?;
        if !analyst.is_authenticated() {
            return Err(IrmsError::unauthenticated(name));
        }
        if self.ledger.contains_id(id) {
            return Err(IrmsError::duplicate_incident(id));
        }
        let rating = self.validator.validate_rating(rating)?;

        // Rising floor: a member's next report must beat their lowest so far
        if !analyst.role().bypasses_rating_floor() {
            if let Some(floor) = self.ledger.lowest_rating(name) {
                if rating <= floor {
                    return Err(IrmsError::IncidentReject {
                        id: id.to_string(),
                        rating,
                        floor,
                    });
                }
            }
        }

        let incident = self.ledger.append(name, id, rating)?;
        Ok(incident.submitted_at)
    }

    /// `(id, rating)` of the analyst's `index`-th accepted incident
    pub fn get_incident(&self, name: &str, index: i64) -> IrmsResult<(String, u8)> {
        self.directory.get(name)?;
        self.ledger.get(name, index).map(Incident::as_pair)
    }

    pub fn is_saved_incident(&self, id: &str, rating: i64) -> bool {
        self.ledger.is_saved(id, rating)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.directory.contains(name)
    }

    /// `false` for unregistered names
    pub fn is_authenticated(&self, name: &str) -> bool {
        self.directory
            .get(name)
            .map(|a| a.is_authenticated())
            .unwrap_or(false)
    }

    /// `None` for unregistered names
    pub fn get_analyst_role(&self, name: &str) -> Option<Role> {
        self.directory.get(name).ok().map(|a| a.role())
    }

    pub fn incidents(&self, name: &str) -> &[Incident] {
        self.ledger.incidents_of(name)
    }

    pub fn incident_count(&self, name: &str) -> usize {
        self.incidents(name).len()
    }

    pub fn lowest_rating(&self, name: &str) -> Option<u8> {
        self.ledger.lowest_rating(name)
    }

    pub fn analyst_count(&self) -> usize {
        self.directory.len()
    }

    pub fn total_incidents(&self) -> usize {
        self.ledger.len()
    }

    pub fn audit_trail(&self) -> &AuditTrail {
        &self.audit
    }

    fn audited(
        &mut self,
        who: &str,
        action: AuditAction,
        context: Option<String>,
        result: IrmsResult<()>,
    ) -> IrmsResult<()> {
        let event = match &result {
            Ok(()) => AuditEvent::accepted(who, action),
            Err(err) => AuditEvent::rejected(who, action, err),
        };
        self.audit.record(match context {
            Some(ctx) => event.with_context(ctx),
            None => event,
        });
        result
    }
}

impl std::fmt::Debug for Irms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Irms")
            .field("directory", &self.directory)
            .field("ledger", &self.ledger)
            .field("validator", &self.validator)
            .field("audit_events", &self.audit.len())
            .finish_non_exhaustive()
    }
}
