//! Library root for the `irms` crate
//! Incident Report Management Service: analyst directory, incident ledger and rule engine

// Core error handling
pub mod errors;

// Analysts & roles
pub mod credentials;
pub mod directory;
pub mod role;

// Incidents
pub mod ledger;

// Rules
pub mod badge;
pub mod engine;
pub mod input_validator;

// Audit & logging
pub mod audit;
pub mod log_sink;

// Configuration & CLI
pub mod cli;
pub mod config;
pub mod config_loader;
pub mod replay;


pub use badge::{AllowListBadges, BadgeValidator, PatternBadges};
pub use engine::Irms;
pub use errors::{ErrorCategory, IrmsError, IrmsResult};
pub use ledger::Incident;
pub use role::Role;
