//! Error handling for the incident report management service
//!
//! Every rule the engine enforces fails with its own variant, so callers
//! can match on the exact kind instead of parsing messages.

use thiserror::Error;

/// Broad grouping of failure kinds for callers that report by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Identity,
    Credential,
    Authorization,
    Incident,
    Access,
    Runtime,
}

/// Main error type for the IRMS engine and its driver
#[derive(Error, Debug)]
pub enum IrmsError {
    #[error("No such analyst: {name}")]
    NoSuchAnalyst { name: String },

    #[error("Analyst already registered: {name}")]
    DuplicateAnalyst { name: String },

    #[error("Invalid analyst name: {name}")]
    InvalidAnalystName { name: String },

    #[error("Invalid password: {reason}")]
    InvalidPassword { reason: String },

    #[error("Incorrect password for analyst {name}")]
    IncorrectPassword { name: String },

    #[error("Invalid badge ID presented by {name}")]
    InvalidBadgeId { name: String },

    #[error("Analyst {name} is not authenticated")]
    UnauthenticatedAnalyst { name: String },

    #[error("Duplicate incident ID: {id}")]
    DuplicateIncident { id: String },

    #[error("Invalid rating {rating}: must be within 0..=9")]
    InvalidRating { rating: i64 },

    #[error("Incident {id} rejected: rating {rating} does not exceed lowest rating {floor}")]
    IncidentReject { id: String, rating: u8, floor: u8 },

    #[error("Index {index} out of bounds for {len} incidents")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },
}

/// Type alias for Result with IrmsError
pub type IrmsResult<T> = Result<T, IrmsError>;

impl IrmsError {
    pub fn no_such_analyst(name: impl Into<String>) -> Self {
        Self::NoSuchAnalyst { name: name.into() }
    }

    pub fn duplicate_analyst(name: impl Into<String>) -> Self {
        Self::DuplicateAnalyst { name: name.into() }
    }

    pub fn invalid_analyst_name(name: impl Into<String>) -> Self {
        Self::InvalidAnalystName { name: name.into() }
    }

    pub fn invalid_password(reason: impl Into<String>) -> Self {
        Self::InvalidPassword {
            reason: reason.into(),
        }
    }

    pub fn incorrect_password(name: impl Into<String>) -> Self {
        Self::IncorrectPassword { name: name.into() }
    }

    pub fn invalid_badge(name: impl Into<String>) -> Self {
        Self::InvalidBadgeId { name: name.into() }
    }

    pub fn unauthenticated(name: impl Into<String>) -> Self {
        Self::UnauthenticatedAnalyst { name: name.into() }
    }

    pub fn duplicate_incident(id: impl Into<String>) -> Self {
        Self::DuplicateIncident { id: id.into() }
    }

    /// Build a configuration error from a plain message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(Box::new(figment::Error::from(message.into())))
    }

    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    /// Which part of the taxonomy this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            IrmsError::NoSuchAnalyst { .. }
            | IrmsError::DuplicateAnalyst { .. }
            | IrmsError::InvalidAnalystName { .. } => ErrorCategory::Identity,
            IrmsError::InvalidPassword { .. } | IrmsError::IncorrectPassword { .. } => {
                ErrorCategory::Credential
            }
            IrmsError::InvalidBadgeId { .. } | IrmsError::UnauthenticatedAnalyst { .. } => {
                ErrorCategory::Authorization
            }
            IrmsError::DuplicateIncident { .. }
            | IrmsError::InvalidRating { .. }
            | IrmsError::IncidentReject { .. } => ErrorCategory::Incident,
            IrmsError::IndexOutOfBounds { .. } => ErrorCategory::Access,
            IrmsError::Config(_) | IrmsError::Io { .. } | IrmsError::Script { .. } => {
                ErrorCategory::Runtime
            }
        }
    }

    /// Short stable name of the failure kind, used in audit records
    pub fn kind(&self) -> &'static str {
        match self {
            IrmsError::NoSuchAnalyst { .. } => "NoSuchAnalyst",
            IrmsError::DuplicateAnalyst { .. } => "DuplicateAnalyst",
            IrmsError::InvalidAnalystName { .. } => "InvalidAnalystName",
            IrmsError::InvalidPassword { .. } => "InvalidPassword",
            IrmsError::IncorrectPassword { .. } => "IncorrectPassword",
            IrmsError::InvalidBadgeId { .. } => "InvalidBadgeID",
            IrmsError::UnauthenticatedAnalyst { .. } => "UnauthenticatedAnalyst",
            IrmsError::DuplicateIncident { .. } => "DuplicateIncident",
            IrmsError::InvalidRating { .. } => "InvalidRating",
            IrmsError::IncidentReject { .. } => "IncidentReject",
            IrmsError::IndexOutOfBounds { .. } => "IndexOutOfBounds",
            IrmsError::Config(_) => "Config",
            IrmsError::Io { .. } => "Io",
            IrmsError::Script { .. } => "Script",
        }
    }
}

/// Convert from figment errors
impl From<figment::Error> for IrmsError {
    fn from(err: figment::Error) -> Self {
        IrmsError::Config(Box::new(err))
    }
}
