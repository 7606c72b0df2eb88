//! Core error types for mandala-core.
//!
//! Hierarchy violations come from the external store handing us
//! malformed records; they are never recoverable inside the core, so
//! every operation fails fast and names the offending entity.

use thiserror::Error;

/// Data-integrity violations in the goal hierarchy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedHierarchy {
    /// Position outside the 1-8 range
    #[error("{entity} '{id}' has position {position}, expected 1-8")]
    PositionOutOfRange {
        entity: &'static str,
        id: String,
        position: u8,
    },

    /// Two siblings share a position within the same parent
    #[error("{entity} '{id}' duplicates position {position} of '{other_id}'")]
    DuplicatePosition {
        entity: &'static str,
        id: String,
        other_id: String,
        position: u8,
    },

    /// Action references a pillar that was not supplied
    #[error("action '{action_id}' references unknown pillar '{pillar_id}'")]
    UnknownPillar {
        action_id: String,
        pillar_id: String,
    },
}

/// Core error type for mandala-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Hierarchy integrity violations
    #[error("Malformed hierarchy: {0}")]
    Hierarchy(#[from] MalformedHierarchy),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors (snapshot loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
