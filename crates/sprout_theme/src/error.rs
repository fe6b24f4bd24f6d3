//! Theme error types
//!
//! Token resolution itself never fails. These errors only come from the API
//! edges that accept untyped input.

use thiserror::Error;

use crate::components::{ComponentFamily, ValueKind};

/// Rejected component override
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverrideError {
    /// The family has no field with this name
    #[error("Unknown field `{field}` on component `{family}`")]
    UnknownField {
        family: ComponentFamily,
        field: String,
    },

    /// The value kind does not match the field
    #[error("Field `{family}.{field}` expects a {expected} value, got {found}")]
    KindMismatch {
        family: ComponentFamily,
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

/// Theme config document errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("Failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML could not be written
    #[error("Failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// JSON encode or decode failed
    #[error("Theme config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An override names a component family that does not exist
    #[error("Unknown component family: {0}")]
    UnknownFamily(String),

    /// An override value was rejected
    #[error(transparent)]
    Override(#[from] OverrideError),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;
