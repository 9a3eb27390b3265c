//! Error types for the position engine.

use thiserror::Error;

/// Errors from body position configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A configuration value is unusable.
    #[error("invalid position config: {0}")]
    InvalidConfig(&'static str),
}
