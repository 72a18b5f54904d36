/// Convenience result type used across patternloom.
pub type PatternResult<T> = Result<T, PatternError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Numerical edge cases (zero-length lines, regressing timestamps, non-positive frequencies) are
/// not errors; they resolve to deterministic fallbacks at the call site.
#[derive(thiserror::Error, Debug)]
pub enum PatternError {
    /// Invalid configuration supplied by the caller (empty color stops, non-positive cycle
    /// duration, zero fractal children, unparseable colors).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PatternError {
    /// Build a [`PatternError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`PatternError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error reports an invalid configuration.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
