/// Convenience result type used across Rankrace.
pub type RaceResult<T> = Result<T, RaceError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum RaceError {
    /// Invalid caller-supplied configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input data violating the observation contract.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RaceError {
    /// Build a [`RaceError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`RaceError::MalformedInput`] value.
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Build a [`RaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
