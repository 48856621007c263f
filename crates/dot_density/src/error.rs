//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. The
//! sampling pipeline itself never fails; errors only surface while validating
//! configuration or fitting a projection to its input.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("projection error: {0}")]
    Projection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_message_is_prefixed() {
        let err = Error::Projection("no projectable points".into());
        assert_eq!(err.to_string(), "projection error: no projectable points");
    }

    #[test]
    fn invalid_config_message_is_prefixed() {
        let err = Error::InvalidConfig("dots_per_unit must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: dots_per_unit must be > 0"
        );
    }
}
