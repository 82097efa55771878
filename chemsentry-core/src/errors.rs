//! Error Types for the Configuration Boundary
//!
//! ## Design Philosophy
//!
//! The risk engine itself cannot fail. `assess` and `forecast` accept any
//! numeric input and let out-of-domain values flow through the arithmetic,
//! so neither returns a `Result`.
//!
//! Errors only appear where the engine meets the hosting application: a
//! scenario payload that does not decode, or a snapshot that cannot be
//! encoded for the presentation layer.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use chemsentry_core::{ConfigError, ScenarioConfig};
//!
//! match ScenarioConfig::from_json(r#"{ "leakRate": "lots" }"#) {
//!     Ok(config) => {
//!         // Hand the config to the engine
//!         # let _ = config;
//!     }
//!     Err(ConfigError::Parse { reason }) => {
//!         // Reject the operator input and keep the previous scenario
//!         # let _ = reason;
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while decoding or encoding engine data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Scenario payload could not be decoded
    #[error("Failed to parse scenario: {reason}")]
    Parse {
        /// Decoder message, including line and column when available
        reason: String,
    },

    /// Engine output could not be encoded
    #[error("Failed to encode engine output: {reason}")]
    Encode {
        /// Encoder message
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn parse(err: serde_json::Error) -> Self {
        Self::Parse { reason: err.to_string() }
    }

    pub(crate) fn encode(err: serde_json::Error) -> Self {
        Self::Encode { reason: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_position() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let config_err = ConfigError::parse(err);

        match &config_err {
            ConfigError::Parse { reason } => assert!(reason.contains("line 1")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(config_err.to_string().starts_with("Failed to parse scenario"));
    }
}
