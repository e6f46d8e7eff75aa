//! Error types for the Monte Carlo pricing engine.
//!
//! This module defines structured error types for configuration validation.
//! All validation failures surface synchronously, before any simulation work
//! is scheduled, with a message naming the offending field.

use std::fmt;

use mcpricer_models::AnalyticalError;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during validation when invalid parameters are provided.
/// Numeric degeneracies at runtime (near-zero control variance, collinear
/// controls) and threading fallbacks are absorbed into the result instead of
/// being raised as errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 100_000_000].
    InvalidPathCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
    /// Option-type string that is neither a call nor a put.
    UnknownOptionType(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 100_000_000]",
                    count
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
            Self::UnknownOptionType(input) => {
                write!(
                    f,
                    "Unknown option type '{}': expected 'call', 'put' or 'auto'",
                    input
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<AnalyticalError> for ConfigError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { spot } => ConfigError::InvalidParameter {
                name: "s0",
                value: format!("must be positive, got {}", spot),
            },
            AnalyticalError::InvalidVolatility { volatility } => ConfigError::InvalidParameter {
                name: "sigma",
                value: format!("must be positive, got {}", volatility),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidParameter {
            name: "sigma",
            value: "must be positive, got -0.2".to_string(),
        };
        assert!(err.to_string().contains("sigma"));
        assert!(err.to_string().contains("-0.2"));

        let err = ConfigError::UnknownOptionType("callable".to_string());
        assert!(err.to_string().contains("callable"));
    }

    #[test]
    fn test_from_analytical_error() {
        let err: ConfigError = AnalyticalError::InvalidSpot { spot: -1.0 }.into();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { name: "s0", .. }
        ));

        let err: ConfigError = AnalyticalError::InvalidVolatility { volatility: 0.0 }.into();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { name: "sigma", .. }
        ));
    }

    #[test]
    fn test_error_trait_object() {
        let err = ConfigError::InvalidPathCount(200_000_000);
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().contains("200000000"));
    }
}
