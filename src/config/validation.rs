//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (bind address parses, timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ExporterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ExporterConfig;
use std::net::SocketAddr;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    EmptyCollectorCommand,
    ZeroTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a socket address", addr)
            }
            ValidationError::EmptyCollectorCommand => {
                write!(f, "collector.command must not be empty")
            }
            ValidationError::ZeroTimeout => {
                write!(f, "collector.timeout_secs must be greater than zero when set")
            }
        }
    }
}

/// Check a configuration for semantic errors, collecting every problem.
pub fn validate_config(config: &ExporterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.collector.command.trim().is_empty() {
        errors.push(ValidationError::EmptyCollectorCommand);
    }

    if config.collector.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ExporterConfig::default()).is_ok());
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let mut config = ExporterConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".into())]
        );
    }

    #[test]
    fn all_errors_are_reported() {
        let mut config = ExporterConfig::default();
        config.listener.bind_address = "nope".into();
        config.collector.command = "  ".into();
        config.collector.timeout_secs = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
