//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check seeded service entries (names non-empty and unique, URLs absolute)
//! - Validate bind and metrics addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("service entry {0} has an empty application name")]
    EmptyServiceName(usize),

    #[error("duplicate service name '{0}'")]
    DuplicateServiceName(String),

    #[error("service '{application}' has an invalid url '{url}'")]
    InvalidServiceUrl { application: String, url: String },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, service) in config.services.iter().enumerate() {
        if service.application.is_empty() {
            errors.push(ValidationError::EmptyServiceName(index));
            continue;
        }
        if !seen.insert(service.application.as_str()) {
            errors.push(ValidationError::DuplicateServiceName(
                service.application.clone(),
            ));
        }
        if url::Url::parse(&service.url).is_err() {
            errors.push(ValidationError::InvalidServiceUrl {
                application: service.application.clone(),
                url: service.url.clone(),
            });
        }
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
    use crate::config::schema::ServiceConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn bad_bind_address_rejected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidBindAddress(_)
        ));
    }

    #[test]
    fn all_errors_collected() {
        let mut config = GatewayConfig::default();
        config.services.push(ServiceConfig {
            application: String::new(),
            url: "http://127.0.0.1:9000".into(),
        });
        config.services.push(ServiceConfig {
            application: "users".into(),
            url: "not a url".into(),
        });
        config.services.push(ServiceConfig {
            application: "users".into(),
            url: "http://127.0.0.1:9001".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn metrics_address_ignored_when_disabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "garbage".into();

        assert!(validate_config(&config).is_ok());
    }
}
