//! Tests for configuration loading, error mapping and logging setup

use std::collections::HashMap;

use at_shared::config::{Environment, LogFormat};

use crate::config::InfrastructureConfig;
use crate::logging::{env_filter, init_tracing};
use crate::{DomainError, InfrastructureError, TokenError};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_infrastructure_config_defaults() {
    let config = InfrastructureConfig::from_lookup(lookup_from(&[]));

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.token_table.table_name, "authTable");
    assert_eq!(config.token_table.provider, "lightspeed");
    assert_eq!(config, InfrastructureConfig::default());
}

#[test]
fn test_infrastructure_config_from_lookup() {
    let config = InfrastructureConfig::from_lookup(lookup_from(&[
        ("ENVIRONMENT", "production"),
        ("LOG_LEVEL", "info"),
        ("AWS_REGION", "us-west-2"),
        ("AUTH_TABLE_NAME", "prodAuthTable"),
    ]));

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.token_table.region.as_deref(), Some("us-west-2"));
    assert_eq!(config.token_table.table_name, "prodAuthTable");
}

#[test]
fn test_connection_errors_map_to_token_connection() {
    let domain: DomainError = InfrastructureError::Connection("no region".to_string()).into();
    assert!(matches!(
        domain,
        DomainError::Token(TokenError::Connection { ref message }) if message == "no region"
    ));

    let domain: DomainError = InfrastructureError::Config("blank table".to_string()).into();
    assert!(matches!(domain, DomainError::Token(TokenError::Connection { .. })));
}

#[test]
fn test_store_errors_map_to_internal() {
    let domain: DomainError = InfrastructureError::Store("describe failed".to_string()).into();
    assert!(matches!(domain, DomainError::Internal { .. }));
    assert_eq!(domain.to_string(), "Internal error: describe failed");
}

#[test]
fn test_env_filter_uses_configured_level() {
    // RUST_LOG takes precedence over the configured level
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    let mut config = at_shared::config::LoggingConfig::default();
    config.level = "at_core=debug".to_string();
    assert_eq!(env_filter(&config).to_string(), "at_core=debug");
}

#[test]
fn test_env_filter_falls_back_on_bad_directive() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    let mut config = at_shared::config::LoggingConfig::default();
    config.level = "at_core=loudest".to_string();
    assert_eq!(env_filter(&config).to_string(), "info");
}

#[test]
fn test_init_tracing_is_idempotent() {
    let config = at_shared::config::LoggingConfig::for_environment(Environment::Staging);
    init_tracing(&config);
    // a second install never replaces the first
    assert!(!init_tracing(&config));
}
