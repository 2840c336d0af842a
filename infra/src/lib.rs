//! # Infrastructure Layer
//!
//! Concrete implementations behind the auth-table core:
//!
//! - **Database**: DynamoDB implementation of the token repository
//! - **Logging**: tracing subscriber setup
//! - **Config**: environment-driven configuration loading
//!
//! ## Features
//!
//! - `dynamodb`: Enable the DynamoDB token table (default)

// Re-export core types for convenience
pub use at_core::errors::*;

/// Database module - DynamoDB token table
#[cfg(feature = "dynamodb")]
pub mod database;

/// Logging module - tracing subscriber setup
pub mod logging;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles:
    //! - Environment detection
    //! - Logging settings
    //! - Token table location, provider and credentials

    use at_shared::config::{Environment, LoggingConfig, TokenTableConfig};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InfrastructureConfig {
        /// Deployment environment
        pub environment: Environment,
        /// Logging configuration
        pub logging: LoggingConfig,
        /// Token table configuration
        pub token_table: TokenTableConfig,
    }

    impl Default for InfrastructureConfig {
        fn default() -> Self {
            let environment = Environment::default();
            Self {
                environment,
                logging: LoggingConfig::for_environment(environment),
                token_table: TokenTableConfig::default(),
            }
        }
    }

    impl InfrastructureConfig {
        /// Assemble the configuration from an arbitrary variable lookup
        pub fn from_lookup<F>(lookup: F) -> Self
        where
            F: Fn(&str) -> Option<String>,
        {
            let environment = Environment::from_lookup(&lookup);
            Self {
                environment,
                logging: LoggingConfig::from_lookup(environment, &lookup),
                token_table: TokenTableConfig::from_lookup(&lookup),
            }
        }
    }
}

#[cfg(feature = "dynamodb")]
use at_core::services::{TokenStore, TokenStoreConfig};
#[cfg(feature = "dynamodb")]
use database::DynamoDbTokenRepository;

/// Token store wired to the DynamoDB table
#[cfg(feature = "dynamodb")]
pub type DynamoDbTokenStore = TokenStore<DynamoDbTokenRepository>;

/// Infrastructure service container
#[cfg(feature = "dynamodb")]
pub struct InfrastructureServices {
    /// Configuration the services were built from
    pub config: config::InfrastructureConfig,
    /// Token store backed by DynamoDB
    pub token_store: DynamoDbTokenStore,
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - Configuration from the environment (and `.env` if present)
/// - The tracing subscriber
/// - The DynamoDB client and token store
///
/// Call once at process start and keep the returned services for the
/// lifetime of the process.
#[cfg(feature = "dynamodb")]
pub async fn initialize() -> Result<InfrastructureServices, InfrastructureError> {
    let config = load_config()?;
    logging::init_tracing(&config.logging);

    tracing::info!(
        "Initializing infrastructure services for {} environment",
        config.environment
    );

    let repository = DynamoDbTokenRepository::connect(&config.token_table).await?;
    let token_store = TokenStore::new(repository, TokenStoreConfig::from(&config.token_table))
        .map_err(|e| InfrastructureError::Config(e.to_string()))?;

    tracing::info!(
        "Token store ready for provider {} on table {}",
        token_store.provider(),
        token_store.repository().table_name()
    );

    Ok(InfrastructureServices {
        config,
        token_store,
    })
}

/// Load infrastructure configuration from environment
pub fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    Ok(config::InfrastructureConfig::from_lookup(|key| {
        std::env::var(key).ok()
    }))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The AWS client could not be set up
    #[error("Connection error: {0}")]
    Connection(String),

    /// Table-level store operation error
    #[error("Store error: {0}")]
    Store(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) | InfrastructureError::Connection(message) => {
                TokenError::Connection { message }.into()
            }
            InfrastructureError::Store(message) | InfrastructureError::General(message) => {
                DomainError::Internal { message }
            }
        }
    }
}

#[cfg(test)]
mod tests;
