//! DynamoDB client bootstrap
//!
//! Builds the single AWS client the token table is accessed through. The
//! client is created once at startup and shared for the process lifetime.

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::{config::Region, Client};
use tracing::info;

use at_shared::config::TokenTableConfig;

use crate::InfrastructureError;

/// Create a DynamoDB client for the configured region and credentials
///
/// # Arguments
/// * `config` - Token table configuration
///
/// # Returns
/// * `Ok(Client)` - Client ready for use
/// * `Err(InfrastructureError)` - Table name blank or no region could be resolved
///
/// # Example
/// ```no_run
/// use at_infra::database::connect;
/// use at_shared::config::TokenTableConfig;
///
/// async fn create_client() -> Result<(), Box<dyn std::error::Error>> {
///     let config = TokenTableConfig::new("us-east-1");
///     let _client = connect(&config).await?;
///     Ok(())
/// }
/// ```
pub async fn connect(config: &TokenTableConfig) -> Result<Client, InfrastructureError> {
    if config.table_name.trim().is_empty() {
        return Err(InfrastructureError::Config(
            "token table name must not be empty".to_string(),
        ));
    }

    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint_url) = &config.endpoint_url {
        info!("Using DynamoDB endpoint override: {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url.clone());
    }

    if let Some((access_key_id, secret_access_key)) = config.static_credentials() {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "auth_table_static",
        );
        loader = loader.credentials_provider(credentials);
    }

    let sdk_config = loader.load().await;

    let region = sdk_config.region().ok_or_else(|| {
        InfrastructureError::Connection("no AWS region configured, set AWS_REGION".to_string())
    })?;

    info!(
        "DynamoDB token table client initialized for table {} in region {}",
        config.table_name, region
    );

    Ok(Client::new(&sdk_config))
}
