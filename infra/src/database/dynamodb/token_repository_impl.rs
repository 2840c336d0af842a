//! DynamoDB implementation of the TokenRepository trait.
//!
//! Every save is a single unconditional `PutItem`; every fetch is a strongly
//! consistent `Scan` filtered on the provider attribute. There is no
//! conditional write, so records of the same type pile up and readers pick
//! the last one scanned. Re-saving an identical value and type replaces that
//! record with the newer one.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use tracing::{debug, info};

use at_core::domain::entities::token::TokenEntity;
use at_core::errors::{DomainError, TokenError};
use at_core::repositories::TokenRepository;
use at_shared::config::TokenTableConfig;

use super::connection::connect;
use super::item::{entity_to_item, item_to_entity, ATTR_PROVIDER, ATTR_TOKEN, ATTR_TOKEN_TYPE};
use crate::InfrastructureError;

/// DynamoDB implementation of TokenRepository
#[derive(Clone)]
pub struct DynamoDbTokenRepository {
    /// Shared AWS client
    client: Client,
    /// Name of the token table
    table_name: String,
    /// Items evaluated per scan page; `None` leaves paging to DynamoDB
    page_limit: Option<i32>,
}

impl DynamoDbTokenRepository {
    /// Wrap an existing client
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_limit: None,
        }
    }

    /// Cap the number of items each scan page evaluates
    pub fn with_page_limit(mut self, limit: i32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Build the client from configuration and wrap it
    pub async fn connect(config: &TokenTableConfig) -> Result<Self, InfrastructureError> {
        let client = connect(config).await?;
        Ok(Self::new(client, config.table_name.clone()))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Create the token table if it does not exist yet
    ///
    /// The key is the token value plus its type, so a bearer and a refresh
    /// token sharing a value are kept as separate records.
    ///
    /// Meant for DynamoDB Local and fresh environments; production tables are
    /// provisioned outside this crate.
    ///
    /// # Returns
    /// * `Ok(true)` - The table was created
    /// * `Ok(false)` - The table already existed
    pub async fn create_table_if_missing(&self) -> Result<bool, InfrastructureError> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => return Ok(false),
            Err(e) => {
                let missing = e
                    .as_service_error()
                    .map(|se| se.is_resource_not_found_exception())
                    .unwrap_or(false);
                if !missing {
                    return Err(InfrastructureError::Store(format!(
                        "Failed to describe table {}: {}",
                        self.table_name,
                        DisplayErrorContext(&e)
                    )));
                }
            }
        }

        let mut create = self
            .client
            .create_table()
            .table_name(&self.table_name);

        for (name, key_type) in [(ATTR_TOKEN, KeyType::Hash), (ATTR_TOKEN_TYPE, KeyType::Range)] {
            let attribute = AttributeDefinition::builder()
                .attribute_name(name)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .map_err(|e| InfrastructureError::General(e.to_string()))?;

            let key = KeySchemaElement::builder()
                .attribute_name(name)
                .key_type(key_type)
                .build()
                .map_err(|e| InfrastructureError::General(e.to_string()))?;

            create = create.attribute_definitions(attribute).key_schema(key);
        }

        create
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| {
                InfrastructureError::Store(format!(
                    "Failed to create table {}: {}",
                    self.table_name,
                    DisplayErrorContext(&e)
                ))
            })?;

        info!("Created token table {}", self.table_name);
        Ok(true)
    }
}

#[async_trait]
impl TokenRepository for DynamoDbTokenRepository {
    async fn insert(&self, token: TokenEntity) -> Result<TokenEntity, DomainError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(entity_to_item(&token)))
            .send()
            .await
            .map_err(|e| TokenError::Write {
                token_type: token.token_type.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(token)
    }

    async fn scan_by_provider(&self, provider: &str) -> Result<Vec<TokenEntity>, DomainError> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0usize;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .consistent_read(true)
                .filter_expression("#provider = :provider")
                .expression_attribute_names("#provider", ATTR_PROVIDER)
                .expression_attribute_values(":provider", AttributeValue::S(provider.to_string()))
                .set_limit(self.page_limit)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| TokenError::Read {
                    message: DisplayErrorContext(&e).to_string(),
                })?;
            pages += 1;

            for item in output.items() {
                match item_to_entity(item)? {
                    Some(entity) => records.push(entity),
                    None => debug!(
                        token_type = ?item.get(ATTR_TOKEN_TYPE),
                        "skipping record with unrecognised token type"
                    ),
                }
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        debug!(
            table = %self.table_name,
            pages,
            records = records.len(),
            "scanned token table"
        );

        Ok(records)
    }
}
