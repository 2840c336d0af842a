//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::TokenEntity;
use crate::errors::{DomainError, TokenError};

use super::r#trait::TokenRepository;

/// Mock token repository for testing
///
/// Scan order is insertion order.
pub struct MockTokenRepository {
    tokens: Arc<RwLock<Vec<TokenEntity>>>,
    fail_insert: bool,
    fail_scan: Option<TokenError>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(Vec::new())),
            fail_insert: false,
            fail_scan: None,
        }
    }

    /// Make every insert fail
    pub fn with_insert_failure(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    /// Make every scan fail with `error`
    pub fn with_scan_failure(mut self, error: TokenError) -> Self {
        self.fail_scan = Some(error);
        self
    }

    /// Seed records without going through `insert`
    pub async fn seed(&self, records: Vec<TokenEntity>) {
        self.tokens.write().await.extend(records);
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert(&self, token: TokenEntity) -> Result<TokenEntity, DomainError> {
        if self.fail_insert {
            return Err(TokenError::Write {
                token_type: token.token_type.to_string(),
                message: "simulated insert failure".to_string(),
            }
            .into());
        }

        self.tokens.write().await.push(token.clone());
        Ok(token)
    }

    async fn scan_by_provider(&self, provider: &str) -> Result<Vec<TokenEntity>, DomainError> {
        if let Some(err) = &self.fail_scan {
            return Err(err.clone().into());
        }

        let tokens = self.tokens.read().await;
        Ok(tokens
            .iter()
            .filter(|t| t.provider == provider)
            .cloned()
            .collect())
    }
}
