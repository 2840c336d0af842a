//! Token repository trait defining the interface for credential record persistence.

use async_trait::async_trait;

use crate::domain::entities::token::TokenEntity;
use crate::errors::DomainError;

/// Repository trait for TokenEntity persistence operations
///
/// Records are append-only: every insert adds a new record and nothing is
/// updated in place or deleted. Uniqueness per `(provider, token_type)` is
/// not enforced by the store; readers decide which record wins.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new record
    ///
    /// # Returns
    /// * `Ok(TokenEntity)` - The record as written
    /// * `Err(DomainError)` - The store rejected the write
    ///
    /// # Example
    /// ```no_run
    /// # use at_core::repositories::TokenRepository;
    /// # use at_core::domain::entities::token::{TokenEntity, TokenType};
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = TokenEntity::new("lightspeed", "opaque-value", TokenType::Bearer, 3600);
    /// let saved = repo.insert(token).await?;
    /// println!("saved at {}", saved.created_at);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, token: TokenEntity) -> Result<TokenEntity, DomainError>;

    /// Strongly consistent scan of every record stored under `provider`
    ///
    /// Records come back in store order, which is not creation order.
    ///
    /// # Returns
    /// * `Ok(Vec<TokenEntity>)` - Matching records, possibly empty
    /// * `Err(DomainError)` - The scan failed or a record could not be decoded
    async fn scan_by_provider(&self, provider: &str) -> Result<Vec<TokenEntity>, DomainError>;
}
