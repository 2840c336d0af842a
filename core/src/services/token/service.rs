//! Main token store implementation

use tracing::{debug, error, info, warn};

use crate::domain::entities::token::{TokenEntity, TokenPair, TokenType};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TokenRepository;

use super::config::TokenStoreConfig;
use super::extract::extract_tokens;

/// Saves and fetches the bearer/refresh tokens of a single provider
///
/// The repository handle is built once by the caller and owned here for the
/// lifetime of the store. All operations are a single round trip to the
/// repository; nothing is cached or retried.
pub struct TokenStore<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenStoreConfig,
}

impl<R: TokenRepository> TokenStore<R> {
    /// Creates a new token store
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - Token store configuration
    ///
    /// # Returns
    ///
    /// A new `TokenStore`, or a validation error if no provider is configured
    pub fn new(repository: R, config: TokenStoreConfig) -> DomainResult<Self> {
        if config.provider.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "token store provider must not be empty".to_string(),
            });
        }

        Ok(Self { repository, config })
    }

    /// Provider all records are saved and fetched under
    pub fn provider(&self) -> &str {
        &self.config.provider
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Saves a bearer token valid for `expires_in` seconds from now
    pub async fn save_bearer(
        &self,
        token: &str,
        expires_in: i64,
    ) -> DomainResult<TokenEntity> {
        self.save(token, TokenType::Bearer, expires_in).await
    }

    /// Saves a refresh token valid for `expires_in` seconds from now
    pub async fn save_refresh(
        &self,
        token: &str,
        expires_in: i64,
    ) -> DomainResult<TokenEntity> {
        self.save(token, TokenType::Refresh, expires_in).await
    }

    /// Inserts one new record for the configured provider
    ///
    /// Earlier records of the same type are left in place.
    pub async fn save(
        &self,
        token: &str,
        token_type: TokenType,
        expires_in: i64,
    ) -> DomainResult<TokenEntity> {
        let entity = TokenEntity::new(self.config.provider.as_str(), token, token_type, expires_in);

        match self.repository.insert(entity).await {
            Ok(saved) => {
                info!(
                    provider = %saved.provider,
                    token_type = %saved.token_type,
                    "saved {} token for {}",
                    saved.token_type,
                    saved.provider
                );
                Ok(saved)
            }
            Err(e) => {
                error!(
                    provider = %self.config.provider,
                    %token_type,
                    "failed to save token: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Fetches the current bearer and refresh records
    ///
    /// The scan is always filtered on the configured provider; the `provider`
    /// argument does not change which records are read. Of each type, the last
    /// record the scan visits wins. A type that was never saved comes back as
    /// its zero value, see [`TokenEntity::is_empty`].
    pub async fn fetch(&self, provider: &str) -> DomainResult<TokenPair> {
        if provider != self.config.provider {
            warn!(
                requested = provider,
                configured = %self.config.provider,
                "fetch ignores the requested provider and reads the configured one"
            );
        }

        let records = self
            .repository
            .scan_by_provider(&self.config.provider)
            .await
            .map_err(|e| {
                error!(provider = %self.config.provider, "failed to fetch tokens: {}", e);
                e
            })?;

        debug!(
            provider = %self.config.provider,
            records = records.len(),
            "scanned token records"
        );

        Ok(extract_tokens(records))
    }
}
