//! Token entities for provider credentials.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::TokenError;

/// Seconds shaved off every token's stated lifetime before it counts as expired
pub const EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Kind of credential a record holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived access credential
    Bearer,
    /// Longer-lived credential used to obtain new bearer tokens
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Bearer => "bearer",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bearer" => Ok(TokenType::Bearer),
            "refresh" => Ok(TokenType::Refresh),
            other => Err(TokenError::UnknownTokenType(other.to_string())),
        }
    }
}

/// One stored credential record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntity {
    /// Credential owner
    pub provider: String,

    /// Opaque credential value
    pub token: String,

    /// Bearer or refresh
    pub token_type: TokenType,

    /// Seconds of validity from creation, as reported by the issuer
    pub expires_in: i64,

    /// Unix timestamp (seconds) of the write
    pub created_at: i64,
}

impl TokenEntity {
    /// Creates a record stamped with the current time
    pub fn new(
        provider: impl Into<String>,
        token: impl Into<String>,
        token_type: TokenType,
        expires_in: i64,
    ) -> Self {
        Self {
            provider: provider.into(),
            token: token.into(),
            token_type,
            expires_in,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Zero-valued record standing in for a slot that has never been saved
    pub fn empty(token_type: TokenType) -> Self {
        Self {
            provider: String::new(),
            token: String::new(),
            token_type,
            expires_in: 0,
            created_at: 0,
        }
    }

    /// Whether this is the zero value rather than a stored record
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// Effective expiration instant: creation time plus the stated lifetime minus the margin
    ///
    /// Saturates at the `i64` bounds, since lifetimes are stored unvalidated.
    pub fn expires_at(&self) -> i64 {
        self.created_at
            .saturating_add(self.expires_in.saturating_sub(EXPIRY_MARGIN_SECONDS))
    }

    /// Checks the record against the current wall-clock time
    ///
    /// # Returns
    ///
    /// `true` once now is strictly past [`expires_at`](Self::expires_at)
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        let expired = self.is_expired_at(now);

        debug!(
            token_type = %self.token_type,
            created_at = self.created_at,
            expires_at = self.expires_at(),
            now,
            expired,
            "checked token expiry"
        );

        expired
    }

    /// Same predicate as [`is_expired`](Self::is_expired) against an explicit clock
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expires_at()
    }
}

/// The bearer and refresh records returned by a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub bearer: TokenEntity,
    pub refresh: TokenEntity,
}

impl TokenPair {
    /// A pair with both slots at their zero value
    pub fn empty() -> Self {
        Self {
            bearer: TokenEntity::empty(TokenType::Bearer),
            refresh: TokenEntity::empty(TokenType::Refresh),
        }
    }

    pub fn into_tuple(self) -> (TokenEntity, TokenEntity) {
        (self.bearer, self.refresh)
    }
}

impl Default for TokenPair {
    fn default() -> Self {
        Self::empty()
    }
}
