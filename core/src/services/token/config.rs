//! Configuration for the token store

use at_shared::config::{TokenTableConfig, DEFAULT_PROVIDER};

/// Configuration for the token store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStoreConfig {
    /// Provider stamped on every saved record and used to filter fetches
    pub provider: String,
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
        }
    }
}

impl TokenStoreConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }
}

impl From<&TokenTableConfig> for TokenStoreConfig {
    fn from(table: &TokenTableConfig) -> Self {
        Self::new(table.provider.clone())
    }
}
