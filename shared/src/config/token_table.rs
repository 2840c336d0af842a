//! Token table configuration module

use serde::{Deserialize, Serialize};

/// Table the tokens are written to when nothing else is configured
pub const DEFAULT_TABLE_NAME: &str = "authTable";

/// Provider every record is written and filtered under
pub const DEFAULT_PROVIDER: &str = "lightspeed";

/// Location of the token table and the identity records are stored under
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenTableConfig {
    /// AWS region of the table; `None` defers to the default AWS provider chain
    #[serde(default)]
    pub region: Option<String>,

    /// Table name
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Provider written on save and used as the scan filter on fetch
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Static access key id; the default credential chain is used when absent
    #[serde(default)]
    pub access_key_id: Option<String>,

    /// Static secret access key, paired with `access_key_id`
    #[serde(default, skip_serializing)]
    pub secret_access_key: Option<String>,
}

impl Default for TokenTableConfig {
    fn default() -> Self {
        Self {
            region: None,
            table_name: default_table_name(),
            provider: default_provider(),
            endpoint_url: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

impl TokenTableConfig {
    /// Create from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: get("AWS_REGION"),
            table_name: get("AUTH_TABLE_NAME").unwrap_or_else(default_table_name),
            provider: get("AUTH_TABLE_PROVIDER").unwrap_or_else(default_provider),
            endpoint_url: get("AUTH_TABLE_ENDPOINT_URL"),
            access_key_id: get("AUTH_TABLE_ACCESS_KEY_ID"),
            secret_access_key: get("AUTH_TABLE_SECRET_ACCESS_KEY"),
        }
    }

    /// Create a configuration for a region with default table and provider
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_static_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Static credentials, only when both halves are present
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}
