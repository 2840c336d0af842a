//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `token_table` - Backing table, region and provider settings

pub mod environment;
pub mod token_table;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use token_table::{
    TokenTableConfig, DEFAULT_PROVIDER, DEFAULT_TABLE_NAME,
};
