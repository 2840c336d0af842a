//! Shared configuration types for the auth-table workspace
//!
//! This crate holds the pieces every other crate needs to agree on:
//! - Deployment environment detection
//! - Logging configuration
//! - Token table location and provider settings

pub mod config;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, TokenTableConfig};
