//! Token store service
//!
//! Saves bearer and refresh tokens for the configured provider and reads
//! the current pair back out of the repository.

mod config;
mod extract;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenStoreConfig;
pub use extract::extract_tokens;
pub use service::TokenStore;
