//! Business services containing the token store use cases.

pub mod token;

pub use token::{extract_tokens, TokenStore, TokenStoreConfig};
