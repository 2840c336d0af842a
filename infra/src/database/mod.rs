//! Database module - DynamoDB implementation of the token table
//!
//! This module provides:
//! - AWS client bootstrap for the token table
//! - Attribute-map encoding of token records
//! - The `TokenRepository` implementation

pub mod dynamodb;


// Re-export commonly used types
pub use dynamodb::{connect, entity_to_item, item_to_entity, DynamoDbTokenRepository};
