//! DynamoDB-backed token table

pub mod connection;
pub mod item;
pub mod token_repository_impl;

pub use connection::connect;
pub use item::{entity_to_item, item_to_entity};
pub use token_repository_impl::DynamoDbTokenRepository;
