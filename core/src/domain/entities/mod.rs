//! Domain entities representing stored credentials.

pub mod token;


pub use token::{TokenEntity, TokenPair, TokenType, EXPIRY_MARGIN_SECONDS};
