//! Domain layer containing the token entities.

pub mod entities;

pub use entities::*;
