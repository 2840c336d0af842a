//! # Auth Table Core
//!
//! Domain layer for the provider token store: the credential record and its
//! expiry rule, the repository interface the backing store implements, the
//! token store service, and the error types they share.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
