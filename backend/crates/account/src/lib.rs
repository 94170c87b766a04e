//! Account (User Account) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, store trait
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with username + password confirmation
//! - Login issuing an HMAC-signed bearer token
//! - Per-user favourites and history lists, capped at 50 entries
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored in clear
//! - Bearer tokens carry only `{id, userName}` claims
//! - Protected routes resolve the token to a live user row before
//!   any handler runs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgUserStore;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::*;
    pub use crate::infra::postgres::PgUserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
