//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountAppState;
pub use middleware::{BearerAuthState, CurrentUser, require_bearer};
pub use router::{account_router, account_router_generic};
