//! Bearer Auth Middleware
//!
//! Middleware for requiring a valid bearer token on protected routes.
//! Rejections happen here with 401 before any handler logic executes.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::CheckTokenUseCase;
use crate::application::config::AccountConfig;
use crate::domain::repository::UserStore;
use crate::domain::value_object::user_id::UserId;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AccountConfig>,
}

/// Identity of the authenticated caller, stored in request extensions
#[derive(Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
}

/// Middleware that requires a valid bearer token resolving to a live user
pub async fn require_bearer<S>(
    state: BearerAuthState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer(req.headers()) else {
        return Err(unauthorized());
    };

    let use_case = CheckTokenUseCase::new(state.store.clone(), state.config.clone());

    let user = match use_case.resolve(&token).await {
        Ok(user) => user,
        Err(e) => {
            e.log();
            return Err(unauthorized());
        }
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        user_name: user.user_name,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    AppError::unauthorized("Authentication required").into_response()
}
