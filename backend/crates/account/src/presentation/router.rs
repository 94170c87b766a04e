//! Account Router

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::UserStore;
use crate::infra::postgres::PgUserStore;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{self, BearerAuthState};

/// Create the account router with the PostgreSQL store
pub fn account_router(store: PgUserStore, config: AccountConfig) -> Router {
    account_router_generic(store, config)
}

/// Create a generic account router for any store implementation
pub fn account_router_generic<S>(store: S, config: AccountConfig) -> Router
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let auth_state = BearerAuthState {
        store: state.store.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route("/favourites", get(handlers::get_favourites::<S>))
        .route(
            "/favourites/{id}",
            put(handlers::add_favourite::<S>).delete(handlers::remove_favourite::<S>),
        )
        .route("/history", get(handlers::get_history::<S>))
        .route(
            "/history/{id}",
            put(handlers::add_history::<S>).delete(handlers::remove_history::<S>),
        )
        .route_layer(axum::middleware::from_fn(
            move |req: Request<Body>, next: Next| {
                let auth_state = auth_state.clone();
                async move { middleware::require_bearer(auth_state, req, next).await }
            },
        ))
        .with_state(state.clone());

    Router::new()
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .with_state(state)
        .merge(protected)
}
