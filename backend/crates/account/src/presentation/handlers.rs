//! HTTP Handlers
//!
//! Route handlers delegate to use cases and translate failures into the
//! wire contract: register/login failures carry `{"message": ...}`,
//! list failures carry `{"error": ...}`, both with status 422.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{ListUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserStore;
use crate::domain::value_object::list_kind::ListKind;
use crate::error::AccountError;
use crate::presentation::dto::{
    ErrorResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Rejection wrappers
// ============================================================================

/// Failure rendered as `{"message": ...}` (register/login routes)
pub struct MessageRejection(pub AccountError);

impl From<AccountError> for MessageRejection {
    fn from(err: AccountError) -> Self {
        Self(err)
    }
}

impl IntoResponse for MessageRejection {
    fn into_response(self) -> Response {
        self.0.log();
        (
            self.0.status_code(),
            Json(MessageResponse {
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Failure rendered as `{"error": ...}` (list routes)
pub struct ErrorRejection(pub AccountError);

impl From<AccountError> for ErrorRejection {
    fn from(err: AccountError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ErrorRejection {
    fn into_response(self) -> Response {
        self.0.log();
        (
            self.0.status_code(),
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /api/user/register
pub async fn register<S>(
    State(state): State<AccountAppState<S>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, MessageRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.store.clone());

    let output = use_case
        .execute(RegisterInput {
            user_name: req.user_name,
            password: req.password,
            password2: req.password2,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: output.message,
    }))
}

/// POST /api/user/login
pub async fn login<S>(
    State(state): State<AccountAppState<S>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, MessageRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.store.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: req.user_name,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Favourites (protected)
// ============================================================================

/// GET /api/user/favourites
pub async fn get_favourites<S>(
    State(state): State<AccountAppState<S>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<String>>, ErrorRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUseCase::new(state.store.clone(), ListKind::Favourites);
    Ok(Json(use_case.get(&user.user_id).await?))
}

/// PUT /api/user/favourites/{id}
pub async fn add_favourite<S>(
    State(state): State<AccountAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ErrorRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUseCase::new(state.store.clone(), ListKind::Favourites);
    Ok(Json(use_case.add(&user.user_id, &id).await?))
}

/// DELETE /api/user/favourites/{id}
pub async fn remove_favourite<S>(
    State(state): State<AccountAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ErrorRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUseCase::new(state.store.clone(), ListKind::Favourites);
    Ok(Json(use_case.remove(&user.user_id, &id).await?))
}

// ============================================================================
// History (protected)
// ============================================================================

/// GET /api/user/history
pub async fn get_history<S>(
    State(state): State<AccountAppState<S>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<String>>, ErrorRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUseCase::new(state.store.clone(), ListKind::History);
    Ok(Json(use_case.get(&user.user_id).await?))
}

/// PUT /api/user/history/{id}
pub async fn add_history<S>(
    State(state): State<AccountAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ErrorRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUseCase::new(state.store.clone(), ListKind::History);
    Ok(Json(use_case.add(&user.user_id, &id).await?))
}

/// DELETE /api/user/history/{id}
pub async fn remove_history<S>(
    State(state): State<AccountAppState<S>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ErrorRejection>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = ListUseCase::new(state.store.clone(), ListKind::History);
    Ok(Json(use_case.remove(&user.user_id, &id).await?))
}
