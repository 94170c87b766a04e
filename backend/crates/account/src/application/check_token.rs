//! Check Token Use Case
//!
//! Verifies a bearer token and resolves its claims to a live user.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::token::verify_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AccountError, AccountResult};

/// Check token use case
pub struct CheckTokenUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> CheckTokenUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self { store, config }
    }

    /// Verify the token and resolve it to a user record
    ///
    /// Any failure (bad signature, expiry, lookup error, deleted user)
    /// collapses to `TokenInvalid`; the caller treats the request as
    /// unauthenticated.
    pub async fn resolve(&self, token: &str) -> AccountResult<User> {
        let claims = verify_token(&self.config, token)?;

        let user = self
            .store
            .find_by_id(&UserId::from_uuid(claims.id))
            .await
            .map_err(|_| AccountError::TokenInvalid)?
            .ok_or(AccountError::TokenInvalid)?;

        Ok(user)
    }

    /// Just check whether the token resolves (returns bool)
    pub async fn is_valid(&self, token: &str) -> bool {
        self.resolve(token).await.is_ok()
    }
}
