//! Login Use Case
//!
//! Authenticates a user and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::token::issue_token;
use crate::domain::repository::UserStore;
use crate::domain::value_object::{user_id::UserId, user_password::RawPassword};
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub user_id: UserId,
    pub user_name: String,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> LoginUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        let user = self
            .store
            .find_by_user_name(&input.user_name)
            .await?
            .ok_or_else(|| AccountError::UserNotFound {
                user_name: input.user_name.clone(),
            })?;

        let raw_password = RawPassword::new(input.password);
        if !user.password_hash.verify(&raw_password) {
            return Err(AccountError::IncorrectPassword {
                user_name: user.user_name,
            });
        }

        let token = issue_token(&self.config, user.user_id.into_uuid(), &user.user_name)?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
            user_name: user.user_name,
        })
    }
}
