//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
    pub password2: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// Confirmation message naming the new user
    pub message: String,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> RegisterUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        if input.password != input.password2 {
            return Err(AccountError::PasswordMismatch);
        }

        // Hash before anything touches the store; the clear text never
        // leaves this scope
        let raw_password = RawPassword::new(input.password);
        let password_hash = UserPassword::from_raw(&raw_password)?;

        let user = User::new(input.user_name, password_hash);

        self.store.insert(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            message: format!("User {} successfully registered", user.user_name),
        })
    }
}
