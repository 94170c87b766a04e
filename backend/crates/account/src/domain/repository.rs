//! Store Trait
//!
//! Interface for user persistence. Implementation is in the
//! infrastructure layer; tests provide an in-memory substitute.

use crate::domain::entity::user::User;
use crate::domain::value_object::{list_kind::ListKind, user_id::UserId};
use crate::error::AccountResult;

/// User store trait
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Insert a newly registered user
    ///
    /// A duplicate user name fails with `UserNameTaken` and writes
    /// nothing; any other persistence failure maps to `CreateFailed`.
    async fn insert(&self, user: &User) -> AccountResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &str) -> AccountResult<Option<User>>;

    /// Add an item to a list with set semantics, returning the updated
    /// list. `None` when no row matches the user id.
    async fn push_unique(
        &self,
        user_id: &UserId,
        kind: ListKind,
        item_id: &str,
    ) -> AccountResult<Option<Vec<String>>>;

    /// Remove an item from a list unconditionally (no-op when absent),
    /// returning the updated list. `None` when no row matches.
    async fn pull(
        &self,
        user_id: &UserId,
        kind: ListKind,
        item_id: &str,
    ) -> AccountResult<Option<Vec<String>>>;

    /// Idempotent connectivity check, safe to repeat at any time
    async fn ping(&self) -> AccountResult<()>;
}
