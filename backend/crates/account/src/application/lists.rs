//! List Use Case
//!
//! Bounded add/remove/get over the favourites and history lists,
//! parameterized by `ListKind`.

use std::sync::Arc;

use crate::domain::repository::UserStore;
use crate::domain::value_object::{list_kind::ListKind, user_id::UserId};
use crate::error::{AccountError, AccountResult};

/// List use case
pub struct ListUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    kind: ListKind,
}

impl<S> ListUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, kind: ListKind) -> Self {
        Self { store, kind }
    }

    /// Current contents of the list
    pub async fn get(&self, user_id: &UserId) -> AccountResult<Vec<String>> {
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserIdNotFound { user_id: *user_id })?;

        Ok(user.list(self.kind).to_vec())
    }

    /// Add an item with set semantics, rejecting when the list is full
    ///
    /// The capacity check and the mutation are separate store calls;
    /// concurrent adds for the same user can both pass the check before
    /// either write lands.
    pub async fn add(&self, user_id: &UserId, item_id: &str) -> AccountResult<Vec<String>> {
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::ListUpdateFailed {
                list: self.kind,
                user_id: *user_id,
            })?;

        if user.list_is_full(self.kind) {
            return Err(AccountError::ListFull {
                list: self.kind,
                user_id: *user_id,
            });
        }

        let updated = self
            .store
            .push_unique(user_id, self.kind, item_id)
            .await
            .map_err(|e| {
                e.log();
                AccountError::ListUpdateFailed {
                    list: self.kind,
                    user_id: *user_id,
                }
            })?
            .ok_or(AccountError::ListUpdateFailed {
                list: self.kind,
                user_id: *user_id,
            })?;

        tracing::debug!(
            user_id = %user_id,
            list = %self.kind,
            item_id = %item_id,
            len = updated.len(),
            "List item added"
        );

        Ok(updated)
    }

    /// Remove an item; a no-op when the item is absent
    pub async fn remove(&self, user_id: &UserId, item_id: &str) -> AccountResult<Vec<String>> {
        let updated = self
            .store
            .pull(user_id, self.kind, item_id)
            .await
            .map_err(|e| {
                e.log();
                AccountError::ListUpdateFailed {
                    list: self.kind,
                    user_id: *user_id,
                }
            })?
            .ok_or(AccountError::ListUpdateFailed {
                list: self.kind,
                user_id: *user_id,
            })?;

        tracing::debug!(
            user_id = %user_id,
            list = %self.kind,
            item_id = %item_id,
            len = updated.len(),
            "List item removed"
        );

        Ok(updated)
    }
}
