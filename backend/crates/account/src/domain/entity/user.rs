//! User Entity
//!
//! The sole persisted entity: credentials plus the two bounded item
//! lists. A plain data record; all behavior lives in the use cases.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    list_kind::ListKind, user_id::UserId, user_password::UserPassword,
};

/// Maximum number of entries in each per-user list
pub const MAX_LIST_LEN: usize = 50;

/// User record
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, for login and display)
    pub user_name: String,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Favourite item ids, ordered, no duplicates
    pub favourites: Vec<String>,
    /// History item ids, ordered, no duplicates
    pub history: Vec<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with empty lists
    pub fn new(user_name: String, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            favourites: Vec::new(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The list selected by `kind`
    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Favourites => &self.favourites,
            ListKind::History => &self.history,
        }
    }

    /// Whether the list selected by `kind` is at capacity
    pub fn list_is_full(&self, kind: ListKind) -> bool {
        self.list(kind).len() >= MAX_LIST_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn user() -> User {
        let hash = UserPassword::from_raw(&RawPassword::new("a password".to_string())).unwrap();
        User::new("alice".to_string(), hash)
    }

    #[test]
    fn test_new_user_has_empty_lists() {
        let user = user();
        assert!(user.favourites.is_empty());
        assert!(user.history.is_empty());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_list_accessor() {
        let mut user = user();
        user.favourites.push("f1".to_string());
        user.history.push("h1".to_string());

        assert_eq!(user.list(ListKind::Favourites), ["f1".to_string()]);
        assert_eq!(user.list(ListKind::History), ["h1".to_string()]);
    }

    #[test]
    fn test_capacity_per_list() {
        let mut user = user();
        user.favourites = (0..MAX_LIST_LEN).map(|i| i.to_string()).collect();

        assert!(user.list_is_full(ListKind::Favourites));
        // Capacities are independent
        assert!(!user.list_is_full(ListKind::History));
    }
}
