//! List Kind Value Object
//!
//! Names the two per-user item lists. Every list operation is
//! parameterized by this enum rather than duplicated per list.

use std::fmt;

/// The per-user item lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Favourites,
    History,
}

impl ListKind {
    /// Human-readable list name, as used in error messages
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ListKind::Favourites => "favourites",
            ListKind::History => "history",
        }
    }

    /// Column name in the users table (identical to the display name)
    #[inline]
    pub const fn column(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
