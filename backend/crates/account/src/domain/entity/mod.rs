//! Entity Module

pub mod user;

pub use user::{MAX_LIST_LEN, User};
