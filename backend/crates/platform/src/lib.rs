//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with memory zeroization
//! - Bearer token header extraction

pub mod bearer;
pub mod password;
