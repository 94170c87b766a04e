//! API DTOs (Data Transfer Objects)
//!
//! Wire field names are camelCase (`userName`, `password2`). Success
//! bodies on the list routes are bare JSON arrays and need no DTO.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub password: String,
    pub password2: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// Shared bodies
// ============================================================================

/// `{"message": ...}` body — register/login success and failure
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"error": ...}` body — list route failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
