use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// User - a registered account
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored lowercased; unique.
    pub email: String,
    /// Argon2id PHC string. Never the plaintext.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Request to register a new user
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < 3 {
            return Err(ValidationError::new("name must be at least 3 characters"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::new("password must not be empty"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new("email must be a valid email address"));
        }
        Ok(())
    }
}

/// Request to log in
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new("email must be a valid email address"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::new("password must not be empty"));
        }
        Ok(())
    }
}

/// Successful login response; the token is also echoed in the
/// Authorization header and the session cookie.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Dashboard data for the logged-in user
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub name: String,
    pub email: String,
}

/// Structural email check: one local part, one domain with a dot, no spaces.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
