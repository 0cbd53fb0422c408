//! Session authentication for HTTP handlers.

pub mod password;
pub mod token;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// The identity established for an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Extract the session token from the Authorization header or the session cookie.
fn token_from_request(req: &HttpRequest) -> Option<String> {
    if let Some(value) = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        let value = value.trim();
        let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Validate the caller's session token and re-check the backing user record.
///
/// Fails closed: a missing token, bad signature, expired token, or a user
/// record that no longer resolves all map to 401. The store re-check on every
/// request trades performance for immediate revocation when a user disappears.
pub fn authenticate_request(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<AuthedUser, HttpResponse> {
    let token = match token_from_request(req) {
        Some(t) => t,
        None => {
            return Err(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "No authorization token provided"
            })));
        }
    };

    let claims = match state.tokens.verify(&token) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("Rejected session token: {}", e);
            return Err(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid or expired token"
            })));
        }
    };

    match state.db.resolve_token_user(&claims.sub, &claims.email) {
        Ok(Some(user)) => Ok(AuthedUser {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
        Ok(None) => Err(HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid or expired token"
        }))),
        Err(e) => {
            log::error!("Token user lookup failed: {}", e);
            Err(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            })))
        }
    }
}
