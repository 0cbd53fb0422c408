//! Registration, login, and logout.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::auth::{self, password, SESSION_COOKIE};
use crate::db::is_unique_violation;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::AppState;

/// Register a new user
async fn register(data: web::Data<AppState>, body: web::Json<RegisterRequest>) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }));
    }

    let password_hash = match password::hash_password(&body.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Failed to hash password: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Sign up failed"
            }));
        }
    };

    match data.db.create_user(&body.name, &body.email, &password_hash) {
        Ok(user) => {
            log::info!("Registered user {}", user.id);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Sign up successful"
            }))
        }
        Err(e) if is_unique_violation(&e) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Email is already registered"
        })),
        Err(e) => {
            log::error!("Failed to create user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    }
}

/// Log in and issue a session token.
/// The token goes out three ways: response body, Authorization header, and
/// the session cookie.
async fn login(data: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }));
    }

    let user = match data.db.get_user_by_email(&body.email) {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => {
            log::error!("Login lookup failed: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }));
        }
    };

    match password::verify_password(&body.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return invalid_credentials(),
        Err(e) => {
            // Stored hash is malformed; treat as a failed login.
            log::error!("Password verification failed for {}: {}", user.id, e);
            return invalid_credentials();
        }
    }

    let token = match data.tokens.issue(&user.id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Failed to issue session token: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Login failed"
            }));
        }
    };

    // Non-httpOnly, non-secure, path "/": the service's explicit current
    // cookie configuration. The cookie outlives the token; expiry is
    // enforced by the token itself.
    let cookie = Cookie::build(SESSION_COOKIE, token.clone())
        .path("/")
        .max_age(CookieDuration::days(365))
        .http_only(false)
        .secure(false)
        .finish();

    HttpResponse::Ok()
        .insert_header(("Authorization", token.clone()))
        .cookie(cookie)
        .json(LoginResponse {
            message: "User logged in successfully".to_string(),
            token,
        })
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "Invalid credentials"
    }))
}

/// Clear the session cookie. The token itself stays valid until natural
/// expiry; there is no server-side session state to invalidate.
async fn logout(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = auth::authenticate_request(&data, &req) {
        return resp;
    }

    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "message": "Logged out"
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)));
    cfg.service(web::resource("/login").route(web::post().to(login)));
    cfg.service(web::resource("/logout").route(web::get().to(logout)));
}
