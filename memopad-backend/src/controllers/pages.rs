//! Page-level routes. The view layer is not part of this service; routes
//! that rendered templates in a browser-facing deployment answer with JSON.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::auth;
use crate::models::DashboardResponse;
use crate::AppState;

/// Landing route: authenticated callers are redirected to their dashboard.
async fn index(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if auth::authenticate_request(&data, &req).is_ok() {
        return HttpResponse::Found()
            .insert_header((header::LOCATION, "/user"))
            .finish();
    }

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to memopad. Log in to manage your notes."
    }))
}

/// Dashboard data for the logged-in user
async fn user_dashboard(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match auth::authenticate_request(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    HttpResponse::Ok().json(DashboardResponse {
        name: user.name,
        email: user.email,
    })
}

/// Notes page entry point; the notes themselves are served from /get/notes.
async fn notes_page(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = auth::authenticate_request(&data, &req) {
        return resp;
    }

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Notes are served from /get/notes"
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)));
    cfg.service(web::resource("/user").route(web::get().to(user_dashboard)));
    cfg.service(web::resource("/notes/page").route(web::get().to(notes_page)));
}
