//! Note CRUD endpoints.
//!
//! Listing and creation are scoped to the authenticated caller. Update and
//! delete are keyed by note id alone and do not confirm ownership — the
//! service's current behavior, pinned by tests rather than silently changed.

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::auth;
use crate::models::{
    DeleteNoteRequest, NoteActionResponse, NoteItem, NotesListResponse, SaveNoteRequest,
    UpdateNoteRequest,
};
use crate::AppState;

/// List the caller's notes
async fn get_notes(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match auth::authenticate_request(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match data.db.list_notes_for_user(&user.id) {
        Ok(notes) => HttpResponse::Ok().json(NotesListResponse {
            success: true,
            data: notes.into_iter().map(NoteItem::from).collect(),
            message: String::new(),
        }),
        Err(e) => {
            log::error!("Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    }
}

/// Save a new note owned by the caller
async fn save_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<SaveNoteRequest>,
) -> impl Responder {
    let user = match auth::authenticate_request(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }));
    }

    match data.db.create_note(&user.id, &body.title, &body.note_text) {
        Ok(_) => HttpResponse::Ok().json(NoteActionResponse {
            success: true,
            message: "Note saved successfully".to_string(),
        }),
        Err(e) => {
            log::error!("Failed to save note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    }
}

/// Update a note's title and body by id
async fn update_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    if let Err(resp) = auth::authenticate_request(&data, &req) {
        return resp;
    }

    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }));
    }

    match data.db.update_note(&body.id, &body.title, &body.note_text) {
        Ok(Some(_)) => HttpResponse::Ok().json(NoteActionResponse {
            success: true,
            message: "Note updated successfully".to_string(),
        }),
        Ok(None) => HttpResponse::NotFound().json(NoteActionResponse {
            success: false,
            message: "Note not found".to_string(),
        }),
        Err(e) => {
            log::error!("Failed to update note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    }
}

/// Delete a note by id
async fn delete_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<DeleteNoteRequest>,
) -> impl Responder {
    if let Err(resp) = auth::authenticate_request(&data, &req) {
        return resp;
    }

    match data.db.delete_note(&body.id) {
        Ok(true) => HttpResponse::Ok().json(NoteActionResponse {
            success: true,
            message: "Note deleted successfully".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(NoteActionResponse {
            success: false,
            message: "Note not found".to_string(),
        }),
        Err(e) => {
            log::error!("Failed to delete note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/get/notes").route(web::get().to(get_notes)));
    cfg.service(web::resource("/save/notes").route(web::post().to(save_note)));
    cfg.service(web::resource("/update/notes").route(web::put().to(update_note)));
    cfg.service(web::resource("/delete/notes").route(web::delete().to(delete_note)));
}
