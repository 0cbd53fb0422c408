mod note;
mod user;

pub use note::{
    DeleteNoteRequest, Note, NoteActionResponse, NoteItem, NotesListResponse, SaveNoteRequest,
    UpdateNoteRequest,
};
pub use user::{DashboardResponse, LoginRequest, LoginResponse, RegisterRequest, User};

use std::fmt;

/// A rejected request payload. The message is surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
