use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Note - a text note owned by exactly one user
#[derive(Debug, Clone)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub note_text: String,
    /// Owning user. Authoritative; immutable after creation.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to save a new note
#[derive(Debug, Clone, Deserialize)]
pub struct SaveNoteRequest {
    pub title: String,
    pub note_text: String,
}

impl SaveNoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_note_fields(&self.title, &self.note_text)
    }
}

/// Request to update an existing note's title and body
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: String,
    pub title: String,
    pub note_text: String,
}

impl UpdateNoteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::new("id must not be empty"));
        }
        validate_note_fields(&self.title, &self.note_text)
    }
}

/// Request to delete a note by id
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteNoteRequest {
    pub id: String,
}

fn validate_note_fields(title: &str, note_text: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("title must not be empty"));
    }
    if note_text.is_empty() {
        return Err(ValidationError::new("note_text must not be empty"));
    }
    Ok(())
}

/// Note as listed for its owner
#[derive(Debug, Clone, Serialize)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub note_text: String,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        NoteItem {
            id: note.id,
            title: note.title,
            note_text: note.note_text,
        }
    }
}

/// Envelope for note listings
#[derive(Debug, Clone, Serialize)]
pub struct NotesListResponse {
    pub success: bool,
    pub data: Vec<NoteItem>,
    pub message: String,
}

/// Envelope for note mutations
#[derive(Debug, Clone, Serialize)]
pub struct NoteActionResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_note_validation() {
        let ok = SaveNoteRequest {
            title: "T1".to_string(),
            note_text: "body".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_title = SaveNoteRequest {
            title: String::new(),
            note_text: "body".to_string(),
        };
        assert!(no_title.validate().is_err());

        let no_body = SaveNoteRequest {
            title: "T1".to_string(),
            note_text: String::new(),
        };
        assert!(no_body.validate().is_err());
    }

    #[test]
    fn test_update_note_requires_id() {
        let req = UpdateNoteRequest {
            id: "  ".to_string(),
            title: "T1".to_string(),
            note_text: "body".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
