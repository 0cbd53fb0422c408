//! Note database operations

use chrono::Utc;
use rusqlite::{OptionalExtension, Result as SqliteResult, Row};
use uuid::Uuid;

use super::Database;
use crate::models::Note;

const NOTE_COLUMNS: &str = "id, title, note_text, user_id, created_at, updated_at";

impl Database {
    /// Persist a new note owned by `user_id`.
    pub fn create_note(&self, user_id: &str, title: &str, note_text: &str) -> SqliteResult<Note> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        conn.execute(
            "INSERT INTO notes (id, title, note_text, user_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            rusqlite::params![id, title, note_text, user_id, now_str],
        )?;

        Ok(Note {
            id,
            title: title.to_string(),
            note_text: note_text.to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// List all notes owned by `user_id`, oldest first.
    pub fn list_notes_for_user(&self, user_id: &str) -> SqliteResult<Vec<Note>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notes WHERE user_id = ?1 ORDER BY created_at, id",
            NOTE_COLUMNS
        ))?;

        let notes = stmt
            .query_map([user_id], Self::row_to_note)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(notes)
    }

    /// Update a note's title and body in place. The owner is immutable.
    /// Returns `None` when no note with this id exists.
    ///
    /// Keyed by note id alone — the caller's identity is not checked here.
    pub fn update_note(
        &self,
        id: &str,
        title: &str,
        note_text: &str,
    ) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();
        let updated_at = Utc::now().to_rfc3339();

        let rows_affected = conn.execute(
            "UPDATE notes SET title = ?2, note_text = ?3, updated_at = ?4 WHERE id = ?1",
            rusqlite::params![id, title, note_text, updated_at],
        )?;

        if rows_affected == 0 {
            return Ok(None);
        }

        conn.query_row(
            &format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS),
            [id],
            Self::row_to_note,
        )
        .optional()
    }

    /// Delete a note by id. Returns false when no note with this id exists.
    pub fn delete_note(&self, id: &str) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }

    fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
        let created_at_str: String = row.get(4)?;
        let updated_at_str: String = row.get(5)?;

        Ok(Note {
            id: row.get(0)?,
            title: row.get(1)?,
            note_text: row.get(2)?,
            user_id: row.get(3)?,
            created_at: chrono::DateTime::parse_from_rfc3339(&created_at_str)
                .unwrap()
                .with_timezone(&Utc),
            updated_at: chrono::DateTime::parse_from_rfc3339(&updated_at_str)
                .unwrap()
                .with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;
    use crate::models::User;
    use tempfile::tempdir;

    fn test_db_with_users() -> (tempfile::TempDir, Database, User, User) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::new(db_path.to_str().unwrap()).expect("Failed to create database");
        let ann = db.create_user("Ann", "a@x.com", "hash-a").unwrap();
        let bob = db.create_user("Bob", "b@x.com", "hash-b").unwrap();
        (dir, db, ann, bob)
    }

    #[test]
    fn test_list_is_scoped_to_owner() {
        let (_dir, db, ann, bob) = test_db_with_users();

        db.create_note(&ann.id, "Ann note", "body").unwrap();
        db.create_note(&bob.id, "Bob note", "body").unwrap();

        let ann_notes = db.list_notes_for_user(&ann.id).unwrap();
        assert_eq!(ann_notes.len(), 1);
        assert_eq!(ann_notes[0].title, "Ann note");

        let bob_notes = db.list_notes_for_user(&bob.id).unwrap();
        assert_eq!(bob_notes.len(), 1);
        assert_eq!(bob_notes[0].title, "Bob note");
    }

    #[test]
    fn test_list_empty_is_ok() {
        let (_dir, db, ann, _bob) = test_db_with_users();
        assert!(db.list_notes_for_user(&ann.id).unwrap().is_empty());
    }

    #[test]
    fn test_update_roundtrip_reflects_latest_version() {
        let (_dir, db, ann, _bob) = test_db_with_users();

        let note = db.create_note(&ann.id, "T1", "first").unwrap();
        db.update_note(&note.id, "T1 revised", "second").unwrap();

        let notes = db.list_notes_for_user(&ann.id).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "T1 revised");
        assert_eq!(notes[0].note_text, "second");
    }

    #[test]
    fn test_update_keeps_owner() {
        let (_dir, db, ann, _bob) = test_db_with_users();

        let note = db.create_note(&ann.id, "T1", "body").unwrap();
        let updated = db.update_note(&note.id, "T2", "body2").unwrap().unwrap();
        assert_eq!(updated.user_id, ann.id);
    }

    #[test]
    fn test_update_missing_note_returns_none() {
        let (_dir, db, _ann, _bob) = test_db_with_users();
        assert!(db.update_note("missing-id", "t", "b").unwrap().is_none());
    }

    #[test]
    fn test_delete_twice_fails_second_time() {
        let (_dir, db, ann, _bob) = test_db_with_users();

        let note = db.create_note(&ann.id, "T1", "body").unwrap();
        assert!(db.delete_note(&note.id).unwrap());
        assert!(!db.delete_note(&note.id).unwrap());
    }

    #[test]
    fn test_delete_missing_note_returns_false() {
        let (_dir, db, _ann, _bob) = test_db_with_users();
        assert!(!db.delete_note("missing-id").unwrap());
    }
}
