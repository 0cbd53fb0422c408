//! User database operations

use chrono::Utc;
use rusqlite::{OptionalExtension, Result as SqliteResult, Row};
use uuid::Uuid;

use super::Database;
use crate::models::User;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

impl Database {
    /// Create a new user. Email is stored lowercased; a duplicate email
    /// surfaces as a constraint violation.
    pub fn create_user(&self, name: &str, email: &str, password_hash: &str) -> SqliteResult<User> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let email = email.trim().to_lowercase();
        let created_at = Utc::now();

        conn.execute(
            "INSERT INTO users (id, name, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![id, name, email, password_hash, created_at.to_rfc3339()],
        )?;

        Ok(User {
            id,
            name: name.to_string(),
            email,
            password_hash: password_hash.to_string(),
            created_at,
        })
    }

    /// Look up a user by (lowercased) email.
    pub fn get_user_by_email(&self, email: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let email = email.trim().to_lowercase();

        conn.query_row(
            &format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS),
            [&email],
            Self::row_to_user,
        )
        .optional()
    }

    /// Look up a user by id.
    pub fn get_user_by_id(&self, id: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();

        conn.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            [id],
            Self::row_to_user,
        )
        .optional()
    }

    /// Resolve the user record backing a session token's claims.
    /// Matches by id or email, so a token stays valid only while either
    /// claim still points at a live record.
    pub fn resolve_token_user(&self, id: &str, email: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let email = email.trim().to_lowercase();

        conn.query_row(
            &format!(
                "SELECT {} FROM users WHERE id = ?1 OR email = ?2",
                USER_COLUMNS
            ),
            [id, email.as_str()],
            Self::row_to_user,
        )
        .optional()
    }

    fn row_to_user(row: &Row) -> rusqlite::Result<User> {
        let created_at_str: String = row.get(4)?;

        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            created_at: chrono::DateTime::parse_from_rfc3339(&created_at_str)
                .unwrap()
                .with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{is_unique_violation, Database};
    use tempfile::tempdir;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::new(db_path.to_str().unwrap()).expect("Failed to create database");
        (dir, db)
    }

    #[test]
    fn test_create_and_get_user() {
        let (_dir, db) = test_db();

        let user = db
            .create_user("Ann", "A@X.com", "hash")
            .expect("Failed to create user");
        assert_eq!(user.email, "a@x.com");

        let by_email = db.get_user_by_email("a@x.com").unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id.clone()));

        let by_id = db.get_user_by_id(&user.id).unwrap();
        assert_eq!(by_id.map(|u| u.name), Some("Ann".to_string()));
    }

    #[test]
    fn test_duplicate_email_is_unique_violation() {
        let (_dir, db) = test_db();

        db.create_user("Ann", "a@x.com", "hash").unwrap();
        let err = db.create_user("Other", "A@x.COM", "hash2").unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_email_lookup_is_case_insensitive() {
        let (_dir, db) = test_db();

        db.create_user("Ann", "Ann@Example.com", "hash").unwrap();
        assert!(db.get_user_by_email("ANN@EXAMPLE.COM").unwrap().is_some());
    }

    #[test]
    fn test_resolve_token_user_matches_id_or_email() {
        let (_dir, db) = test_db();

        let user = db.create_user("Ann", "a@x.com", "hash").unwrap();

        assert!(db.resolve_token_user(&user.id, "other@x.com").unwrap().is_some());
        assert!(db.resolve_token_user("missing-id", "a@x.com").unwrap().is_some());
        assert!(db
            .resolve_token_user("missing-id", "other@x.com")
            .unwrap()
            .is_none());
    }
}
