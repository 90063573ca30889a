use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Store-specific errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Migration failed
    #[error("Database migration failed: {0}")]
    Migration(String),

    /// A stored note body failed to deserialize. Note bodies are written as
    /// serialized JSON, so this indicates outside tampering or corruption.
    #[error("Note {id} holds invalid JSON: {source}")]
    InvalidNoteBody {
        id: i64,
        #[source]
        source: serde_json::Error,
    },

    /// Generic database error
    #[error("Database error: {0}")]
    Other(#[from] sqlx::Error),
}

// ============================================================================
// Data Structures
// ============================================================================

/// A saved headline, as listed by `GET /articles`.
///
/// `title` and `link` may be empty strings — extraction stores whatever the
/// markup offered, including nothing. `note_id` stays `None` until a note
/// is attached.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub note_id: Option<i64>,
    pub scraped_at: i64,
}

/// An article with its note reference expanded into the stored JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleWithNote {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub note: Option<serde_json::Value>,
    pub scraped_at: i64,
}

/// A free-form annotation. The body is whatever JSON object the client
/// posted, minus the target-article key.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: i64,
    pub body: serde_json::Value,
    pub created_at: i64,
}

/// Internal row type for note queries; the body column is deserialized in
/// `into_note`.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct NoteRow {
    pub id: i64,
    pub body: String,
    pub created_at: i64,
}

impl NoteRow {
    pub(crate) fn into_note(self) -> Result<Note, StoreError> {
        let body = serde_json::from_str(&self.body)
            .map_err(|source| StoreError::InvalidNoteBody { id: self.id, source })?;
        Ok(Note {
            id: self.id,
            body,
            created_at: self.created_at,
        })
    }
}
