use super::schema::Database;
use super::types::{Note, NoteRow, StoreError};

impl Database {
    // ========================================================================
    // Note Operations
    // ========================================================================

    /// Insert a note from the client's free-form JSON object.
    ///
    /// The body is stored as serialized JSON — no schema is enforced
    /// beyond "is a JSON value". Notes are created before the target
    /// article is touched, so a failed attach leaves the note behind.
    pub async fn insert_note(&self, body: &serde_json::Value) -> Result<Note, StoreError> {
        let now = chrono::Utc::now().timestamp();
        let serialized = body.to_string();
        let result = sqlx::query("INSERT INTO notes (body, created_at) VALUES (?, ?)")
            .bind(&serialized)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(Note {
            id: result.last_insert_rowid(),
            body: body.clone(),
            created_at: now,
        })
    }

    /// Get a note by id.
    pub async fn get_note(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query_as::<_, NoteRow>(
            "SELECT id, body, created_at FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(NoteRow::into_note).transpose()
    }
}
