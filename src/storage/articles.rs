use super::schema::Database;
use super::types::{Article, ArticleWithNote, StoreError};

/// Row type for the article/note LEFT JOIN in `get_article_with_note`.
type ArticleNoteRow = (i64, String, String, i64, Option<i64>, Option<String>);

impl Database {
    // ========================================================================
    // Article Operations
    // ========================================================================

    /// Insert one scraped headline. Empty title/link are stored as-is.
    pub async fn insert_article(&self, title: &str, link: &str) -> Result<Article, StoreError> {
        let now = chrono::Utc::now().timestamp();
        let result = sqlx::query("INSERT INTO articles (title, link, scraped_at) VALUES (?, ?, ?)")
            .bind(title)
            .bind(link)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(Article {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            link: link.to_string(),
            note_id: None,
            scraped_at: now,
        })
    }

    /// Get every article, store natural order, note reference unexpanded.
    pub async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        let articles = sqlx::query_as::<_, Article>(
            "SELECT id, title, link, note_id, scraped_at FROM articles",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    /// Get a single article by id.
    pub async fn get_article(&self, id: i64) -> Result<Option<Article>, StoreError> {
        let article = sqlx::query_as::<_, Article>(
            "SELECT id, title, link, note_id, scraped_at FROM articles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    /// Get an article with its note reference expanded into the stored
    /// JSON object. `note` is `None` when no note is attached.
    pub async fn get_article_with_note(
        &self,
        id: i64,
    ) -> Result<Option<ArticleWithNote>, StoreError> {
        let row: Option<ArticleNoteRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.title, a.link, a.scraped_at, n.id, n.body
            FROM articles a
            LEFT JOIN notes n ON n.id = a.note_id
            WHERE a.id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, title, link, scraped_at, note_id, note_body)) = row else {
            return Ok(None);
        };

        let note = match (note_id, note_body) {
            (Some(note_id), Some(body)) => Some(
                serde_json::from_str(&body)
                    .map_err(|source| StoreError::InvalidNoteBody { id: note_id, source })?,
            ),
            _ => None,
        };

        Ok(Some(ArticleWithNote {
            id,
            title,
            link,
            note,
            scraped_at,
        }))
    }

    /// Point an article's note reference at `note_id` and return the
    /// updated article. `None` means no article matched — the note itself
    /// is left alone (and orphaned, if freshly created).
    pub async fn attach_note(
        &self,
        article_id: i64,
        note_id: i64,
    ) -> Result<Option<Article>, StoreError> {
        let result = sqlx::query("UPDATE articles SET note_id = ? WHERE id = ?")
            .bind(note_id)
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_article(article_id).await
    }

    /// Delete an article by id, returning the number of rows removed.
    /// Deleting a missing id is a no-op (count 0). The attached note, if
    /// any, is not touched.
    pub async fn delete_article(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
