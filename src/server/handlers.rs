//! The five resource routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use futures::future;
use serde::Serialize;
use serde_json::Value;

use crate::scrape::{extract_headlines, fetch_page};
use crate::storage::{Article, ArticleWithNote};

use super::error::ApiError;
use super::AppState;

/// Outcome of one scrape run: a single response for the whole fan-out.
#[derive(Debug, Serialize)]
pub struct ScrapeSummary {
    pub created: usize,
    pub failed: usize,
    pub failures: Vec<String>,
}

/// `GET /scrape` — fetch the homepage, extract every headline, insert one
/// article per record.
///
/// The inserts fan out as independent futures — each owns its extracted
/// record — and are gathered with a join before the one and only response
/// is written. A record whose heading had no anchor still inserts, with
/// empty title/link.
pub async fn scrape(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScrapeSummary>, ApiError> {
    let html = fetch_page(&state.client, &state.source_url).await?;
    let headlines = extract_headlines(&html);

    let results = future::join_all(headlines.into_iter().map(|headline| {
        let db = state.db.clone();
        async move { db.insert_article(&headline.title, &headline.link).await }
    }))
    .await;

    let mut created = 0;
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(_) => created += 1,
            Err(e) => failures.push(e.to_string()),
        }
    }

    tracing::info!(
        created,
        failed = failures.len(),
        source = %state.source_url,
        "scrape complete"
    );

    Ok(Json(ScrapeSummary {
        created,
        failed: failures.len(),
        failures,
    }))
}

/// `GET /articles` — every saved article, note reference as a bare id.
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(state.db.list_articles().await?))
}

/// `GET /api/notes/{id}` — one article with its note expanded into the
/// stored JSON object. 404 when the article does not exist.
pub async fn get_article_with_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleWithNote>, ApiError> {
    state
        .db
        .get_article_with_note(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `DELETE /api/article/{id}` — remove the article; the attached note, if
/// any, survives. Deleting a missing id acknowledges zero removals.
pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.db.delete_article(id).await?;
    tracing::debug!(article_id = id, deleted, "delete article");
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

/// `POST /api/notes/` — create a note from the body and attach it to the
/// article named by the body's `_id` key.
///
/// The note is created first and the article updated second, so a missing
/// article leaves the note orphaned; that case reports 404 rather than
/// silently returning nothing.
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Article>, ApiError> {
    let Value::Object(mut fields) = body else {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    };

    let target = fields
        .remove("_id")
        .ok_or_else(|| ApiError::BadRequest("missing _id naming the target article".to_string()))?;
    let article_id = parse_article_id(&target)
        .ok_or_else(|| ApiError::BadRequest("_id must be an article id".to_string()))?;

    let note = state.db.insert_note(&Value::Object(fields)).await?;

    match state.db.attach_note(article_id, note.id).await? {
        Some(article) => Ok(Json(article)),
        None => {
            tracing::warn!(
                article_id,
                note_id = note.id,
                "note created but no article matched; note is orphaned"
            );
            Err(ApiError::NotFound)
        }
    }
}

/// The `_id` key accepts an integer or a string of digits.
fn parse_article_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
