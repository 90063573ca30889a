//! HTTP surface: router, shared state, and the serve loop.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::Database;

pub use error::ApiError;

/// Shared application state.
///
/// One store handle and one HTTP client for the process; both are cheap to
/// clone internally and safe for concurrent use.
pub struct AppState {
    pub db: Database,
    pub client: reqwest::Client,
    pub source_url: String,
}

impl AppState {
    pub fn new(db: Database, source_url: String) -> Self {
        Self {
            db,
            client: reqwest::Client::new(),
            source_url,
        }
    }
}

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/scrape", get(handlers::scrape))
        .route("/articles", get(handlers::list_articles))
        .route("/api/notes/", post(handlers::create_note))
        .route("/api/notes/{id}", get(handlers::get_article_with_note))
        .route("/api/article/{id}", delete(handlers::delete_article))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("newsdesk listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
