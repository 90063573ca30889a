mod articles;
mod notes;
mod schema;
mod types;

pub use schema::Database;
pub use types::{Article, ArticleWithNote, Note, StoreError};
