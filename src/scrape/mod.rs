//! Homepage fetching and headline extraction.
//!
//! Two phases, kept separate so extraction is testable without I/O:
//!
//! 1. **Fetching**: download the configured homepage as text
//! 2. **Extraction**: select every heading inside an article container and
//!    pull out its anchor's text and `href`

mod extractor;
mod fetcher;

pub use extractor::{extract_headlines, Headline};
pub use fetcher::{fetch_page, FetchError};
