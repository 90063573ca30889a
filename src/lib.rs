//! newsdesk — headline scraper and annotation service.
//!
//! Fetches a news homepage, extracts headline/link pairs into a SQLite
//! store, and serves the saved articles over HTTP. Clients can attach a
//! free-form note to an article and read it back expanded.

pub mod config;
pub mod scrape;
pub mod server;
pub mod storage;
