//! Download module.
//!
//! This module provides:
//! - HTTP fetching behind the `Fetcher` trait
//! - Fetch-if-absent file downloads
//! - Model downloads by registry name

pub mod fetch;
pub mod file;
pub mod model;

#[cfg(test)]
pub(crate) mod test_support;

pub use fetch::{Fetcher, HttpFetcher, DEFAULT_USER_AGENT};
pub use file::{download_file, Downloader};
pub use model::download_model;
