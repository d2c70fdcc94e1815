//! Remote timeline fetching.
//!
//! [`HttpFetcher`] performs the single blocking GET against the configured
//! endpoint. The [`Fetch`] trait is the seam the orchestrator depends on, so
//! tests can substitute a stub.

pub mod fetcher;

pub use fetcher::{resolve_url, Classification, Fetch, FetchResponse, HttpFetcher};
