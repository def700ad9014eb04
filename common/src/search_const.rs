//! Tunables shared between the client and the directory backend.

/// Rows per result page when the caller does not ask for something else.
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

/// Quiescence window between the last criteria edit and the search dispatch.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
