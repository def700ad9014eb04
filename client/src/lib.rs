//! Consumer-side plumbing for the company dashboard: the typed directory
//! client, the debounce timer and the search session that glues them together.

pub mod debounce;
pub mod directory_api;
pub mod search_session;
