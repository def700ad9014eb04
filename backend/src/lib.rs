//! Company directory service: search and per-ticker lookup over an
//! in-memory dataset.

pub mod api;
pub mod directory;
pub mod error;
