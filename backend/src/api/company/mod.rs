//! Company API route handlers and module exports.

mod search_companies;
pub use search_companies::search_companies;

mod get_company;
pub use get_company::get_company;

pub mod search_exec;
