//! Common library exports shared between the client and the directory backend.

extern crate serde;


pub mod search_criteria;
pub mod company;
pub mod search_const;
