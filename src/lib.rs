//! jotter - Personal notes manager
//!
//! Notes are kept in a write-through in-memory repository backed by a single
//! JSON file, with a command-line list/detail front end.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotterError;
