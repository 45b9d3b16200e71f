//! Business logic for the search and resolution engine.
//!
//! Command modules operate on a [`crate::store::FolderStore`] with read-only
//! access, take plain Rust arguments, and return plain Rust types. No I/O
//! assumptions beyond the store itself.

pub mod resolve;
pub mod search;
