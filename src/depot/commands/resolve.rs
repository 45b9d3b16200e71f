//! Single-result filename resolution ("get a specific file").
//!
//! Matching precedence, strictly in order:
//!
//! 1. Byte-exact filename match wins immediately, so a filename that is a
//!    substring of another file's base name is never shadowed.
//! 2. Case-insensitive substring match of the query against each file's base
//!    name (extension stripped).
//!
//! Zero partial matches fail with `FileNotFound`; more than one fails with
//! `Ambiguous` carrying every candidate. Resolution never guesses: handing
//! back a wrong file silently would be worse than asking the user again.

use crate::error::{DepotError, Result};
use crate::model::{base_name, FileHandle};
use crate::store::FolderStore;

pub fn run<S: FolderStore>(store: &S, folder: &str, query: &str) -> Result<FileHandle> {
    if query.is_empty() {
        return Err(DepotError::InvalidRequest("empty filename query".into()));
    }

    let files = store.list_files(folder)?;

    if let Some(name) = files.iter().find(|f| *f == query) {
        return Ok(FileHandle {
            folder: folder.to_string(),
            name: name.clone(),
        });
    }

    let query_lower = query.to_lowercase();
    let candidates: Vec<&String> = files
        .iter()
        .filter(|f| base_name(f).to_lowercase().contains(&query_lower))
        .collect();

    match candidates.as_slice() {
        [] => Err(DepotError::FileNotFound(query.to_string())),
        [only] => Ok(FileHandle {
            folder: folder.to_string(),
            name: (*only).clone(),
        }),
        many => Err(DepotError::Ambiguous {
            query: query.to_string(),
            candidates: many.iter().map(|f| (*f).clone()).collect(),
        }),
    }
}
