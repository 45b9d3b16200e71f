use crate::error::{DepotError, Result};
use serde::{Deserialize, Serialize};

/// Default number of results per search page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Policy applied when creating a folder that already exists.
///
/// The idempotent `Ignore` policy is the default: bulk catalog initialization
/// runs on every startup and must be safe to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnExists {
    Error,
    #[default]
    Ignore,
}

/// A resolved reference to one concrete file in one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub folder: String,
    pub name: String,
}

/// One search hit. Folder-scoped searches yield bare filenames; global
/// searches yield (folder, filename) pairs. Consumers pattern-match instead
/// of branching on runtime shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEntry {
    Local(String),
    Global { folder: String, name: String },
}

impl MatchEntry {
    pub fn name(&self) -> &str {
        match self {
            MatchEntry::Local(name) => name,
            MatchEntry::Global { name, .. } => name,
        }
    }

    pub fn folder(&self) -> Option<&str> {
        match self {
            MatchEntry::Local(_) => None,
            MatchEntry::Global { folder, .. } => Some(folder),
        }
    }
}

/// Parameters for one paginated search call.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Substring to look for; empty means "list all".
    pub query: String,
    /// Confine the search to one folder, or span every folder when `None`.
    pub folder: Option<String>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            folder: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of search results plus the similarity fallback list.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub results: Vec<MatchEntry>,
    /// Near-miss suggestions, highest score first. Never overlaps with the
    /// filenames in `results`, never paginated.
    pub similar_files: Vec<String>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

/// Validate a folder identifier against the restricted charset
/// (alphanumerics, `-`, `_`, `@`, parentheses). This is what keeps folder
/// names safe to use directly as directory names.
pub fn validate_folder_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DepotError::InvalidName("(empty)".to_string()));
    }
    let ok = name
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '@' | '(' | ')'));
    if !ok {
        return Err(DepotError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Filename with its extension stripped, as understood by the resolver.
/// `law101.pdf` -> `law101`; a name with no dot is returned whole.
pub fn base_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_restricted_charset() {
        for name in ["Notes", "law-archive", "user_42", "team@hq", "misc(old)"] {
            assert!(validate_folder_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_separators_and_empty() {
        for name in ["", "a/b", "a\\b", "..", "a b", "dot.dot"] {
            assert!(validate_folder_name(name).is_err(), "{name:?}");
        }
    }

    #[test]
    fn base_name_strips_one_extension() {
        assert_eq!(base_name("law101.pdf"), "law101");
        assert_eq!(base_name("archive.tar.gz"), "archive.tar");
        assert_eq!(base_name("README"), "README");
    }
}
