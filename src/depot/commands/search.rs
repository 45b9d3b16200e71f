//! Paginated, multi-result search ("browse/find" mode).
//!
//! Distinct from [`crate::commands::resolve`]: the predicate is a
//! case-insensitive substring over the *full* filename (extension included),
//! looser than the resolver's base-name rule, because this mode is
//! exploratory rather than a download trigger. An empty query matches
//! everything.
//!
//! Files that miss the predicate are scored against the query with the
//! similarity ratio; those above the threshold come back as `similar_files`,
//! a small, unpaginated suggestion list recomputed fresh on every call.

use crate::error::{DepotError, Result};
use crate::model::{MatchEntry, SearchRequest, SearchResult};
use crate::similarity;
use crate::store::FolderStore;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Minimum similarity ratio for a near-miss to be suggested.
    pub similarity_threshold: f64,
    /// Maximum number of suggestions.
    pub similar_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            similar_limit: 3,
        }
    }
}

pub fn run<S: FolderStore>(
    store: &S,
    req: &SearchRequest,
    opts: &SearchOptions,
) -> Result<SearchResult> {
    if req.page == 0 {
        return Err(DepotError::InvalidRequest("page numbers start at 1".into()));
    }
    if req.page_size == 0 {
        return Err(DepotError::InvalidRequest("page size must be positive".into()));
    }

    let query_lower = req.query.to_lowercase();
    let mut matches: Vec<MatchEntry> = Vec::new();
    // (score, filename) for files that missed the substring predicate.
    let mut near_misses: Vec<(f64, String)> = Vec::new();

    let mut scan_folder = |folder: Option<&str>, files: Vec<String>| {
        for name in files {
            if name.to_lowercase().contains(&query_lower) {
                matches.push(match folder {
                    Some(folder) => MatchEntry::Global {
                        folder: folder.to_string(),
                        name,
                    },
                    None => MatchEntry::Local(name),
                });
            } else {
                let score = similarity::ratio(&req.query, &name);
                if score > opts.similarity_threshold {
                    near_misses.push((score, name));
                }
            }
        }
    };

    match &req.folder {
        Some(folder) => scan_folder(None, store.list_files(folder)?),
        None => {
            // Folder-enumeration order, then per-folder file order, so
            // pagination offsets stay stable across calls.
            for folder in store.list_folders()? {
                let files = store.list_files(&folder)?;
                scan_folder(Some(&folder), files);
            }
        }
    }

    let total_count = matches.len();
    let total_pages = total_count.div_ceil(req.page_size);
    let start = (req.page - 1) * req.page_size;
    let end = (start + req.page_size).min(total_count);
    let has_more = end < total_count;
    // Pages past the end are empty, not an error.
    let results: Vec<MatchEntry> = if start < total_count {
        matches[start..end].to_vec()
    } else {
        Vec::new()
    };

    let similar_files = suggest(near_misses, &matches, opts.similar_limit);

    Ok(SearchResult {
        results,
        similar_files,
        total_count,
        current_page: req.page,
        total_pages,
        has_more,
    })
}

/// Order near-misses by score (ties by name for stable output), drop any
/// filename already present among the matches, cap the list.
fn suggest(mut near_misses: Vec<(f64, String)>, matches: &[MatchEntry], limit: usize) -> Vec<String> {
    near_misses.sort_by(|(score_a, name_a), (score_b, name_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| name_a.cmp(name_b))
    });

    let mut suggestions = Vec::new();
    for (_, name) in near_misses {
        if matches.iter().any(|m| m.name() == name) || suggestions.contains(&name) {
            continue;
        }
        suggestions.push(name);
        if suggestions.len() == limit {
            break;
        }
    }
    suggestions
}
