//! # API Facade
//!
//! [`Depot`] is the single entry point for all operations, regardless of the
//! front end driving it (CLI, chat transport, tests). It dispatches to the
//! command layer and the store, applies the configured input policy
//! (folder-creation behavior, extension allow-list, size cap), and owns the
//! advisory query history.
//!
//! The facade holds no business logic of its own: resolution and search live
//! in `commands/`, lifecycle in `store/`.
//!
//! Generic over [`FolderStore`], so production runs on
//! [`crate::store::fs::DirStore`] and tests on
//! [`crate::store::memory::InMemoryStore`] without touching the filesystem.

use crate::commands::{resolve, search};
use crate::config::DepotConfig;
use crate::error::{DepotError, Result};
use crate::history::{QueryHistory, QueryRecord};
use crate::model::{FileHandle, OnExists, SearchRequest, SearchResult};
use crate::store::FolderStore;
use std::path::PathBuf;

pub struct Depot<S: FolderStore> {
    store: S,
    config: DepotConfig,
    history: QueryHistory,
}

impl<S: FolderStore> Depot<S> {
    pub fn new(store: S, config: DepotConfig) -> Self {
        Self {
            store,
            config,
            history: QueryHistory::default(),
        }
    }

    /// Replace the default query history, e.g. with a smaller capacity.
    pub fn with_history(mut self, history: QueryHistory) -> Self {
        self.history = history;
        self
    }

    pub fn config(&self) -> &DepotConfig {
        &self.config
    }

    /// Create every folder in the configured catalog. Idempotent, so it is
    /// safe to run on every startup.
    pub fn init_catalog(&mut self) -> Result<()> {
        let catalog = self.config.catalog.clone();
        for folder in &catalog {
            self.store.create_folder(folder, OnExists::Ignore)?;
        }
        Ok(())
    }

    pub fn create_folder(&mut self, folder: &str, on_exists: OnExists) -> Result<()> {
        self.store.create_folder(folder, on_exists)
    }

    pub fn delete_folder(&mut self, folder: &str) -> Result<()> {
        self.store.delete_folder(folder)
    }

    pub fn list_folders(&self) -> Result<Vec<String>> {
        self.store.list_folders()
    }

    pub fn list_files(&self, folder: &str) -> Result<Vec<String>> {
        self.store.list_files(folder)
    }

    /// Save a file after checking it against the extension allow-list and
    /// the size cap. Filenames are opaque strings chosen by the caller.
    pub fn save_file(&mut self, folder: &str, filename: &str, content: &[u8]) -> Result<()> {
        if !self.config.extension_allowed(filename) {
            return Err(DepotError::UnsupportedExtension(filename.to_string()));
        }
        let size = content.len() as u64;
        if size > self.config.max_file_size {
            return Err(DepotError::FileTooLarge {
                size,
                max: self.config.max_file_size,
            });
        }
        self.store.save_file(folder, filename, content)
    }

    /// Resolve a possibly partial filename query to exactly one file.
    /// See [`crate::commands::resolve`] for the matching precedence.
    pub fn resolve_file(&self, folder: &str, query: &str) -> Result<FileHandle> {
        resolve::run(&self.store, folder, query)
    }

    pub fn read(&self, handle: &FileHandle) -> Result<Vec<u8>> {
        self.store.read_file(&handle.folder, &handle.name)
    }

    pub fn file_path(&self, handle: &FileHandle) -> Result<PathBuf> {
        self.store.file_path(&handle.folder, &handle.name)
    }

    pub fn delete_file(&mut self, folder: &str, filename: &str) -> Result<()> {
        self.store.delete_file(folder, filename)
    }

    /// Run a paginated search and record its outcome in the query history.
    pub fn search(&mut self, req: &SearchRequest) -> Result<SearchResult> {
        let opts = search::SearchOptions {
            similarity_threshold: self.config.similarity_threshold,
            similar_limit: self.config.similar_limit,
        };
        let result = search::run(&self.store, req, &opts)?;
        self.history
            .record(&req.query, req.folder.as_deref(), result.total_count);
        Ok(result)
    }

    /// Recently seen queries, most recent first. Advisory only.
    pub fn recent_queries(&self, n: usize) -> Vec<&QueryRecord> {
        self.history.recent(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn depot() -> Depot<InMemoryStore> {
        Depot::new(InMemoryStore::new(), DepotConfig::default())
    }

    #[test]
    fn save_then_resolve_round_trips_content() {
        let mut depot = depot();
        depot.create_folder("Notes", OnExists::Ignore).unwrap();
        depot.save_file("Notes", "law101.pdf", b"the content").unwrap();

        let handle = depot.resolve_file("Notes", "law101").unwrap();
        assert_eq!(depot.read(&handle).unwrap(), b"the content");
    }

    #[test]
    fn init_catalog_is_re_runnable() {
        let config = DepotConfig {
            catalog: vec!["Notes".into(), "Recordings".into()],
            ..Default::default()
        };
        let mut depot = Depot::new(InMemoryStore::new(), config);
        depot.init_catalog().unwrap();
        depot.init_catalog().unwrap();
        assert_eq!(depot.list_folders().unwrap(), vec!["Notes", "Recordings"]);
    }

    #[test]
    fn save_rejects_disallowed_extension() {
        let mut depot = depot();
        let err = depot.save_file("Notes", "evil.exe", b"x").unwrap_err();
        assert!(matches!(err, DepotError::UnsupportedExtension(_)));
    }

    #[test]
    fn save_rejects_oversized_content() {
        let config = DepotConfig {
            max_file_size: 4,
            ..Default::default()
        };
        let mut depot = Depot::new(InMemoryStore::new(), config);
        let err = depot.save_file("Notes", "big.pdf", b"12345").unwrap_err();
        assert!(matches!(err, DepotError::FileTooLarge { size: 5, max: 4 }));
    }

    #[test]
    fn deleting_a_folder_hides_its_files() {
        let mut depot = depot();
        depot.save_file("Notes", "a.pdf", b"x").unwrap();
        depot.delete_folder("Notes").unwrap();
        assert!(matches!(
            depot.list_files("Notes").unwrap_err(),
            DepotError::FolderNotFound(_)
        ));
        assert!(matches!(
            depot.resolve_file("Notes", "a").unwrap_err(),
            DepotError::FolderNotFound(_)
        ));
    }

    #[test]
    fn search_records_query_history() {
        let mut depot = depot();
        depot.save_file("Notes", "law101.pdf", b"").unwrap();
        depot.save_file("Notes", "law102.pdf", b"").unwrap();

        depot
            .search(&SearchRequest::new("law").in_folder("Notes"))
            .unwrap();

        let recent = depot.recent_queries(10);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].query, "law");
        assert_eq!(recent[0].total_count, 2);
    }

    #[test]
    fn search_uses_configured_page_size_via_request() {
        let mut depot = depot();
        for i in 0..7 {
            depot
                .save_file("Notes", &format!("file{i}.pdf"), b"")
                .unwrap();
        }
        let page_size = depot.config().page_size;
        let result = depot
            .search(&SearchRequest::new("").in_folder("Notes").page_size(page_size))
            .unwrap();
        assert_eq!(result.results.len(), 5);
        assert!(result.has_more);
    }
}
