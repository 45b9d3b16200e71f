//! # Storage Layer
//!
//! The [`FolderStore`] trait is the namespace layer: a flat set of named
//! folders, each an isolated namespace of files. It does lifecycle only; all
//! search logic lives in `commands/`.
//!
//! ## Implementations
//!
//! - [`fs::DirStore`]: production storage, one sub-directory per folder under
//!   a single root, files stored as flat blobs.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, deterministic
//!   enumeration order.
//!
//! ## Consistency
//!
//! No operation is transactional across files. A cascading folder delete
//! interrupted mid-way leaves partial state; concurrent saves to the same
//! name are last-writer-wins. Callers get no snapshot guarantee: file lists
//! are re-enumerated on every call.

use crate::error::Result;
use crate::model::OnExists;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface over the folder/file namespace.
pub trait FolderStore {
    /// Create a folder. `OnExists::Error` fails with `FolderExists` when the
    /// folder is already there; `OnExists::Ignore` makes creation idempotent.
    fn create_folder(&mut self, folder: &str, on_exists: OnExists) -> Result<()>;

    /// Remove a folder and everything in it. Fails with `FolderNotFound` if
    /// the folder does not exist.
    fn delete_folder(&mut self, folder: &str) -> Result<()>;

    /// All existing folders, in enumeration order.
    fn list_folders(&self) -> Result<Vec<String>>;

    fn folder_exists(&self, folder: &str) -> bool;

    /// Filenames currently in the folder, in enumeration order. Non-file
    /// entries are excluded. Fails with `FolderNotFound`.
    fn list_files(&self, folder: &str) -> Result<Vec<String>>;

    /// Write or overwrite a file. A missing folder is created on the way
    /// (the legitimate folder set is fixed and known, so lazily recreating
    /// on write is safe, even when it races a concurrent folder delete,
    /// in which case the folder reappears holding only this file).
    fn save_file(&mut self, folder: &str, filename: &str, content: &[u8]) -> Result<()>;

    /// Content bytes of one file. Fails with `FileNotFound`.
    fn read_file(&self, folder: &str, filename: &str) -> Result<Vec<u8>>;

    /// Concrete openable location of one file, for byte-level retrieval by
    /// the caller. Fails with `FileNotFound` if the file or folder is absent.
    fn file_path(&self, folder: &str, filename: &str) -> Result<PathBuf>;

    /// Remove one file. Fails with `FileNotFound` if absent.
    fn delete_file(&mut self, folder: &str, filename: &str) -> Result<()>;
}
