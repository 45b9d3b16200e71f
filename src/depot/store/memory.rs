use super::FolderStore;
use crate::error::{DepotError, Result};
use crate::model::{validate_folder_name, OnExists};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage for testing. Does NOT persist data.
///
/// `BTreeMap`s give a deterministic enumeration order (lexicographic), which
/// keeps pagination tests stable.
#[derive(Default)]
pub struct InMemoryStore {
    folders: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FolderStore for InMemoryStore {
    fn create_folder(&mut self, folder: &str, on_exists: OnExists) -> Result<()> {
        validate_folder_name(folder)?;
        if self.folders.contains_key(folder) {
            return match on_exists {
                OnExists::Error => Err(DepotError::FolderExists(folder.to_string())),
                OnExists::Ignore => Ok(()),
            };
        }
        self.folders.insert(folder.to_string(), BTreeMap::new());
        Ok(())
    }

    fn delete_folder(&mut self, folder: &str) -> Result<()> {
        if self.folders.remove(folder).is_none() {
            return Err(DepotError::FolderNotFound(folder.to_string()));
        }
        Ok(())
    }

    fn list_folders(&self) -> Result<Vec<String>> {
        Ok(self.folders.keys().cloned().collect())
    }

    fn folder_exists(&self, folder: &str) -> bool {
        self.folders.contains_key(folder)
    }

    fn list_files(&self, folder: &str) -> Result<Vec<String>> {
        let files = self
            .folders
            .get(folder)
            .ok_or_else(|| DepotError::FolderNotFound(folder.to_string()))?;
        Ok(files.keys().cloned().collect())
    }

    fn save_file(&mut self, folder: &str, filename: &str, content: &[u8]) -> Result<()> {
        validate_folder_name(folder)?;
        self.folders
            .entry(folder.to_string())
            .or_default()
            .insert(filename.to_string(), content.to_vec());
        Ok(())
    }

    fn read_file(&self, folder: &str, filename: &str) -> Result<Vec<u8>> {
        let files = self
            .folders
            .get(folder)
            .ok_or_else(|| DepotError::FolderNotFound(folder.to_string()))?;
        files
            .get(filename)
            .cloned()
            .ok_or_else(|| DepotError::FileNotFound(filename.to_string()))
    }

    fn file_path(&self, _folder: &str, _filename: &str) -> Result<PathBuf> {
        Err(DepotError::Store(
            "in-memory store has no file paths".to_string(),
        ))
    }

    fn delete_file(&mut self, folder: &str, filename: &str) -> Result<()> {
        let files = self
            .folders
            .get_mut(folder)
            .ok_or_else(|| DepotError::FolderNotFound(folder.to_string()))?;
        if files.remove(filename).is_none() {
            return Err(DepotError::FileNotFound(filename.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order_is_lexicographic() {
        let mut store = InMemoryStore::new();
        store.save_file("b", "2.pdf", b"").unwrap();
        store.save_file("a", "1.pdf", b"").unwrap();
        store.save_file("a", "0.pdf", b"").unwrap();
        assert_eq!(store.list_folders().unwrap(), vec!["a", "b"]);
        assert_eq!(store.list_files("a").unwrap(), vec!["0.pdf", "1.pdf"]);
    }

    #[test]
    fn delete_file_then_folder() {
        let mut store = InMemoryStore::new();
        store.save_file("Notes", "a.pdf", b"x").unwrap();
        store.delete_file("Notes", "a.pdf").unwrap();
        assert!(store.list_files("Notes").unwrap().is_empty());
        store.delete_folder("Notes").unwrap();
        assert!(!store.folder_exists("Notes"));
    }
}
