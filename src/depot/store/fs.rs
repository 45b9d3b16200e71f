use super::FolderStore;
use crate::error::{DepotError, Result};
use crate::model::{validate_folder_name, OnExists};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory-per-folder storage under a single root.
///
/// Layout:
/// ```text
/// <root>/
/// ├── config.json        # depot configuration (managed by config.rs)
/// ├── Notes/
/// │   ├── a1b2…c3.pdf
/// │   └── d4e5…f6.jpg
/// └── Recordings/
///     └── …
/// ```
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the root directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root).map_err(DepotError::Io)?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn folder_path(&self, folder: &str) -> Result<PathBuf> {
        validate_folder_name(folder)?;
        Ok(self.root.join(folder))
    }
}

impl FolderStore for DirStore {
    fn create_folder(&mut self, folder: &str, on_exists: OnExists) -> Result<()> {
        let path = self.folder_path(folder)?;
        if path.exists() {
            return match on_exists {
                OnExists::Error => Err(DepotError::FolderExists(folder.to_string())),
                OnExists::Ignore => Ok(()),
            };
        }
        fs::create_dir_all(&path).map_err(DepotError::Io)?;
        Ok(())
    }

    fn delete_folder(&mut self, folder: &str) -> Result<()> {
        let path = self.folder_path(folder)?;
        if !path.exists() {
            return Err(DepotError::FolderNotFound(folder.to_string()));
        }
        // Cascading, not transactional: an interruption can leave some files
        // removed and the folder still present.
        fs::remove_dir_all(&path).map_err(DepotError::Io)?;
        Ok(())
    }

    fn list_folders(&self) -> Result<Vec<String>> {
        let mut folders = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(DepotError::Io)? {
            let entry = entry.map_err(DepotError::Io)?;
            if entry.file_type().map_err(DepotError::Io)?.is_dir() {
                folders.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(folders)
    }

    fn folder_exists(&self, folder: &str) -> bool {
        self.folder_path(folder).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn list_files(&self, folder: &str) -> Result<Vec<String>> {
        let path = self.folder_path(folder)?;
        if !path.exists() {
            return Err(DepotError::FolderNotFound(folder.to_string()));
        }
        let mut files = Vec::new();
        for entry in fs::read_dir(&path).map_err(DepotError::Io)? {
            let entry = entry.map_err(DepotError::Io)?;
            if entry.file_type().map_err(DepotError::Io)?.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(files)
    }

    fn save_file(&mut self, folder: &str, filename: &str, content: &[u8]) -> Result<()> {
        let path = self.folder_path(folder)?;
        if !path.exists() {
            fs::create_dir_all(&path).map_err(DepotError::Io)?;
        }
        fs::write(path.join(filename), content).map_err(DepotError::Io)?;
        Ok(())
    }

    fn read_file(&self, folder: &str, filename: &str) -> Result<Vec<u8>> {
        let path = self.file_path(folder, filename)?;
        fs::read(path).map_err(DepotError::Io)
    }

    fn file_path(&self, folder: &str, filename: &str) -> Result<PathBuf> {
        let path = self.folder_path(folder)?.join(filename);
        if !path.is_file() {
            return Err(DepotError::FileNotFound(filename.to_string()));
        }
        Ok(path)
    }

    fn delete_file(&mut self, folder: &str, filename: &str) -> Result<()> {
        let path = self.file_path(folder, filename)?;
        fs::remove_file(path).map_err(DepotError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, DirStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path().join("storage")).unwrap();
        (dir, store)
    }

    #[test]
    fn strict_create_rejects_existing_folder() {
        let (_dir, mut store) = open_temp();
        store.create_folder("Notes", OnExists::Error).unwrap();
        let err = store.create_folder("Notes", OnExists::Error).unwrap_err();
        assert!(matches!(err, DepotError::FolderExists(name) if name == "Notes"));
    }

    #[test]
    fn idempotent_create_is_a_noop() {
        let (_dir, mut store) = open_temp();
        store.create_folder("Notes", OnExists::Ignore).unwrap();
        store.create_folder("Notes", OnExists::Ignore).unwrap();
        assert!(store.folder_exists("Notes"));
    }

    #[test]
    fn rejects_folder_names_outside_the_charset() {
        let (_dir, mut store) = open_temp();
        let err = store.create_folder("../escape", OnExists::Ignore).unwrap_err();
        assert!(matches!(err, DepotError::InvalidName(_)));
    }

    #[test]
    fn save_and_read_round_trip() {
        let (_dir, mut store) = open_temp();
        store.create_folder("Notes", OnExists::Ignore).unwrap();
        store.save_file("Notes", "a.pdf", b"contents").unwrap();
        assert_eq!(store.read_file("Notes", "a.pdf").unwrap(), b"contents");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let (_dir, mut store) = open_temp();
        store.save_file("Notes", "a.pdf", b"v1").unwrap();
        store.save_file("Notes", "a.pdf", b"v2").unwrap();
        assert_eq!(store.read_file("Notes", "a.pdf").unwrap(), b"v2");
    }

    #[test]
    fn save_recreates_a_missing_folder() {
        let (_dir, mut store) = open_temp();
        store.save_file("Notes", "a.pdf", b"x").unwrap();
        assert!(store.folder_exists("Notes"));
        assert_eq!(store.list_files("Notes").unwrap(), vec!["a.pdf"]);
    }

    #[test]
    fn list_files_excludes_sub_directories() {
        let (_dir, mut store) = open_temp();
        store.create_folder("Notes", OnExists::Ignore).unwrap();
        store.save_file("Notes", "a.pdf", b"x").unwrap();
        fs::create_dir(store.root().join("Notes").join("nested")).unwrap();
        assert_eq!(store.list_files("Notes").unwrap(), vec!["a.pdf"]);
    }

    #[test]
    fn folder_delete_cascades() {
        let (_dir, mut store) = open_temp();
        store.save_file("Notes", "a.pdf", b"x").unwrap();
        store.delete_folder("Notes").unwrap();
        assert!(!store.folder_exists("Notes"));
        assert!(matches!(
            store.list_files("Notes").unwrap_err(),
            DepotError::FolderNotFound(_)
        ));
        assert!(matches!(
            store.delete_folder("Notes").unwrap_err(),
            DepotError::FolderNotFound(_)
        ));
    }

    #[test]
    fn missing_file_operations_fail_with_not_found() {
        let (_dir, mut store) = open_temp();
        store.create_folder("Notes", OnExists::Ignore).unwrap();
        assert!(matches!(
            store.read_file("Notes", "ghost.pdf").unwrap_err(),
            DepotError::FileNotFound(_)
        ));
        assert!(matches!(
            store.delete_file("Notes", "ghost.pdf").unwrap_err(),
            DepotError::FileNotFound(_)
        ));
    }

    #[test]
    fn file_path_points_at_the_stored_blob() {
        let (_dir, mut store) = open_temp();
        store.save_file("Notes", "a.pdf", b"x").unwrap();
        let path = store.file_path("Notes", "a.pdf").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"x");
    }
}
