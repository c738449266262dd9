use log::warn;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::storage::KeyValueStore;

/// One file per key inside a directory. A write lands in a sibling temp
/// file first and is renamed over the target, so readers only ever see a
/// complete value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|err| AppError::Storage(format!("cannot create {}: {}", dir.display(), err)))?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("Ignoring unreadable value for key {}: {}", key, err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.tmp", key));
        let mut file = fs::File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("staffboard-store-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn values_survive_reopening() {
        let dir = scratch_dir();
        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("bookmarks"), None);
        store.set("bookmarks", "[]").unwrap();

        let reopened = FileStore::open(&dir).unwrap();
        assert_eq!(reopened.get("bookmarks").as_deref(), Some("[]"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn overwrite_and_remove() {
        let dir = scratch_dir();
        let store = FileStore::open(&dir).unwrap();
        store.set("authToken", "a").unwrap();
        store.set("authToken", "b").unwrap();
        assert_eq!(store.get("authToken").as_deref(), Some("b"));

        store.remove("authToken").unwrap();
        assert_eq!(store.get("authToken"), None);
        // Removing an absent key is not an error.
        store.remove("authToken").unwrap();
        assert!(!store.dir().join(".authToken.tmp").exists());
        fs::remove_dir_all(dir).unwrap();
    }
}
