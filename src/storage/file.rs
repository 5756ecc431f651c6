//! File-backed storage adapter
//!
//! Stores each key as one file under a root directory, so the cart
//! survives process restarts. Writes go to a temporary sibling first
//! and are moved into place with a rename, so a reader never observes
//! a partially-written payload.

use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::storage::StorageAdapter;
use crate::types::CartError;

/// Directory-rooted key-value store, one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create an adapter rooted at `root`
    ///
    /// The directory is created on the first write, not here, so
    /// constructing an adapter for a never-used cart touches nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    /// The file a key maps to
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(encode_key(key))
    }
}

/// Escape a key into a collision-free file name
///
/// Every byte outside `[A-Za-z0-9._-]` is written as `%XX`, including
/// `%` itself, so distinct keys always map to distinct file names.
fn encode_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                name.push(byte as char);
            }
            _ => {
                let _ = write!(name, "%{:02X}", byte);
            }
        }
    }
    name
}

impl StorageAdapter for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CartError> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(CartError::storage(key, error.to_string())),
        }
    }

    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), CartError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|error| CartError::storage(key, error.to_string()))?;

        let path = self.path_for(key);
        let tmp_path = tmp_sibling(&path);

        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|error| CartError::storage(key, error.to_string()))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|error| CartError::storage(key, error.to_string()))?;

        debug!(key, bytes = payload.len(), "durable write completed");
        Ok(())
    }
}

/// The temporary path a payload is staged at before the rename
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
