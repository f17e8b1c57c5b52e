//! # Persistence
//!
//! The durable key-value collaborator behind the store: opaque blobs under
//! short string keys. The store serializes the whole collection into one
//! blob on every successful mutation and reads it back once at startup.
//!
//! Two implementations are provided:
//!
//! - [`JsonFileStore`] — one file per key under a data directory. Writes go
//!   through a temp file followed by a rename, so a crash mid-write leaves
//!   the previous blob intact.
//! - [`MemoryBlobStore`] — in-process map, for tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable key-value storage for serialized blobs.
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`, or `None` if it has never been written.
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>>;
    /// Durably replace the blob under `key`.
    fn put(&self, key: &str, bytes: &[u8]) -> io::Result<()>;
    /// Remove the blob under `key`; removing a missing key is not an error.
    fn delete(&self, key: &str) -> io::Result<()>;
}

/// File-per-key blob store rooted at a data directory.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(JsonFileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for JsonFileStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory blob store for tests.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        self.blobs.lock().unwrap().remove(key);
        Ok(())
    }
}
