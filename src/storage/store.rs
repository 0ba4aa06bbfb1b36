//! Wish Store
//!
//! Persists the whole wish collection as one pretty-printed JSON array.
//! Every mutation reads the entire document, appends in memory and writes
//! the entire document back.
//!
//! All file access goes through a single async mutex, so overlapping
//! appends are applied one after another and never overwrite each other.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::Wish;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed store for the wish collection
#[derive(Debug)]
pub struct WishStore {
    /// Backing JSON file
    path: PathBuf,
    /// Serializes every read-modify-write sequence
    lock: Mutex<()>,
}

impl WishStore {
    /// Create a store over the given file; nothing is touched on disk yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty array if it does not exist yet.
    ///
    /// Returns `true` when the file was created.
    pub async fn ensure_exists(&self) -> StorageResult<bool> {
        let _guard = self.lock.lock().await;

        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        self.write_file(&[]).await?;
        tracing::info!(path = ?self.path, "Created empty wishes file");
        Ok(true)
    }

    /// Load the full collection in stored order
    pub async fn load(&self) -> StorageResult<Vec<Wish>> {
        let _guard = self.lock.lock().await;
        self.read_file().await
    }

    /// Overwrite the backing file with the given collection
    pub async fn save(&self, wishes: &[Wish]) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        self.write_file(wishes).await
    }

    /// Append one wish to the end of the collection.
    ///
    /// Load, push and save happen under one lock. On failure nothing is
    /// retried and the wish is dropped.
    pub async fn append(&self, wish: Wish) -> StorageResult<Wish> {
        let _guard = self.lock.lock().await;

        let mut wishes = self.read_file().await?;
        wishes.push(wish.clone());
        self.write_file(&wishes).await?;

        Ok(wish)
    }

    async fn read_file(&self) -> StorageResult<Vec<Wish>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|e| StorageError::Corruption {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    async fn write_file(&self, wishes: &[Wish]) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(wishes)?;
        let temp_path = self.temp_path();

        // Write beside the target, then rename over it
        tokio::fs::write(&temp_path, content)
            .await
            .map_err(|source| StorageError::Write {
                path: temp_path.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "wishes.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
