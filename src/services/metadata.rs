//! Sidecar metadata store: one `descriptions.json` per category folder,
//! mapping image filename to its free-text description.
//!
//! Every upsert/remove is a read-modify-write cycle guarded by a
//! per-category mutex, and the file is replaced atomically (write to a
//! temp file in the same directory, then rename), so concurrent requests
//! against one category serialize instead of racing and an interrupted
//! write never leaves a truncated file behind.

use crate::error::AppError;
use crate::models::Category;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Sidecar file name inside each category folder.
pub const METADATA_FILE: &str = "descriptions.json";

pub struct MetadataStore {
    root: PathBuf,
    // Fixed registry, so the lock table is built once and never grows.
    locks: HashMap<Category, Mutex<()>>,
}

impl MetadataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: Category::ALL.iter().map(|&c| (c, Mutex::new(()))).collect(),
        }
    }

    fn metadata_path(&self, category: Category) -> PathBuf {
        self.root.join(category.slug()).join(METADATA_FILE)
    }

    /// Loads the full filename -> description map for a category.
    /// A category that has never been written reads as an empty map.
    pub async fn load(&self, category: Category) -> Result<HashMap<String, String>, AppError> {
        read_map(&self.metadata_path(category)).await
    }

    /// Inserts or replaces the description for a filename (last-writer-wins).
    pub async fn upsert(
        &self,
        category: Category,
        filename: &str,
        description: &str,
    ) -> Result<(), AppError> {
        let _guard = self.locks[&category].lock().await;

        let path = self.metadata_path(category);
        let mut map = read_map(&path).await?;
        map.insert(filename.to_string(), description.to_string());
        write_map(&path, &map).await
    }

    /// Removes the entry for a filename. Absent entries are a no-op.
    pub async fn remove(&self, category: Category, filename: &str) -> Result<(), AppError> {
        let _guard = self.locks[&category].lock().await;

        let path = self.metadata_path(category);
        let mut map = read_map(&path).await?;
        if map.remove(filename).is_some() {
            write_map(&path, &map).await?;
        }
        Ok(())
    }
}

async fn read_map(path: &Path) -> Result<HashMap<String, String>, AppError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(e.into()),
    }
}

async fn write_map(path: &Path, map: &HashMap<String, String>) -> Result<(), AppError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }

    let bytes = serde_json::to_vec(map)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &bytes).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
