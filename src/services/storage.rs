//! Local filesystem storage for gallery images: one folder per category
//! under the configured upload root.

use crate::error::AppError;
use crate::models::Category;
use crate::utils::validation::has_allowed_extension;
use std::path::PathBuf;
use tokio::fs;

pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.slug())
    }

    /// Writes image bytes into the category folder, creating it if absent.
    /// An existing file with the same name is silently overwritten.
    /// The filename must already be sanitized by the caller.
    pub async fn save(
        &self,
        category: Category,
        filename: &str,
        bytes: &[u8],
    ) -> Result<(), AppError> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join(filename), bytes).await?;
        Ok(())
    }

    /// Removes an image file. Returns false (not an error) if it was
    /// already absent.
    pub async fn delete(&self, category: Category, filename: &str) -> Result<bool, AppError> {
        match fs::remove_file(self.category_dir(category).join(filename)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists image filenames in a category folder, sorted by name.
    ///
    /// The folder is created if it does not exist, so a never-used category
    /// lists as empty rather than erroring. Files without a recognized image
    /// extension (the metadata sidecar included) are skipped.
    pub async fn list(&self, category: Category) -> Result<Vec<String>, AppError> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir).await?;

        let mut filenames = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                if has_allowed_extension(&name) {
                    filenames.push(name);
                }
            }
        }

        filenames.sort();
        Ok(filenames)
    }
}
