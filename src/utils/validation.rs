use std::path::Path;
use thiserror::Error;

/// Image extensions accepted for upload and listed by galleries.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Filename cannot be empty")]
    EmptyFilename,

    #[error("Hidden files (starting with '.') are not allowed")]
    HiddenFile,

    #[error("Filename '{0}' has no usable characters")]
    UnusableFilename(String),
}

/// Checks the extension against the image allow-list, case-insensitively.
pub fn has_allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Sanitizes an uploaded filename so it can never escape the category folder.
///
/// Takes only the final path component, then maps every character outside the
/// allow-list `[A-Za-z0-9._ -]` to `_`. Rejects empty names, hidden names,
/// and names that reduce to nothing but separators and dots.
pub fn sanitize_filename(filename: &str) -> Result<String, ValidationError> {
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        tracing::warn!("Path traversal attempt detected: {}", filename);
    }

    // Normalize Windows separators before taking the last path component;
    // Path::file_name does not split on '\\' on Unix.
    let normalized = filename.replace('\\', "/");
    let name = Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.starts_with('.') {
        return Err(ValidationError::HiddenFile);
    }

    if !sanitized.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::UnusableFilename(filename.to_string()));
    }

    Ok(sanitized)
}
