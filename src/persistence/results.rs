//! Result types for async sprite file operations.

use std::path::PathBuf;

use super::sheet::SavedSpriteSheet;

/// Result of an async save operation
pub struct SaveResult {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Result of an async load operation
pub struct LoadResult {
    pub path: PathBuf,
    pub sheet: Result<SavedSpriteSheet, String>,
}
