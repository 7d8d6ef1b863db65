//! Resource types for sprite file state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;

use super::results::{LoadResult, SaveResult};

/// File the current sheet was loaded from or last saved to
#[derive(Resource, Default)]
pub struct CurrentSpriteFile {
    pub path: Option<PathBuf>,
}

/// Last load/save failure, shown to the user until dismissed
#[derive(Resource, Default)]
pub struct SpriteFileError {
    pub message: Option<String>,
}

/// Resource tracking async file I/O
#[derive(Resource, Default)]
pub struct AsyncFileOperation {
    pub is_saving: bool,
    pub is_loading: bool,
    pub operation_description: Option<String>,
}

impl AsyncFileOperation {
    pub fn is_busy(&self) -> bool {
        self.is_saving || self.is_loading
    }
}

/// Component for save task
#[derive(Component)]
pub struct SaveSpritesTask(pub Task<SaveResult>);

/// Component for load task
#[derive(Component)]
pub struct LoadSpritesTask(pub Task<LoadResult>);
