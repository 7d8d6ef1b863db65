//! Message types for sprite file operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct SaveSpritesRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct LoadSpritesRequest {
    pub path: PathBuf,
}

/// Start over with an empty sheet
#[derive(Message)]
pub struct NewSpriteSheetRequest;
