//! Sprite sheet save system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::config::AddRecentFileRequest;
use crate::sprite::SpriteItemCollection;

use super::messages::SaveSpritesRequest;
use super::resources::{AsyncFileOperation, CurrentSpriteFile, SaveSpritesTask, SpriteFileError};
use super::results::SaveResult;
use super::sheet::SavedSpriteSheet;

/// Starts an async save operation
pub fn save_sprites_system(
    mut commands: Commands,
    mut events: MessageReader<SaveSpritesRequest>,
    collection: Res<SpriteItemCollection>,
    mut async_op: ResMut<AsyncFileOperation>,
) {
    for event in events.read() {
        if async_op.is_busy() {
            warn!("File operation already in progress, save skipped");
            continue;
        }

        // Snapshot now; later edits must not leak into this save
        let sheet = SavedSpriteSheet::from_collection(&collection);
        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sprites")
            .to_string();

        async_op.is_saving = true;
        async_op.operation_description = Some(format!("Saving {}...", file_name));

        let task = IoTaskPool::get().spawn(async move {
            let error = match sheet.to_json() {
                Ok(json) => std::fs::write(&path, json)
                    .err()
                    .map(|e| format!("Failed to write file: {}", e)),
                Err(e) => Some(e),
            };
            SaveResult { path, error }
        });

        commands.spawn(SaveSpritesTask(task));
    }
}

/// Polls save tasks and handles completion
pub fn poll_save_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveSpritesTask)>,
    mut async_op: ResMut<AsyncFileOperation>,
    mut current_file: ResMut<CurrentSpriteFile>,
    mut file_error: ResMut<SpriteFileError>,
    mut recent_files: MessageWriter<AddRecentFileRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.is_saving = false;
        async_op.operation_description = None;

        match result.error {
            None => {
                info!("Sprites saved to {:?}", result.path);
                file_error.message = None;
                current_file.path = Some(result.path.clone());
                recent_files.write(AddRecentFileRequest { path: result.path });
            }
            Some(error) => {
                error!("{}", error);
                file_error.message = Some(error);
            }
        }

        commands.entity(entity).despawn();
    }
}
