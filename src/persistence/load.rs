//! Sprite sheet load system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::config::AddRecentFileRequest;
use crate::history::CommandManager;
use crate::sprite::SpriteItemCollection;

use super::messages::{LoadSpritesRequest, NewSpriteSheetRequest};
use super::resources::{AsyncFileOperation, CurrentSpriteFile, LoadSpritesTask, SpriteFileError};
use super::results::LoadResult;
use super::sheet::SavedSpriteSheet;

/// Starts an async load operation (file I/O and parsing only)
pub fn load_sprites_system(
    mut commands: Commands,
    mut events: MessageReader<LoadSpritesRequest>,
    mut async_op: ResMut<AsyncFileOperation>,
) {
    for event in events.read() {
        if async_op.is_busy() {
            warn!("File operation already in progress, load skipped");
            continue;
        }

        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sprites")
            .to_string();

        async_op.is_loading = true;
        async_op.operation_description = Some(format!("Loading {}...", file_name));

        let task = IoTaskPool::get().spawn(async move {
            let sheet = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read file: {}", e))
                .and_then(|json| SavedSpriteSheet::parse(&json));
            LoadResult { path, sheet }
        });

        commands.spawn(LoadSpritesTask(task));
    }
}

/// Polls load tasks. A loaded sheet replaces the collection and resets the
/// undo history.
#[allow(clippy::too_many_arguments)]
pub fn poll_load_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LoadSpritesTask)>,
    mut async_op: ResMut<AsyncFileOperation>,
    mut collection: ResMut<SpriteItemCollection>,
    mut manager: ResMut<CommandManager>,
    mut current_file: ResMut<CurrentSpriteFile>,
    mut file_error: ResMut<SpriteFileError>,
    mut recent_files: MessageWriter<AddRecentFileRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.is_loading = false;
        async_op.operation_description = None;
        commands.entity(entity).despawn();

        let sheet = match result.sheet {
            Ok(sheet) => sheet,
            Err(error) => {
                error!("{}", error);
                file_error.message = Some(error);
                continue;
            }
        };

        info!("Loaded {} sprite(s) from {:?}", sheet.items.len(), result.path);
        let selected = sheet.selected_id();
        let reassigned = collection.replace_all(sheet.items, selected);
        if !reassigned.is_empty() {
            warn!(
                "{:?} had {} duplicate sprite id(s), new ids assigned",
                result.path,
                reassigned.len()
            );
        }
        manager.clear_history();

        file_error.message = None;
        current_file.path = Some(result.path.clone());
        recent_files.write(AddRecentFileRequest { path: result.path });
    }
}

/// Clears the collection and history for a fresh sheet
pub fn new_sheet_system(
    mut events: MessageReader<NewSpriteSheetRequest>,
    mut collection: ResMut<SpriteItemCollection>,
    mut manager: ResMut<CommandManager>,
    mut current_file: ResMut<CurrentSpriteFile>,
) {
    for _ in events.read() {
        collection.replace_all(Vec::new(), None);
        manager.clear_history();
        current_file.path = None;
        info!("Started a new sprite sheet");
    }
}
