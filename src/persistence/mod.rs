//! Sprite sheet persistence: JSON load/save on the IO task pool.
//!
//! Loading a file (or starting a new sheet) replaces the whole collection
//! outside the command history and clears the history. The history itself is
//! never written to disk.
//!
//! ## Module Structure
//!
//! - [`sheet`] - `SavedSpriteSheet` document format
//! - [`messages`] - Message types for file operations
//! - [`resources`] - Resource types for state tracking
//! - [`results`] - Result types for async operations
//! - [`save`] - Save system and task polling
//! - [`load`] - Load/new-sheet systems and task polling

mod load;
mod messages;
mod resources;
mod results;
mod save;
mod sheet;

#[cfg(test)]
mod tests;

// Re-exports - Messages
pub use messages::{LoadSpritesRequest, NewSpriteSheetRequest, SaveSpritesRequest};

// Re-exports - Resources
pub use resources::{AsyncFileOperation, CurrentSpriteFile, SpriteFileError};

#[allow(unused_imports)]
pub use sheet::SavedSpriteSheet;

use bevy::prelude::*;

use crate::sprite::SpriteEventsPublished;

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentSpriteFile>()
            .init_resource::<SpriteFileError>()
            .init_resource::<AsyncFileOperation>()
            .add_message::<SaveSpritesRequest>()
            .add_message::<LoadSpritesRequest>()
            .add_message::<NewSpriteSheetRequest>()
            .add_systems(
                Update,
                (
                    save::save_sprites_system.run_if(on_message::<SaveSpritesRequest>),
                    load::load_sprites_system.run_if(on_message::<LoadSpritesRequest>),
                    load::new_sheet_system.run_if(on_message::<NewSpriteSheetRequest>),
                    save::poll_save_tasks,
                    load::poll_load_tasks,
                )
                    .before(SpriteEventsPublished),
            );
    }
}
