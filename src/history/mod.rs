//! Undo/Redo system for sprite edits.
//!
//! Every change to the sprite collection goes through an [`EditorCommand`]
//! executed by the [`CommandManager`], which keeps a linear history: undo and
//! redo move commands between two stacks, and executing a new command throws
//! away whatever could still be redone.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//! - **Delete**: Remove the selected sprite
//!
//! ## Supported Operations
//!
//! - Sprite creation and removal
//! - Single-field property edits
//! - Collider addition and removal
//!
//! ## Module Structure
//!
//! - [`commands`] - EditorCommand enum dispatching to the concrete commands
//! - [`sprite_commands`] - Add/remove sprite
//! - [`property_command`] - Typed property edit
//! - [`collider_commands`] - Add/remove collider
//! - [`command_manager`] - CommandManager resource owning the stacks
//! - [`messages`] - Requests and the history-changed notification
//! - [`systems`] - Bevy systems for shortcuts and request handling

mod collider_commands;
mod command_manager;
mod commands;
mod messages;
mod property_command;
mod sprite_commands;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use collider_commands::{AddColliderCommand, RemoveColliderCommand};
pub use command_manager::CommandManager;
#[allow(unused_imports)]
pub use commands::EditorCommand;
pub use messages::{HistoryChanged, HistoryRequest};
pub use property_command::ModifySpritePropertyCommand;
pub use sprite_commands::{AddSpriteCommand, RemoveSpriteCommand};

use bevy::prelude::*;

use crate::sprite::SpriteEventsPublished;
use crate::ui::{no_dialog_open, DialogState};

pub struct HistoryPlugin;

impl Plugin for HistoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommandManager>()
            .init_resource::<DialogState>()
            .add_message::<HistoryRequest>()
            .add_message::<HistoryChanged>()
            .add_systems(
                Update,
                (
                    systems::handle_history_shortcuts.run_if(no_dialog_open),
                    systems::apply_history_requests,
                    systems::publish_history_changes,
                )
                    .chain()
                    .before(SpriteEventsPublished),
            );
    }
}
