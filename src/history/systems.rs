//! Bevy systems for undo/redo shortcuts and history requests.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::sprite::SpriteItemCollection;

use super::command_manager::CommandManager;
use super::messages::{HistoryChanged, HistoryRequest};
use super::sprite_commands::RemoveSpriteCommand;

/// Ctrl+Z undo, Ctrl+Y or Ctrl+Shift+Z redo, Delete removes the selected sprite
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    collection: Res<SpriteItemCollection>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<HistoryRequest>,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if ctrl && !shift && keyboard.just_pressed(KeyCode::KeyZ) {
        requests.write(HistoryRequest::Undo);
    }

    let redo_pressed = (ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift && keyboard.just_pressed(KeyCode::KeyZ));
    if redo_pressed {
        requests.write(HistoryRequest::Redo);
    }

    if keyboard.just_pressed(KeyCode::Delete)
        && let Some(id) = collection.selected()
    {
        requests.write(HistoryRequest::execute(RemoveSpriteCommand::new(
            &collection,
            id,
        )));
    }
}

/// Apply queued history requests to the collection, in arrival order
pub fn apply_history_requests(
    mut manager: ResMut<CommandManager>,
    mut collection: ResMut<SpriteItemCollection>,
    mut requests: MessageReader<HistoryRequest>,
) {
    for request in requests.read() {
        manager.apply(request.clone(), &mut collection);
    }
}

/// Drain queued history notifications into messages
pub fn publish_history_changes(
    mut manager: ResMut<CommandManager>,
    mut changes: MessageWriter<HistoryChanged>,
) {
    if !manager.has_pending_changes() {
        return;
    }
    changes.write_batch(manager.drain_changes());
}
