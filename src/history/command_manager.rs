//! Command manager resource owning the undo and redo stacks.

use std::mem;

use bevy::prelude::*;

use crate::constants::{DEFAULT_HISTORY_CAPACITY, NOTHING_TO_REDO, NOTHING_TO_UNDO};
use crate::sprite::SpriteItemCollection;

use super::commands::EditorCommand;
use super::messages::{HistoryChanged, HistoryRequest};

/// Linear undo/redo history with a bounded undo stack.
///
/// A command is on the undo stack (applied), on the redo stack (reverted), or
/// gone: it fell off the bottom of a full undo stack, or sat on the redo
/// stack when a new command was executed.
#[derive(Resource, Debug)]
pub struct CommandManager {
    /// Stack of commands that can be undone (most recent last)
    undo_stack: Vec<EditorCommand>,
    /// Stack of commands that can be redone (most recent last)
    redo_stack: Vec<EditorCommand>,
    /// Maximum undo stack length
    capacity: usize,
    /// Notifications not yet published as messages
    pending_changes: Vec<HistoryChanged>,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CommandManager {
    /// History keeping at most `capacity` undoable commands (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
            pending_changes: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the bound, dropping the oldest entries if they no longer fit
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.trim();
    }

    /// Execute `command` and make it the most recent undoable step.
    /// Anything on the redo stack is discarded.
    pub fn execute_command(
        &mut self,
        command: impl Into<EditorCommand>,
        collection: &mut SpriteItemCollection,
    ) {
        let mut command = command.into();
        command.execute(collection);
        let label = command.name();
        debug!("Executed '{}'", label);

        self.undo_stack.push(command);
        if !self.redo_stack.is_empty() {
            debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.trim();

        self.pending_changes.push(HistoryChanged {
            command: Some(label),
        });
    }

    /// Revert the most recent command. No-op when there is nothing to undo.
    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        let Some(mut command) = self.undo_stack.pop() else {
            trace!("Undo requested with empty history");
            return;
        };

        command.undo(collection);
        let label = command.name();
        debug!("Undid '{}'", label);

        self.redo_stack.push(command);
        self.pending_changes.push(HistoryChanged {
            command: Some(label),
        });
    }

    /// Re-apply the most recently undone command. No-op when there is none.
    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        let Some(mut command) = self.redo_stack.pop() else {
            trace!("Redo requested with empty redo stack");
            return;
        };

        command.redo(collection);
        let label = command.name();
        debug!("Redid '{}'", label);

        self.undo_stack.push(command);
        self.pending_changes.push(HistoryChanged {
            command: Some(label),
        });
    }

    /// Apply one request from the UI or a shortcut
    pub fn apply(&mut self, request: HistoryRequest, collection: &mut SpriteItemCollection) {
        match request {
            HistoryRequest::Execute(command) => self.execute_command(command, collection),
            HistoryRequest::Undo => self.undo(collection),
            HistoryRequest::Redo => self.redo(collection),
            HistoryRequest::Clear => self.clear_history(),
        }
    }

    /// Forget every command, e.g. after loading a file
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending_changes.push(HistoryChanged { command: None });
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the command `undo` would revert
    pub fn undo_command_name(&self) -> String {
        self.undo_stack
            .last()
            .map(EditorCommand::name)
            .unwrap_or_else(|| NOTHING_TO_UNDO.to_string())
    }

    /// Label of the command `redo` would re-apply
    pub fn redo_command_name(&self) -> String {
        self.redo_stack
            .last()
            .map(EditorCommand::name)
            .unwrap_or_else(|| NOTHING_TO_REDO.to_string())
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending_changes.is_empty()
    }

    /// Take the queued notifications, oldest first
    pub fn drain_changes(&mut self) -> Vec<HistoryChanged> {
        mem::take(&mut self.pending_changes)
    }

    fn trim(&mut self) {
        if self.undo_stack.len() > self.capacity {
            let excess = self.undo_stack.len() - self.capacity;
            self.undo_stack.drain(..excess);
            debug!("History full, dropped {} oldest command(s)", excess);
        }
    }
}
