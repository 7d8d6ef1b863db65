//! Message types for history requests and notifications.

use bevy::prelude::*;

use super::commands::EditorCommand;

/// Change to the history. Requests are applied in the order they were written,
/// so an undo sent after an execute in the same frame reverts that execute.
#[derive(Message, Debug, Clone)]
pub enum HistoryRequest {
    /// Run a command and record it in the history
    Execute(EditorCommand),
    Undo,
    Redo,
    /// Forget every recorded command
    Clear,
}

impl HistoryRequest {
    pub fn execute(command: impl Into<EditorCommand>) -> Self {
        HistoryRequest::Execute(command.into())
    }
}

/// The undo/redo stacks changed. `command` is the label of the command that
/// was executed, undone or redone; `None` means the history was reset.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct HistoryChanged {
    pub command: Option<String>,
}
