//! Editor command enum for undo/redo operations.

use crate::sprite::SpriteItemCollection;

use super::collider_commands::{AddColliderCommand, RemoveColliderCommand};
use super::property_command::ModifySpritePropertyCommand;
use super::sprite_commands::{AddSpriteCommand, RemoveSpriteCommand};

/// A reversible command in the editor
#[derive(Clone, Debug)]
pub enum EditorCommand {
    /// A new sprite was created
    AddSprite(AddSpriteCommand),
    /// A sprite was removed
    RemoveSprite(RemoveSpriteCommand),
    /// One field of a sprite changed
    ModifyProperty(ModifySpritePropertyCommand),
    /// A collider was appended to a sprite
    AddCollider(AddColliderCommand),
    /// A collider was removed from a sprite
    RemoveCollider(RemoveColliderCommand),
}

impl EditorCommand {
    /// Label for menus and tooltips
    pub fn name(&self) -> String {
        match self {
            EditorCommand::AddSprite(cmd) => cmd.name(),
            EditorCommand::RemoveSprite(cmd) => cmd.name(),
            EditorCommand::ModifyProperty(cmd) => cmd.name(),
            EditorCommand::AddCollider(cmd) => cmd.name(),
            EditorCommand::RemoveCollider(cmd) => cmd.name(),
        }
    }

    pub fn execute(&mut self, collection: &mut SpriteItemCollection) {
        match self {
            EditorCommand::AddSprite(cmd) => cmd.execute(collection),
            EditorCommand::RemoveSprite(cmd) => cmd.execute(collection),
            EditorCommand::ModifyProperty(cmd) => cmd.execute(collection),
            EditorCommand::AddCollider(cmd) => cmd.execute(collection),
            EditorCommand::RemoveCollider(cmd) => cmd.execute(collection),
        }
    }

    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        match self {
            EditorCommand::AddSprite(cmd) => cmd.undo(collection),
            EditorCommand::RemoveSprite(cmd) => cmd.undo(collection),
            EditorCommand::ModifyProperty(cmd) => cmd.undo(collection),
            EditorCommand::AddCollider(cmd) => cmd.undo(collection),
            EditorCommand::RemoveCollider(cmd) => cmd.undo(collection),
        }
    }

    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        match self {
            EditorCommand::AddSprite(cmd) => cmd.redo(collection),
            EditorCommand::RemoveSprite(cmd) => cmd.redo(collection),
            EditorCommand::ModifyProperty(cmd) => cmd.redo(collection),
            EditorCommand::AddCollider(cmd) => cmd.redo(collection),
            EditorCommand::RemoveCollider(cmd) => cmd.redo(collection),
        }
    }
}

impl From<AddSpriteCommand> for EditorCommand {
    fn from(cmd: AddSpriteCommand) -> Self {
        EditorCommand::AddSprite(cmd)
    }
}

impl From<RemoveSpriteCommand> for EditorCommand {
    fn from(cmd: RemoveSpriteCommand) -> Self {
        EditorCommand::RemoveSprite(cmd)
    }
}

impl From<ModifySpritePropertyCommand> for EditorCommand {
    fn from(cmd: ModifySpritePropertyCommand) -> Self {
        EditorCommand::ModifyProperty(cmd)
    }
}

impl From<AddColliderCommand> for EditorCommand {
    fn from(cmd: AddColliderCommand) -> Self {
        EditorCommand::AddCollider(cmd)
    }
}

impl From<RemoveColliderCommand> for EditorCommand {
    fn from(cmd: RemoveColliderCommand) -> Self {
        EditorCommand::RemoveCollider(cmd)
    }
}
