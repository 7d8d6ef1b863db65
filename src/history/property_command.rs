//! Single-field sprite edits.

use bevy::prelude::*;

use crate::sprite::{SpriteItemCollection, SpriteProperty};

/// Write one field of one sprite, keeping the value it replaced.
#[derive(Debug, Clone)]
pub struct ModifySpritePropertyCommand {
    sprite_id: u32,
    sprite_name: String,
    old_value: SpriteProperty,
    new_value: SpriteProperty,
}

impl ModifySpritePropertyCommand {
    /// Capture the current value of the field `new_value` addresses.
    /// Returns `None` when the sprite is not in the collection.
    pub fn new(
        collection: &SpriteItemCollection,
        sprite_id: u32,
        new_value: SpriteProperty,
    ) -> Option<Self> {
        let item = collection.item(sprite_id)?;
        Some(Self {
            sprite_id,
            sprite_name: item.name.clone(),
            old_value: item.property(&new_value),
            new_value,
        })
    }

    /// For edits whose starting value was captured earlier, e.g. at the start
    /// of a drag. Both values must address the same field.
    pub fn with_values(
        collection: &SpriteItemCollection,
        sprite_id: u32,
        old_value: SpriteProperty,
        new_value: SpriteProperty,
    ) -> Option<Self> {
        if !old_value.same_field(&new_value) {
            warn!(
                "Mismatched property edit: {} vs {}",
                old_value.path(),
                new_value.path()
            );
            return None;
        }
        let item = collection.item(sprite_id)?;
        Some(Self {
            sprite_id,
            sprite_name: item.name.clone(),
            old_value,
            new_value,
        })
    }

    /// True when applying the command would not change anything
    pub fn is_noop(&self) -> bool {
        self.old_value == self.new_value
    }

    pub fn name(&self) -> String {
        format!("Change {} of '{}'", self.new_value.path(), self.sprite_name)
    }

    pub fn execute(&mut self, collection: &mut SpriteItemCollection) {
        collection.modify_item(self.sprite_id, |item| item.apply(&self.new_value));
    }

    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        collection.modify_item(self.sprite_id, |item| item.apply(&self.old_value));
    }

    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        self.execute(collection);
    }
}
