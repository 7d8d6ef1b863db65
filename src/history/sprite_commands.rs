//! Commands that add sprites to or remove them from the collection.

use crate::sprite::{SpriteItem, SpriteItemCollection};

/// Create a new default sprite.
///
/// While undone, the command owns the sprite so redo brings back the very
/// same item (id, color and every field).
#[derive(Debug, Clone, Default)]
pub struct AddSpriteCommand {
    added_id: Option<u32>,
    undone: Option<SpriteItem>,
}

impl AddSpriteCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> String {
        "Add Sprite".to_string()
    }

    pub fn execute(&mut self, collection: &mut SpriteItemCollection) {
        self.added_id = Some(collection.add_new_item_internal());
        self.undone = None;
    }

    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        let Some(id) = self.added_id else {
            return;
        };
        if let Some((_, item)) = collection.remove_item_internal(id) {
            self.undone = Some(item);
        }
    }

    /// Re-appends the sprite; a new sprite had no earlier position to restore.
    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        match self.undone.take() {
            Some(item) => collection.add_existing_item_internal(item, None),
            None if self.added_id.is_none() => self.execute(collection),
            None => {}
        }
    }
}

/// Remove one sprite, remembering where it sat and whether it was selected.
#[derive(Debug, Clone)]
pub struct RemoveSpriteCommand {
    sprite_id: u32,
    sprite_name: String,
    original_index: Option<usize>,
    previous_selection: Option<u32>,
    removed: Option<SpriteItem>,
}

impl RemoveSpriteCommand {
    /// Build while the sprite is still in the collection
    pub fn new(collection: &SpriteItemCollection, sprite_id: u32) -> Self {
        Self {
            sprite_id,
            sprite_name: collection
                .item(sprite_id)
                .map(|item| item.name.clone())
                .unwrap_or_default(),
            original_index: collection.index_of(sprite_id),
            previous_selection: collection.selected(),
            removed: None,
        }
    }

    pub fn name(&self) -> String {
        format!("Remove Sprite '{}'", self.sprite_name)
    }

    pub fn execute(&mut self, collection: &mut SpriteItemCollection) {
        if let Some((_, item)) = collection.remove_item_internal(self.sprite_id) {
            self.removed = Some(item);
        }
    }

    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        let Some(item) = self.removed.take() else {
            return;
        };
        collection.add_existing_item_internal(item, self.original_index);
        if self.previous_selection == Some(self.sprite_id) {
            collection.set_selected(Some(self.sprite_id));
        }
    }

    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        self.execute(collection);
    }
}
