//! Commands that edit a sprite's collider list.
//!
//! Colliders have no identity of their own, so "the same collider" means the
//! equal collider nearest to where the command last saw it.

use crate::sprite::{Collider, SpriteItemCollection};

#[derive(Debug, Clone)]
pub struct AddColliderCommand {
    sprite_id: u32,
    collider: Collider,
}

impl AddColliderCommand {
    pub fn new(sprite_id: u32, collider: Collider) -> Self {
        Self {
            sprite_id,
            collider,
        }
    }

    pub fn name(&self) -> String {
        "Add Collider".to_string()
    }

    pub fn execute(&mut self, collection: &mut SpriteItemCollection) {
        let collider = &self.collider;
        collection.modify_item(self.sprite_id, |item| item.colliders.push(collider.clone()));
    }

    /// Removes the last equal collider, which is the one `execute` appended
    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        let collider = &self.collider;
        collection.modify_item(self.sprite_id, |item| {
            if let Some(index) = item.colliders.iter().rposition(|c| c == collider) {
                item.colliders.remove(index);
            }
        });
    }

    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        self.execute(collection);
    }
}

#[derive(Debug, Clone)]
pub struct RemoveColliderCommand {
    sprite_id: u32,
    collider: Collider,
    original_index: usize,
}

impl RemoveColliderCommand {
    /// Capture the collider at `index`. Returns `None` if the sprite or the
    /// index does not exist.
    pub fn new(collection: &SpriteItemCollection, sprite_id: u32, index: usize) -> Option<Self> {
        let collider = collection.item(sprite_id)?.colliders.get(index)?.clone();
        Some(Self {
            sprite_id,
            collider,
            original_index: index,
        })
    }

    pub fn name(&self) -> String {
        "Remove Collider".to_string()
    }

    pub fn execute(&mut self, collection: &mut SpriteItemCollection) {
        let collider = &self.collider;
        let preferred = self.original_index;
        collection.modify_item(self.sprite_id, |item| {
            let index = if item.colliders.get(preferred) == Some(collider) {
                Some(preferred)
            } else {
                item.collider_index(collider)
            };
            if let Some(index) = index {
                item.colliders.remove(index);
            }
        });
    }

    pub fn undo(&mut self, collection: &mut SpriteItemCollection) {
        let collider = &self.collider;
        let index = self.original_index;
        collection.modify_item(self.sprite_id, |item| {
            if index <= item.colliders.len() {
                item.colliders.insert(index, collider.clone());
            } else {
                item.colliders.push(collider.clone());
            }
        });
    }

    pub fn redo(&mut self, collection: &mut SpriteItemCollection) {
        self.execute(collection);
    }
}
