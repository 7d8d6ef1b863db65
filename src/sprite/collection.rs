//! Ordered, id-keyed sprite aggregate with selection and marker colors.
//!
//! The `*_internal` mutators are the only way sprites enter or leave the
//! collection; commands in [`crate::history`] call them so every change can be
//! undone. They are total: a stale id or an out-of-range index is ignored or
//! clamped, never a panic.

use std::collections::{HashMap, HashSet};
use std::mem;

use bevy::prelude::*;

use crate::constants::{SPRITE_COLOR_CHANNEL_MIN, SPRITE_ID_FLOOR};

use super::events::SpriteEvent;
use super::item::SpriteItem;

/// Color returned for ids that never received one
pub const FALLBACK_SPRITE_COLOR: Color = Color::WHITE;

#[derive(Resource, Debug, Default)]
pub struct SpriteItemCollection {
    /// Display and save order
    items: Vec<SpriteItem>,
    /// Id of the selected sprite; always a member of `items` when set
    selected: Option<u32>,
    /// Marker color per id, assigned once and kept after removal
    colors: HashMap<u32, Color>,
    /// Highest id ever held since the last `replace_all`, removed sprites included
    highest_id: u32,
    /// Changes not yet published as messages
    pending_events: Vec<SpriteEvent>,
}

impl SpriteItemCollection {
    pub fn items(&self) -> &[SpriteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: u32) -> Option<&SpriteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index_of(id).is_some()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&SpriteItem> {
        self.selected.and_then(|id| self.item(id))
    }

    /// Id the next new sprite will get. Ids of removed sprites are never
    /// handed out again, so undoing a removal cannot collide with a newer sprite.
    pub fn next_id(&self) -> u32 {
        self.highest_id.max(SPRITE_ID_FLOOR) + 1
    }

    fn note_id(&mut self, id: u32) {
        self.highest_id = self.highest_id.max(id);
    }

    /// Marker color for `id`, or [`FALLBACK_SPRITE_COLOR`] if it has none
    pub fn item_color(&self, id: u32) -> Color {
        self.colors
            .get(&id)
            .copied()
            .unwrap_or(FALLBACK_SPRITE_COLOR)
    }

    /// Assign the selection. A non-member id clears it. Always queues a
    /// selection event, even when nothing changed.
    pub fn set_selected(&mut self, id: Option<u32>) {
        let selected = id.filter(|id| self.contains(*id));
        if id.is_some() && selected.is_none() {
            debug!("Ignoring selection of unknown sprite {:?}", id);
        }
        self.selected = selected;
        self.pending_events
            .push(SpriteEvent::SelectionChanged { selected });
    }

    /// Create a default sprite, give it a fresh id and color, append it and
    /// select it. Returns the new id.
    pub fn add_new_item_internal(&mut self) -> u32 {
        let id = self.next_id();
        self.note_id(id);
        self.colors.entry(id).or_insert_with(random_bright_color);

        self.items.push(SpriteItem::new(id));
        self.pending_events.push(SpriteEvent::Added {
            id,
            index: self.items.len() - 1,
        });
        self.set_selected(Some(id));

        debug!("Created sprite {}", id);
        id
    }

    /// Put back a sprite that already has an id. Inserts at `index` when it
    /// fits, otherwise appends; then selects it.
    pub fn add_existing_item_internal(&mut self, item: SpriteItem, index: Option<usize>) {
        let id = item.id;
        if self.contains(id) {
            // Ids stay unique; this only happens when a caller replays a stale command
            debug!("Sprite {} is already present, not re-adding", id);
            self.set_selected(Some(id));
            return;
        }

        self.note_id(id);
        self.colors.entry(id).or_insert_with(random_bright_color);

        let index = match index {
            Some(index) if index <= self.items.len() => index,
            _ => self.items.len(),
        };
        self.items.insert(index, item);
        self.pending_events.push(SpriteEvent::Added { id, index });
        self.set_selected(Some(id));
    }

    /// Take a sprite out of the collection, returning where it was and the
    /// sprite itself. If it was selected, the first remaining sprite becomes
    /// selected. Its color assignment is kept.
    pub fn remove_item_internal(&mut self, id: u32) -> Option<(usize, SpriteItem)> {
        let Some(index) = self.index_of(id) else {
            debug!("Sprite {} not in collection, nothing to remove", id);
            return None;
        };

        let item = self.items.remove(index);
        self.pending_events.push(SpriteEvent::Removed { id, index });

        if self.selected == Some(id) {
            let first = self.items.first().map(|item| item.id);
            self.set_selected(first);
        }

        Some((index, item))
    }

    /// Run `f` on a member sprite and record that it changed.
    /// Returns `None` for a stale id.
    pub fn modify_item<R>(&mut self, id: u32, f: impl FnOnce(&mut SpriteItem) -> R) -> Option<R> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("Sprite {} not in collection, edit ignored", id);
            return None;
        };

        let result = f(item);
        self.pending_events.push(SpriteEvent::Modified { id });
        Some(result)
    }

    /// Replace every sprite at once (file load, new sheet). Colors are
    /// reassigned and the selection is resolved by id.
    ///
    /// Ids must stay unique, so every repeat of an id after its first
    /// occurrence gets a fresh one. Returns the `(old, new)` pairs reassigned.
    pub fn replace_all(
        &mut self,
        items: Vec<SpriteItem>,
        selected: Option<u32>,
    ) -> Vec<(u32, u32)> {
        for index in (0..self.items.len()).rev() {
            let id = self.items[index].id;
            self.pending_events.push(SpriteEvent::Removed { id, index });
        }

        self.colors.clear();
        self.highest_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        self.items = items;

        let mut seen = HashSet::new();
        let mut reassigned = Vec::new();
        for index in 0..self.items.len() {
            let id = self.items[index].id;
            if !seen.insert(id) {
                let fresh = self.next_id();
                self.note_id(fresh);
                self.items[index].id = fresh;
                seen.insert(fresh);
                reassigned.push((id, fresh));
            }
        }
        if !reassigned.is_empty() {
            warn!("Reassigned duplicate sprite ids: {:?}", reassigned);
        }

        for (index, item) in self.items.iter().enumerate() {
            self.colors.insert(item.id, random_bright_color());
            self.pending_events.push(SpriteEvent::Added {
                id: item.id,
                index,
            });
        }

        self.set_selected(selected);
        reassigned
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Take every queued event, oldest first
    pub fn drain_events(&mut self) -> Vec<SpriteEvent> {
        mem::take(&mut self.pending_events)
    }
}

/// Random color with every channel in `[SPRITE_COLOR_CHANNEL_MIN, 255]`
fn random_bright_color() -> Color {
    Color::srgb_u8(
        fastrand::u8(SPRITE_COLOR_CHANNEL_MIN..=u8::MAX),
        fastrand::u8(SPRITE_COLOR_CHANNEL_MIN..=u8::MAX),
        fastrand::u8(SPRITE_COLOR_CHANNEL_MIN..=u8::MAX),
    )
}
