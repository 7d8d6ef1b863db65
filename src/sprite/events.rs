//! Notifications raised by sprite collection changes.
//!
//! The collection queues [`SpriteEvent`]s as it mutates; once per frame
//! [`publish_sprite_events`] drains the queue into Bevy messages so panels and
//! markers can refresh without the commands knowing about them.

use bevy::prelude::*;

use super::collection::SpriteItemCollection;

/// Change recorded by the collection, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEvent {
    Added { id: u32, index: usize },
    Removed { id: u32, index: usize },
    SelectionChanged { selected: Option<u32> },
    Modified { id: u32 },
}

/// A sprite entered the collection (new, or brought back by undo/redo)
#[derive(Message, Debug, Clone, Copy)]
pub struct SpriteAdded {
    pub id: u32,
    pub index: usize,
}

/// A sprite left the collection
#[derive(Message, Debug, Clone, Copy)]
pub struct SpriteRemoved {
    pub id: u32,
    pub index: usize,
}

/// Selection was assigned. Sent even when the value did not change.
#[derive(Message, Debug, Clone, Copy)]
pub struct SelectionChanged {
    pub selected: Option<u32>,
}

/// A field of a sprite (or its collider list) was written
#[derive(Message, Debug, Clone, Copy)]
pub struct SpriteModified {
    pub id: u32,
}

/// Drain queued collection events into messages
pub fn publish_sprite_events(
    mut collection: ResMut<SpriteItemCollection>,
    mut added: MessageWriter<SpriteAdded>,
    mut removed: MessageWriter<SpriteRemoved>,
    mut selection: MessageWriter<SelectionChanged>,
    mut modified: MessageWriter<SpriteModified>,
) {
    if !collection.has_pending_events() {
        return;
    }

    for event in collection.drain_events() {
        match event {
            SpriteEvent::Added { id, index } => {
                added.write(SpriteAdded { id, index });
            }
            SpriteEvent::Removed { id, index } => {
                removed.write(SpriteRemoved { id, index });
            }
            SpriteEvent::SelectionChanged { selected } => {
                selection.write(SelectionChanged { selected });
            }
            SpriteEvent::Modified { id } => {
                modified.write(SpriteModified { id });
            }
        }
    }
}
