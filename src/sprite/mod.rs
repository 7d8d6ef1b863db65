//! Sprite data model and the collection the editor works on.
//!
//! ## Module Structure
//!
//! - [`item`] - Plain sprite records (`SpriteItem`, `RectSource`, `Collider`, ...)
//! - [`property`] - Typed single-field edits used by property commands
//! - [`collection`] - `SpriteItemCollection` resource with selection and colors
//! - [`events`] - Change notifications published as Bevy messages

mod collection;
mod events;
mod item;
mod property;

pub use collection::SpriteItemCollection;
pub use events::{SelectionChanged, SpriteAdded, SpriteModified, SpriteRemoved};
pub use item::{Collider, SpriteItem};
#[allow(unused_imports)]
pub use collection::FALLBACK_SPRITE_COLOR;
#[allow(unused_imports)]
pub use events::SpriteEvent;
#[allow(unused_imports)]
pub use item::{BreakingAnimation, PointOffset, RectSource};
pub use property::{PointField, RectField, SpriteProperty};

use bevy::prelude::*;

/// Message asking to change the selected sprite. Selection is not part of the
/// undo history.
#[derive(Message)]
pub struct SelectSpriteRequest {
    pub id: Option<u32>,
}

fn handle_select_requests(
    mut events: MessageReader<SelectSpriteRequest>,
    mut collection: ResMut<SpriteItemCollection>,
) {
    for event in events.read() {
        collection.set_selected(event.id);
    }
}

/// System set for publishing collection changes; UI reads the messages after it
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteEventsPublished;

pub struct SpritePlugin;

impl Plugin for SpritePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteItemCollection>()
            .add_message::<SelectSpriteRequest>()
            .add_message::<SpriteAdded>()
            .add_message::<SpriteRemoved>()
            .add_message::<SelectionChanged>()
            .add_message::<SpriteModified>()
            .add_systems(
                Update,
                (
                    handle_select_requests.run_if(on_message::<SelectSpriteRequest>),
                    events::publish_sprite_events.in_set(SpriteEventsPublished),
                )
                    .chain(),
            );
    }
}
