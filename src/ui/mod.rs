mod dialogs;
mod properties;
mod sprite_list;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::{egui, EguiPrimaryContextPass};

use crate::config::{ConfigLoaded, ConfigResetNotification};
use crate::persistence::{AsyncFileOperation, SpriteFileError};
use crate::sprite::SpriteEventsPublished;

/// Whether any modal dialog is open. Editor shortcuts are ignored while it is.
#[derive(Resource, Default)]
pub struct DialogState {
    pub any_modal_open: bool,
}

/// Run condition: true when no modal dialog is open
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}

/// Aggregates dialog flags at the start of each frame
fn update_dialog_state(
    file_menu: Res<toolbar::FileMenuState>,
    config_reset: Res<ConfigResetNotification>,
    file_error: Res<SpriteFileError>,
    async_op: Res<AsyncFileOperation>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = file_menu.show_new_confirmation
        || config_reset.show
        || file_error.message.is_some()
        || async_op.is_busy();
}

/// Converts a Bevy color into the egui color used for swatches.
pub(crate) fn color_to_egui(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(srgba.red), channel(srgba.green), channel(srgba.blue))
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<toolbar::FileMenuState>()
            .init_resource::<toolbar::HistoryStatus>()
            .init_resource::<sprite_list::SpriteListState>()
            .init_resource::<properties::PropertyDrafts>()
            .add_systems(Startup, toolbar::init_file_path.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    toolbar::track_history_changes,
                    sprite_list::follow_sprite_changes,
                    properties::discard_stale_drafts,
                )
                    .after(SpriteEventsPublished),
            )
            // Top bar first, then side panels, then overlays
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    sprite_list::sprite_list_ui,
                    properties::properties_panel_ui,
                    dialogs::new_sheet_confirmation_ui,
                    dialogs::file_error_dialog_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .chain(),
            )
            .add_systems(First, update_dialog_state);
    }
}
