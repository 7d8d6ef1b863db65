use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::color_to_egui;
use crate::sprite::{SelectSpriteRequest, SelectionChanged, SpriteAdded, SpriteItemCollection};

const SWATCH_SIZE: f32 = 14.0;

#[derive(Resource, Default)]
pub struct SpriteListState {
    /// Row to bring into view on the next frame
    pub scroll_to: Option<u32>,
}

/// Keep the newest or newly selected sprite visible in the list
pub fn follow_sprite_changes(
    mut added: MessageReader<SpriteAdded>,
    mut selection: MessageReader<SelectionChanged>,
    mut state: ResMut<SpriteListState>,
) {
    if let Some(event) = added.read().last() {
        state.scroll_to = Some(event.id);
    }
    if let Some(event) = selection.read().last()
        && event.selected.is_some()
    {
        state.scroll_to = event.selected;
    }
}

/// Left panel listing every sprite with its color swatch
pub fn sprite_list_ui(
    mut contexts: EguiContexts,
    collection: Res<SpriteItemCollection>,
    mut state: ResMut<SpriteListState>,
    mut select_events: MessageWriter<SelectSpriteRequest>,
) -> Result {
    egui::SidePanel::left("sprite_list")
        .default_width(220.0)
        .resizable(true)
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading(format!("Sprites ({})", collection.len()));
            ui.separator();

            if collection.is_empty() {
                ui.label(egui::RichText::new("No sprites yet").weak());
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let selected = collection.selected();
                    for item in collection.items() {
                        ui.horizontal(|ui| {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                                egui::Sense::hover(),
                            );
                            ui.painter().rect_filled(
                                rect,
                                2.0,
                                color_to_egui(collection.item_color(item.id)),
                            );

                            let is_selected = selected == Some(item.id);
                            let label = format!("{} #{}", item.name, item.id);
                            let response = ui.selectable_label(is_selected, label);
                            if state.scroll_to == Some(item.id) {
                                response.scroll_to_me(Some(egui::Align::Center));
                                state.scroll_to = None;
                            }
                            if response.clicked() && !is_selected {
                                select_events.write(SelectSpriteRequest { id: Some(item.id) });
                            }
                        });
                    }
                });
        });

    Ok(())
}
