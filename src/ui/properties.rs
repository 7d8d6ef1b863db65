use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::collections::HashMap;

use crate::history::{
    AddColliderCommand, HistoryRequest, ModifySpritePropertyCommand, RemoveColliderCommand,
};
use crate::sprite::{
    Collider, PointField, RectField, SpriteItem, SpriteItemCollection, SpriteModified,
    SpriteProperty, SpriteRemoved,
};

/// In-progress edits for the selected sprite, keyed by property path.
///
/// A draft becomes a command only when the edit is committed (drag released
/// or focus lost), so one drag produces one undo step.
#[derive(Resource, Default)]
pub struct PropertyDrafts {
    sprite_id: Option<u32>,
    values: HashMap<String, Draft>,
}

/// A field being edited: its value when editing began and the value shown now
#[derive(Debug, Clone, PartialEq)]
struct Draft {
    start: SpriteProperty,
    value: SpriteProperty,
}

impl Draft {
    fn update(drafts: &mut PropertyDrafts, current: &SpriteProperty, value: SpriteProperty) {
        let draft = drafts
            .values
            .entry(current.path())
            .or_insert_with(|| Draft {
                start: current.clone(),
                value: current.clone(),
            });
        draft.value = value;
    }
}

impl PropertyDrafts {
    fn track(&mut self, sprite_id: Option<u32>) {
        if self.sprite_id != sprite_id {
            self.sprite_id = sprite_id;
            self.values.clear();
        }
    }
}

/// Drop drafts for a sprite that changed underneath them (undo, redo, removal)
pub fn discard_stale_drafts(
    mut modified: MessageReader<SpriteModified>,
    mut removed: MessageReader<SpriteRemoved>,
    mut drafts: ResMut<PropertyDrafts>,
) {
    let Some(sprite_id) = drafts.sprite_id else {
        modified.clear();
        removed.clear();
        return;
    };

    let was_modified = modified
        .read()
        .fold(false, |hit, event| hit || event.id == sprite_id);
    let was_removed = removed
        .read()
        .fold(false, |hit, event| hit || event.id == sprite_id);
    let touched = was_modified || was_removed;
    if touched && !drafts.values.is_empty() {
        debug!("Discarding {} property draft(s) for sprite {}", drafts.values.len(), sprite_id);
        drafts.values.clear();
    }
}

/// Edits gathered during one frame of the panel
#[derive(Default)]
struct PanelEdits {
    /// Immediate edits (checkboxes), old value read when the command is built
    properties: Vec<SpriteProperty>,
    /// Finished drafts, old value taken from when editing began
    drafts: Vec<Draft>,
    add_collider: Option<Collider>,
    remove_collider: Option<usize>,
}

/// Right panel showing the selected sprite's properties
pub fn properties_panel_ui(
    mut contexts: EguiContexts,
    collection: Res<SpriteItemCollection>,
    mut drafts: ResMut<PropertyDrafts>,
    mut history_events: MessageWriter<HistoryRequest>,
) -> Result {
    drafts.track(collection.selected());
    let drafts = &mut *drafts;
    let mut edits = PanelEdits::default();

    egui::SidePanel::right("properties_panel")
        .default_width(280.0)
        .resizable(true)
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading("Properties");
            ui.separator();

            let Some(sprite) = collection.selected_item() else {
                ui.label(egui::RichText::new("No sprite selected").weak());
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    sprite_fields_ui(ui, sprite, drafts, &mut edits);
                });
        });

    let Some(sprite_id) = collection.selected() else {
        return Ok(());
    };

    for value in edits.properties {
        if let Some(command) = ModifySpritePropertyCommand::new(&collection, sprite_id, value)
            && !command.is_noop()
        {
            history_events.write(HistoryRequest::execute(command));
        }
    }
    for draft in edits.drafts {
        if let Some(command) = ModifySpritePropertyCommand::with_values(
            &collection,
            sprite_id,
            draft.start,
            draft.value,
        ) && !command.is_noop()
        {
            history_events.write(HistoryRequest::execute(command));
        }
    }
    if let Some(index) = edits.remove_collider
        && let Some(command) = RemoveColliderCommand::new(&collection, sprite_id, index)
    {
        history_events.write(HistoryRequest::execute(command));
    }
    if let Some(collider) = edits.add_collider {
        history_events.write(HistoryRequest::execute(AddColliderCommand::new(
            sprite_id, collider,
        )));
    }

    Ok(())
}

fn sprite_fields_ui(
    ui: &mut egui::Ui,
    sprite: &SpriteItem,
    drafts: &mut PropertyDrafts,
    edits: &mut PanelEdits,
) {
    ui.label(egui::RichText::new(format!("Id: {}", sprite.id)).weak());

    ui.horizontal(|ui| {
        ui.label("Name:");
        name_field(ui, sprite, drafts, edits);
    });
    int_field(ui, "Y sort", sprite, SpriteProperty::YSort(0), drafts, edits);

    let mut fragile = sprite.fragile;
    if ui.checkbox(&mut fragile, "Fragile").changed() {
        edits.properties.push(SpriteProperty::Fragile(fragile));
    }
    let mut breakable = sprite.breakable;
    if ui.checkbox(&mut breakable, "Breakable").changed() {
        edits.properties.push(SpriteProperty::Breakable(breakable));
    }

    ui.add_space(4.0);
    egui::CollapsingHeader::new("Source")
        .default_open(true)
        .show(ui, |ui| {
            for field in RectField::all() {
                let key = SpriteProperty::Source(*field, 0);
                int_field(ui, field.key(), sprite, key, drafts, edits);
            }
        });
    egui::CollapsingHeader::new("Offset")
        .default_open(true)
        .show(ui, |ui| {
            for field in PointField::all() {
                let key = SpriteProperty::Offset(*field, 0);
                int_field(ui, field.key(), sprite, key, drafts, edits);
            }
        });
    egui::CollapsingHeader::new("Shadow").show(ui, |ui| {
        ui.label("Source");
        for field in RectField::all() {
            let key = SpriteProperty::ShadowSource(*field, 0);
            int_field(ui, field.key(), sprite, key, drafts, edits);
        }
        ui.label("Offset");
        for field in PointField::all() {
            let key = SpriteProperty::ShadowOffset(*field, 0);
            int_field(ui, field.key(), sprite, key, drafts, edits);
        }
    });
    egui::CollapsingHeader::new("Breaking animation").show(ui, |ui| {
        ui.label("Source");
        for field in RectField::all() {
            let key = SpriteProperty::BreakingSource(*field, 0);
            int_field(ui, field.key(), sprite, key, drafts, edits);
        }
        ui.label("Offset");
        for field in PointField::all() {
            let key = SpriteProperty::BreakingOffset(*field, 0);
            int_field(ui, field.key(), sprite, key, drafts, edits);
        }
        int_field(ui, "X inverted", sprite, SpriteProperty::BreakingXInverted(0), drafts, edits);
        int_field(
            ui,
            "Frame duration",
            sprite,
            SpriteProperty::BreakingFrameDuration(0),
            drafts,
            edits,
        );
        int_field(ui, "Frames", sprite, SpriteProperty::BreakingFrameCount(0), drafts, edits);
    });

    ui.add_space(4.0);
    ui.separator();
    colliders_ui(ui, sprite, edits);
}

fn name_field(
    ui: &mut egui::Ui,
    sprite: &SpriteItem,
    drafts: &mut PropertyDrafts,
    edits: &mut PanelEdits,
) {
    let current = SpriteProperty::Name(sprite.name.clone());
    let path = current.path();
    let mut name = match drafts.values.get(&path).map(|draft| &draft.value) {
        Some(SpriteProperty::Name(draft)) => draft.clone(),
        _ => sprite.name.clone(),
    };

    let response = ui.text_edit_singleline(&mut name);
    if response.changed() {
        Draft::update(drafts, &current, SpriteProperty::Name(name));
    }
    if response.lost_focus()
        && let Some(draft) = drafts.values.remove(&path)
        && draft.start != draft.value
    {
        edits.drafts.push(draft);
    }
}

fn int_field(
    ui: &mut egui::Ui,
    label: &str,
    sprite: &SpriteItem,
    key: SpriteProperty,
    drafts: &mut PropertyDrafts,
    edits: &mut PanelEdits,
) {
    let current = sprite.property(&key);
    let path = current.path();
    let mut value = drafts
        .values
        .get(&path)
        .and_then(|draft| draft.value.as_int())
        .or_else(|| current.as_int())
        .unwrap_or_default();

    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let response = ui.add(egui::DragValue::new(&mut value).speed(1.0));
            if response.changed() {
                Draft::update(drafts, &current, current.with_int(value));
            }
            if (response.drag_stopped() || response.lost_focus())
                && let Some(draft) = drafts.values.remove(&path)
                && draft.start != draft.value
            {
                edits.drafts.push(draft);
            }
        });
    });
}

fn colliders_ui(ui: &mut egui::Ui, sprite: &SpriteItem, edits: &mut PanelEdits) {
    ui.label(egui::RichText::new(format!("Colliders ({})", sprite.colliders.len())).strong());

    for (index, collider) in sprite.colliders.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} ({}, {}) {}x{}",
                collider.collider_type, collider.x, collider.y, collider.width, collider.height
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Remove").clicked() {
                    edits.remove_collider = Some(index);
                }
            });
        });
    }

    if ui.button("Add Collider").clicked() {
        edits.add_collider = Some(default_collider(sprite));
    }
}

/// New colliders cover the sprite's whole source rectangle
fn default_collider(sprite: &SpriteItem) -> Collider {
    Collider::rectangle(0, 0, sprite.source.width, sprite.source.height)
}
