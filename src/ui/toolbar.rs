use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::history::{
    AddSpriteCommand, CommandManager, HistoryChanged, HistoryRequest, RemoveSpriteCommand,
};
use crate::persistence::{
    AsyncFileOperation, CurrentSpriteFile, LoadSpritesRequest, SaveSpritesRequest,
};
use crate::sprite::SpriteItemCollection;

#[derive(Resource, Default)]
pub struct FileMenuState {
    /// Contents of the sprite file path field
    pub path_input: String,
    pub show_new_confirmation: bool,
}

impl FileMenuState {
    fn input_path(&self) -> Option<PathBuf> {
        let trimmed = self.path_input.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// Label of the last command executed, undone or redone
#[derive(Resource, Default)]
pub struct HistoryStatus {
    pub last_command: Option<String>,
}

pub fn track_history_changes(
    mut changes: MessageReader<HistoryChanged>,
    mut status: ResMut<HistoryStatus>,
) {
    if let Some(change) = changes.read().last() {
        status.last_command = change.command.clone();
    }
}

/// Prefill the path field with the last sprite file, if any
pub fn init_file_path(config: Res<AppConfig>, mut state: ResMut<FileMenuState>) {
    if let Some(path) = &config.data.last_sprite_file {
        state.path_input = path.to_string_lossy().into_owned();
    }
}

/// Main toolbar: sprite add/remove, history, and file controls
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    collection: Res<SpriteItemCollection>,
    manager: Res<CommandManager>,
    async_op: Res<AsyncFileOperation>,
    current_file: Res<CurrentSpriteFile>,
    history_status: Res<HistoryStatus>,
    mut state: ResMut<FileMenuState>,
    mut history_events: MessageWriter<HistoryRequest>,
    mut save_events: MessageWriter<SaveSpritesRequest>,
    mut load_events: MessageWriter<LoadSpritesRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                if toolbar_button(ui, "Add Sprite", true)
                    .on_hover_text("Add a new sprite")
                    .clicked()
                {
                    history_events.write(HistoryRequest::execute(AddSpriteCommand::new()));
                }

                let selected = collection.selected();
                if toolbar_button(ui, "Remove Sprite", selected.is_some())
                    .on_hover_text("Remove the selected sprite (Delete)")
                    .clicked()
                    && let Some(id) = selected
                {
                    history_events.write(HistoryRequest::execute(RemoveSpriteCommand::new(
                        &collection,
                        id,
                    )));
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if toolbar_button(ui, "Undo", manager.can_undo())
                    .on_hover_text(manager.undo_command_name())
                    .on_disabled_hover_text(manager.undo_command_name())
                    .clicked()
                {
                    history_events.write(HistoryRequest::Undo);
                }
                if toolbar_button(ui, "Redo", manager.can_redo())
                    .on_hover_text(manager.redo_command_name())
                    .on_disabled_hover_text(manager.redo_command_name())
                    .clicked()
                {
                    history_events.write(HistoryRequest::Redo);
                }
                let has_history = manager.can_undo() || manager.can_redo();
                if toolbar_button(ui, "Clear History", has_history)
                    .on_hover_text(format!(
                        "Forget {} undo and {} redo step(s)",
                        manager.undo_count(),
                        manager.redo_count()
                    ))
                    .clicked()
                {
                    history_events.write(HistoryRequest::Clear);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label("File:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.path_input)
                        .desired_width(260.0)
                        .hint_text("sprites.json"),
                );

                if toolbar_button(ui, "Browse...", !async_op.is_busy())
                    .on_hover_text("Choose a sprite file")
                    .clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .set_title("Choose Sprite File")
                        .add_filter("Sprite sheet", &["json"])
                        .pick_file()
                {
                    state.path_input = path.to_string_lossy().into_owned();
                }

                let can_use_file = !async_op.is_busy() && state.input_path().is_some();
                if toolbar_button(ui, "Load", can_use_file).clicked()
                    && let Some(path) = state.input_path()
                {
                    load_events.write(LoadSpritesRequest { path });
                }
                if toolbar_button(ui, "Save", can_use_file).clicked()
                    && let Some(path) = state.input_path()
                {
                    save_events.write(SaveSpritesRequest { path });
                }
                ui.add_enabled_ui(
                    !async_op.is_busy() && !config.data.recent_files.is_empty(),
                    |ui| {
                        ui.menu_button("Recent", |ui| {
                            for path in &config.data.recent_files {
                                let label = path
                                    .file_name()
                                    .map(|n| n.to_string_lossy().into_owned())
                                    .unwrap_or_else(|| path.to_string_lossy().into_owned());
                                if ui
                                    .button(label)
                                    .on_hover_text(path.to_string_lossy().as_ref())
                                    .clicked()
                                {
                                    state.path_input = path.to_string_lossy().into_owned();
                                    load_events.write(LoadSpritesRequest { path: path.clone() });
                                    ui.close();
                                }
                            }
                        });
                    },
                );
                if toolbar_button(ui, "Save As...", !async_op.is_busy()).clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .set_title("Save Sprite Sheet")
                        .add_filter("Sprite sheet", &["json"])
                        .set_file_name("sprites.json")
                        .save_file()
                {
                    state.path_input = path.to_string_lossy().into_owned();
                    save_events.write(SaveSpritesRequest { path });
                }
                if toolbar_button(ui, "New", !async_op.is_busy()).clicked() {
                    state.show_new_confirmation = true;
                }

                // Right-aligned file status
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(description) = &async_op.operation_description {
                        ui.spinner();
                        ui.label(description);
                    } else if let Some(path) = &current_file.path {
                        let file_name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        ui.label(egui::RichText::new(file_name).weak())
                            .on_hover_text(path.to_string_lossy().as_ref());
                    } else {
                        ui.label(egui::RichText::new("Unsaved sheet").weak());
                    }

                    if let Some(last) = &history_status.last_command {
                        ui.separator();
                        ui.label(egui::RichText::new(last).weak().italics());
                    }
                });
            });
        });

    Ok(())
}

fn toolbar_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(label).size(14.0)).min_size(egui::vec2(0.0, 28.0)),
    )
}
