use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::toolbar::FileMenuState;
use crate::config::ConfigResetNotification;
use crate::persistence::{NewSpriteSheetRequest, SpriteFileError};

/// Confirmation before discarding the current sheet
pub fn new_sheet_confirmation_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<FileMenuState>,
    mut new_events: MessageWriter<NewSpriteSheetRequest>,
) -> Result {
    if !state.show_new_confirmation {
        return Ok(());
    }

    egui::Window::new("New Sprite Sheet")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Start a new sprite sheet? Unsaved changes and the undo history will be lost.");
            ui.horizontal(|ui| {
                if ui.button("Create New").clicked() {
                    new_events.write(NewSpriteSheetRequest);
                    state.show_new_confirmation = false;
                }
                if ui.button("Cancel").clicked() {
                    state.show_new_confirmation = false;
                }
            });
        });

    Ok(())
}

/// Shows the last load/save failure until dismissed
pub fn file_error_dialog_ui(
    mut contexts: EguiContexts,
    mut file_error: ResMut<SpriteFileError>,
) -> Result {
    let Some(message) = file_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("File Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, message);
            });
            ui.add_space(5.0);
            if ui.button("OK").clicked() {
                file_error.message = None;
            }
        });

    Ok(())
}

/// Tells the user their settings file was unreadable and got replaced
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be read and were reset to defaults.");
            if let Some(reason) = &notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
            }
        });

    Ok(())
}
