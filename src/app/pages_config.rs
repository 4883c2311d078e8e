// Configuration page - game directory and reset

use super::app::ManagerApp;
use crate::modules::config;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;
use std::path::PathBuf;

impl ManagerApp<'_> {
    pub fn display_page_config(&mut self, ui: &mut Ui) {
        ui.heading("Configuration");
        ui.add_space(8.0);

        egui::Grid::new("config_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            ui.label("Game path");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut self.game_path_edit).desired_width(320.0));
                if ui.button(format!("{} Browse", icons::FOLDER_OPEN)).clicked()
                    && let Some(dir) = rfd::FileDialog::new().set_title("Game directory").pick_folder()
                {
                    self.game_path_edit = dir.display().to_string();
                }
            });
            ui.end_row();

            ui.label("Config file");
            ui.label(RichText::new(self.ctx.config.config_file_path.display().to_string()).weak());
            ui.end_row();
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let changed = PathBuf::from(&self.game_path_edit) != self.ctx.config.game_path;
            if ui.add_enabled(changed, egui::Button::new("Save")).clicked() {
                let game_path = PathBuf::from(&self.game_path_edit);
                if self.report(|ctx| config::set_game_path(ctx, game_path)).is_some() {
                    self.refresh();
                }
            }

            if ui.button(format!("{} Reset", icons::ARROW_COUNTER_CLOCKWISE)).clicked() {
                self.request_reset();
            }
        });
    }

    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    /// Escape, closing the window and No all decline
    pub fn display_window_confirm_reset(&mut self, ctx: &egui::Context) {
        let mut answer = None;
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            answer = Some(false);
        }

        egui::Window::new("Reset configuration")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Reset the configuration? The game path has to be chosen again.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let no = ui.button("No");
                    if !no.has_focus() && ui.memory(|m| m.focused().is_none()) {
                        no.request_focus();
                    }
                    if no.clicked() {
                        answer = Some(false);
                    }
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                });
            });

        if let Some(confirmed) = answer {
            self.answer_reset(confirmed);
        }
    }

    pub fn answer_reset(&mut self, confirmed: bool) {
        self.confirm_reset = false;
        if !confirmed {
            return;
        }

        if self.report(config::reset).is_some() {
            self.infotext = "Configuration reset.".to_string();
            self.refresh();
        }
    }
}
