// Information page - detected game variant and checksums

use super::app::ManagerApp;
use crate::modules::info::{checksums, summary, UNAVAILABLE};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl ManagerApp<'_> {
    pub fn display_page_info(&mut self, ui: &mut Ui) {
        ui.heading("Information");
        ui.add_space(8.0);

        match &self.metadata {
            Some(metadata) => {
                let rows = summary(&self.ctx.config.game_path, metadata);
                egui::Grid::new("info_grid").num_columns(2).spacing([12.0, 6.0]).striped(true).show(ui, |ui| {
                    for (label, value) in rows {
                        ui.label(RichText::new(label).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });
            }
            None => {
                ui.label(RichText::new("Game information could not be determined").italics());
            }
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button(format!("{} Reload", icons::ARROW_CLOCKWISE)).clicked() {
                self.metadata = self.report(|ctx| ctx.reload_metadata());
                self.checksums = None;
            }
            if ui.button(format!("{} Checksums", icons::FINGERPRINT)).clicked()
                && let Some(metadata) = self.metadata.clone()
            {
                let game_path = self.ctx.config.game_path.clone();
                self.checksums = self.report(|_| checksums(&game_path, &metadata));
            }
        });

        match &self.checksums {
            Some(Some(sums)) => {
                ui.add_space(8.0);
                egui::Grid::new("checksum_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                    for (path, sum) in sums {
                        ui.label(path.display().to_string());
                        ui.label(RichText::new(sum).monospace());
                        ui.end_row();
                    }
                });
            }
            Some(None) => {
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Checksums {}: game edition unknown", UNAVAILABLE)).weak());
            }
            None => {}
        }
    }
}
