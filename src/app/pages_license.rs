// License page - license and third-party notices

use super::app::ManagerApp;
use crate::modules::license::license_text;

use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl ManagerApp<'_> {
    pub fn display_page_license(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_notices, "Show third-party notices");
            if ui.button(format!("{} Copy to Clipboard", icons::CLIPBOARD)).clicked() {
                let text = self.license_page_text().to_string();
                ui.ctx().copy_text(text);
                self.infotext = "License text copied.".to_string();
            }
        });
        ui.separator();

        let text = self.license_page_text();
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(egui::RichText::new(text).monospace());
        });
    }

    /// License text, re-read only when the notice setting changes
    pub fn license_page_text(&mut self) -> &str {
        let stale = !matches!(&self.license_cache, Some((all, _)) if *all == self.show_notices);
        if stale {
            self.license_cache = Some((self.show_notices, license_text(&self.license_dir, self.show_notices)));
        }
        self.license_cache.as_ref().map(|(_, text)| text.as_str()).unwrap_or_default()
    }
}
