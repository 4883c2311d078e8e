use super::app::{ManagerApp, MenuPage};
use crate::modules;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl ManagerApp<'_> {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let tabs = [
                (MenuPage::Config, icons::GEAR, &modules::config::MODULE),
                (MenuPage::Info, icons::INFO, &modules::info::MODULE),
                (MenuPage::Patches, icons::WRENCH, &modules::patch::MODULE),
                (MenuPage::License, icons::SCROLL, &modules::license::MODULE),
            ];

            for (page, icon, module) in tabs {
                let btn = ui.add(
                    egui::Button::new(format!("{} {}", icon, module.friendly_name))
                        .min_size(egui::vec2(90.0, 28.0))
                        .selected(self.cur_page == page),
                );
                if btn.clicked() {
                    self.cur_page = page;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("v{}", env!("CARGO_PKG_VERSION"))).small().weak());
            });
        });
    }
}
