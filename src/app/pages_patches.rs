// Patches page - install and remove patches on a worker thread

use super::app::ManagerApp;
use crate::modules::patch::{install_outcome, state_label, uninstall_outcome};
use crate::patches::{all_patches, patch_for};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl ManagerApp<'_> {
    pub fn display_page_patches(&mut self, ui: &mut Ui) {
        ui.heading("Patches");
        ui.add_space(8.0);

        let busy = self.is_busy();
        let patches = all_patches(&self.ctx.config.game_path);

        egui::Grid::new("patches_grid").num_columns(3).spacing([16.0, 8.0]).show(ui, |ui| {
            for patch in &patches {
                let installed = patch.is_installed();
                let tool = patch.tool_type();
                let name = patch.friendly_name();

                ui.label(RichText::new(name).strong());
                ui.label(state_label(patch.as_ref()));

                if installed {
                    if ui
                        .add_enabled(!busy, egui::Button::new(format!("{} Uninstall", icons::TRASH)))
                        .clicked()
                    {
                        let patch = patch_for(tool, &self.ctx.config.game_path);
                        self.spawn_task(&format!("Uninstalling {}", name), move || {
                            uninstall_outcome(patch.as_ref())
                        });
                    }
                } else if ui
                    .add_enabled(!busy, egui::Button::new(format!("{} Install", icons::DOWNLOAD_SIMPLE)))
                    .clicked()
                {
                    let patch = patch_for(tool, &self.ctx.config.game_path);
                    self.spawn_task(&format!("Installing {}", name), move || install_outcome(patch.as_ref()));
                }
                ui.end_row();
            }
        });
    }
}
