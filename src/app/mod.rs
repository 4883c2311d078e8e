mod app;
mod pages_config;
mod pages_info;
mod pages_license;
mod pages_patches;
mod panel_top;

pub use app::ManagerApp;

use crate::error::Result;
use crate::modules::Context;

use eframe::egui;

pub const APP_TITLE: &str = "Europa 1400 Manager";

/// Open the main window and block until it is closed
pub fn run(ctx: Context<'_>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    log::info!("Starting eframe app");

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(ManagerApp::new(ctx)))
        }),
    )?;
    Ok(())
}
