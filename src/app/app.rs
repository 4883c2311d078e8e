// Core app structure and main update loop

use crate::metadata::GameMetadata;
use crate::modules::Context;

use eframe::egui::{self, RichText};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuPage {
    Config,
    Info,
    Patches,
    License,
}

/// Background job and the channel its single result arrives on
pub struct Task {
    pub label: String,
    rx: Receiver<std::result::Result<String, String>>,
}

pub struct ManagerApp<'a> {
    pub ctx: Context<'a>,
    pub cur_page: MenuPage,
    /// Last message for the status bar
    pub infotext: String,
    pub task: Option<Task>,

    pub metadata: Option<GameMetadata>,
    pub checksums: Option<Option<Vec<(PathBuf, String)>>>,

    // Config page state
    pub game_path_edit: String,
    /// Reset confirmation window is open
    pub confirm_reset: bool,

    // License page state
    pub show_notices: bool,
    pub license_dir: PathBuf,
    /// Text for the current `show_notices` value, read on first display
    pub license_cache: Option<(bool, String)>,
}

impl<'a> ManagerApp<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        let game_path_edit = ctx.config.game_path.display().to_string();
        let mut app = Self {
            ctx,
            cur_page: MenuPage::Info,
            infotext: String::new(),
            task: None,
            metadata: None,
            checksums: None,
            game_path_edit,
            confirm_reset: false,
            show_notices: false,
            license_dir: PathBuf::from("."),
            license_cache: None,
        };
        app.refresh();
        app
    }

    /// Reload everything derived from the game directory
    pub fn refresh(&mut self) {
        self.ctx.invalidate_metadata();
        self.checksums = None;
        self.game_path_edit = self.ctx.config.game_path.display().to_string();
        self.metadata = self.report(|ctx| ctx.metadata());
    }

    /// Run a module operation, putting any error into the status bar
    pub fn report<T>(&mut self, f: impl FnOnce(&mut Context<'a>) -> crate::error::Result<T>) -> Option<T> {
        match f(&mut self.ctx) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("{}", e);
                self.infotext = format!("Error: {}", e);
                None
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.task.is_some()
    }

    pub fn spawn_task<F>(&mut self, label: &str, f: F)
    where
        F: FnOnce() -> crate::error::Result<String> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(f().map_err(|e| e.to_string()));
        });

        self.infotext = format!("{}...", label);
        self.task = Some(Task {
            label: label.to_string(),
            rx,
        });
    }

    fn poll_task(&mut self) {
        let Some(task) = &self.task else {
            return;
        };

        let result = match task.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(format!("{} stopped unexpectedly", task.label)),
        };

        self.task = None;
        match result {
            Ok(message) => self.infotext = message,
            Err(e) => {
                log::error!("{}", e);
                self.infotext = format!("Error: {}", e);
            }
        }
        self.refresh();
    }
}

impl eframe::App for ManagerApp<'_> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_task();
        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("menu_nav_panel").show(ctx, |ui| {
            self.display_panel_top(ui);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_busy() {
                    ui.add(egui::widgets::Spinner::new());
                }
                ui.label(RichText::new(&self.infotext).small());
            });
        });

        if self.confirm_reset {
            self.display_window_confirm_reset(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.cur_page {
            MenuPage::Config => self.display_page_config(ui),
            MenuPage::Info => self.display_page_info(ui),
            MenuPage::Patches => self.display_page_patches(ui),
            MenuPage::License => self.display_page_license(ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::interaction::testing::ScriptedInteraction;
    use crate::modules::types::testing::{config, empty_database};
    use crate::modules::license::{LICENSE_FILE, NOTICE_FILE};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_declined_reset_keeps_config() {
        let game = TempDir::new().unwrap();
        let cfg = config(game.path(), game.path());
        crate::config::save_cfg(&cfg).unwrap();

        let mut interaction = ScriptedInteraction::default();
        let mut app = ManagerApp::new(Context::new(cfg, empty_database(), &mut interaction));
        app.request_reset();
        assert!(app.confirm_reset);
        app.answer_reset(false);
        assert!(!app.confirm_reset);
        assert!(app.ctx.config.config_file_path.exists());
        drop(app);

        assert!(interaction.questions.is_empty());
    }

    #[test]
    fn test_confirmed_reset_asks_game_path_again() {
        let game = TempDir::new().unwrap();
        let new_game = TempDir::new().unwrap();
        let cfg = config(game.path(), game.path());
        crate::config::save_cfg(&cfg).unwrap();

        let new_path = new_game.path().display().to_string();
        let mut interaction = ScriptedInteraction::with_answers(&[&new_path]);
        let mut app = ManagerApp::new(Context::new(cfg, empty_database(), &mut interaction));
        app.request_reset();
        app.answer_reset(true);

        assert!(!app.confirm_reset);
        assert_eq!(app.ctx.config.game_path, new_game.path());
        assert_eq!(app.game_path_edit, new_path);
        let saved: Config = serde_yaml::from_str(&fs::read_to_string(game.path().join("config.yml")).unwrap()).unwrap();
        assert_eq!(saved.game_path, new_game.path());
    }

    #[test]
    fn test_license_text_is_cached_per_notice_setting() {
        let game = TempDir::new().unwrap();
        let licenses = TempDir::new().unwrap();
        fs::write(licenses.path().join(LICENSE_FILE), "MIT").unwrap();
        fs::write(licenses.path().join(NOTICE_FILE), "third party").unwrap();

        let mut interaction = ScriptedInteraction::default();
        let mut app = ManagerApp::new(Context::new(config(game.path(), game.path()), empty_database(), &mut interaction));
        app.license_dir = licenses.path().to_path_buf();

        assert_eq!(app.license_page_text(), "MIT");
        fs::write(licenses.path().join(LICENSE_FILE), "changed").unwrap();
        assert_eq!(app.license_page_text(), "MIT");

        app.show_notices = true;
        let all = app.license_page_text().to_string();
        assert!(all.starts_with("changed"));
        assert!(all.ends_with("third party"));
    }
}
