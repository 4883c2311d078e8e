use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const ENV_CONFIG_FILE_PATH: &str = "CONFIG_FILE_PATH";
pub const DEFAULT_CONFIG_FILE_PATH: &str = "config.yml";
pub const ENV_FILE: &str = ".env";

/// Steam app id of "Europa 1400: The Guild - Gold Edition"
pub const STEAM_APP_ID: u32 = 39520;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
});

/// Load variables from `.env` in the working directory.
///
/// Variables already set in the environment win. A missing file is skipped.
pub fn load_env_file() {
    load_env_from(Path::new(ENV_FILE));
}

fn load_env_from(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Failed to load {}: {}", path.display(), e),
    }
}

/// Config file location, `CONFIG_FILE_PATH` overrides the default
pub fn config_file_path() -> PathBuf {
    match env::var(ENV_CONFIG_FILE_PATH) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE_PATH),
    }
}

/// Game directory suggested when none is configured yet.
///
/// Prefers the Steam install if one is found.
pub fn default_game_path() -> PathBuf {
    if let Some(path) = locate_steam_install() {
        return path;
    }
    PATH_HOME.join("Europa 1400")
}

fn locate_steam_install() -> Option<PathBuf> {
    let steam_dir = steamlocate::SteamDir::locate().ok()?;
    let (app, library) = steam_dir.find_app(STEAM_APP_ID).ok()??;
    let path = library.resolve_app_dir(&app);
    log::debug!("Found Steam install at {}", path.display());
    path.exists().then_some(path)
}
