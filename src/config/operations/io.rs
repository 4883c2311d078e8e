use crate::config::types::Config;
use crate::error::{Error, Result};
use crate::interaction::Interaction;
use crate::paths::default_game_path;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Read the configuration, offering to create it when the file is missing.
///
/// Declining fails with [`Error::InitDeclined`].
pub fn load_cfg(config_file_path: &Path, interaction: &mut dyn Interaction) -> Result<Config> {
    if !config_file_path.exists() {
        let init = interaction.ask_yes_no(
            &format!(
                "Configuration file at {} not found. Initialize default configuration?",
                config_file_path.display()
            ),
            true,
        )?;

        if !init {
            return Err(Error::InitDeclined {
                path: config_file_path.to_path_buf(),
            });
        }
        return init_cfg(config_file_path, None, interaction);
    }

    let file = File::open(config_file_path)?;
    let mut config: Config = serde_yaml::from_reader(BufReader::new(file))?;
    config.config_file_path = config_file_path.to_path_buf();

    log::debug!("Loaded configuration from {}", config_file_path.display());
    Ok(config)
}

pub fn save_cfg(config: &Config) -> Result<()> {
    if let Some(parent) = config.config_file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(&config.config_file_path)?;
    serde_yaml::to_writer(file, config)?;

    log::info!("Wrote configuration to {}", config.config_file_path.display());
    Ok(())
}

/// Create and write a fresh configuration.
///
/// Without `game_path` the user is asked for one until an existing directory
/// is given.
pub fn init_cfg(config_file_path: &Path, game_path: Option<PathBuf>, interaction: &mut dyn Interaction) -> Result<Config> {
    let game_path = match game_path {
        Some(path) => path,
        None => ask_game_path(interaction)?,
    };

    let config = Config::new(game_path, config_file_path.to_path_buf());
    save_cfg(&config)?;

    interaction.tell(&format!(
        "Configuration initialized with game path: {}",
        config.game_path.display()
    ))?;

    Ok(config)
}

/// Delete the configuration file and start over with a prompted game path
pub fn reset_cfg(config: &mut Config, interaction: &mut dyn Interaction) -> Result<()> {
    match fs::remove_file(&config.config_file_path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    *config = Config::new(ask_game_path(interaction)?, config.config_file_path.clone());
    save_cfg(config)
}

fn ask_game_path(interaction: &mut dyn Interaction) -> Result<PathBuf> {
    let default = default_game_path();

    loop {
        let game_path = interaction.ask_path("Please enter the path to the game directory", &default)?;
        if game_path.is_dir() {
            return Ok(game_path);
        }
        interaction.tell("Invalid game path. Please try again.")?;
    }
}
