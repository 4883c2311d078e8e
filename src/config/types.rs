use crate::patches::ToolType;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted manager configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Game installation directory
    pub game_path: PathBuf,
    /// Tools installed by `tool install` without a name
    #[serde(default)]
    pub tools: Vec<ToolType>,
    /// Where this configuration is read from and written to
    #[serde(skip)]
    pub config_file_path: PathBuf,
}

impl Config {
    pub fn new(game_path: PathBuf, config_file_path: PathBuf) -> Self {
        Self {
            game_path,
            tools: Vec::new(),
            config_file_path,
        }
    }
}
