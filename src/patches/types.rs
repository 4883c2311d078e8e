//! Patch type definitions

use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Known patches and tools, by config id
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolType {
    #[serde(rename = "ddrawcompat")]
    DDrawCompat,
}

impl ToolType {
    pub const ALL: &'static [ToolType] = &[ToolType::DDrawCompat];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::DDrawCompat => "ddrawcompat",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownName {
                kind: "patch",
                name: s.to_string(),
            })
    }
}

/// A file-based patch for the game directory
pub trait Patch {
    fn tool_type(&self) -> ToolType;

    fn friendly_name(&self) -> &'static str;

    /// Installed file inside the game directory
    fn artifact_path(&self) -> PathBuf;

    fn is_installed(&self) -> bool {
        self.artifact_path().exists()
    }

    fn install(&self) -> Result<()>;

    fn uninstall(&self) -> Result<()>;
}
