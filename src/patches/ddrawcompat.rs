//! DDrawCompat, a DirectDraw compatibility wrapper for modern Windows

use super::operations::{install_zip_artifact, remove_artifact};
use super::types::{Patch, ToolType};
use crate::error::Result;
use crate::util::http_client;

use std::path::{Path, PathBuf};

pub const DDRAWCOMPAT_URL: &str =
    "https://github.com/narzoul/DDrawCompat/releases/download/v0.6.0/DDrawCompat-v0.6.0.zip";
pub const DDRAWCOMPAT_DLL: &str = "ddraw.dll";

pub struct DDrawCompat {
    game_path: PathBuf,
}

impl DDrawCompat {
    pub fn new(game_path: &Path) -> Self {
        Self {
            game_path: game_path.to_path_buf(),
        }
    }
}

impl Patch for DDrawCompat {
    fn tool_type(&self) -> ToolType {
        ToolType::DDrawCompat
    }

    fn friendly_name(&self) -> &'static str {
        "DDrawCompat"
    }

    fn artifact_path(&self) -> PathBuf {
        self.game_path.join(DDRAWCOMPAT_DLL)
    }

    fn install(&self) -> Result<()> {
        let client = http_client()?;
        install_zip_artifact(&client, DDRAWCOMPAT_URL, DDRAWCOMPAT_DLL, &self.artifact_path())
    }

    fn uninstall(&self) -> Result<()> {
        remove_artifact(&self.artifact_path())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_installed_state_follows_dll() {
        let game = TempDir::new().unwrap();
        let patch = DDrawCompat::new(game.path());
        assert!(!patch.is_installed());

        fs::write(game.path().join("ddraw.dll"), b"dll").unwrap();
        assert!(patch.is_installed());

        patch.uninstall().unwrap();
        assert!(!patch.is_installed());
    }

    #[test]
    fn test_uninstall_when_absent_is_ok() {
        let game = TempDir::new().unwrap();
        DDrawCompat::new(game.path()).uninstall().unwrap();
    }
}
