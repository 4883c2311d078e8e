//! Optional compatibility patches and tools
//!
//! Each patch is a single file dropped into the game directory. Installing
//! downloads a release archive into a temporary staging directory and only
//! moves the file into place once it was found.

mod ddrawcompat;
mod operations;
mod types;

pub use types::{Patch, ToolType};

use ddrawcompat::DDrawCompat;

use std::path::Path;

pub fn patch_for(tool: ToolType, game_path: &Path) -> Box<dyn Patch + Send> {
    match tool {
        ToolType::DDrawCompat => Box::new(DDrawCompat::new(game_path)),
    }
}

/// Every known patch, in `ToolType::ALL` order
pub fn all_patches(game_path: &Path) -> Vec<Box<dyn Patch + Send>> {
    ToolType::ALL.iter().map(|tool| patch_for(*tool, game_path)).collect()
}
