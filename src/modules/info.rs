//! `info` commands

use super::types::{no_args, Context, Module, ModuleCommand};
use crate::error::{Error, Result};
use crate::metadata::GameMetadata;
use crate::util::checksum;

use std::path::{Path, PathBuf};

pub const MODULE: Module = Module {
    name: "info",
    friendly_name: "Information",
    commands: &[
        ModuleCommand {
            name: "show",
            about: "Show the detected game variant",
            args: no_args,
            run: |ctx, _| show(ctx),
        },
        ModuleCommand {
            name: "identifier",
            about: "Print the game variant identifier",
            args: no_args,
            run: |ctx, _| identifier(ctx),
        },
        ModuleCommand {
            name: "checksums",
            about: "Print SHA-256 checksums of the game executables",
            args: no_args,
            run: |ctx, _| print_checksums(ctx),
        },
        ModuleCommand {
            name: "reload",
            about: "Detect the game variant again",
            args: no_args,
            run: |ctx, _| reload(ctx),
        },
    ],
};

pub const UNAVAILABLE: &str = "unavailable";

/// Label/value rows describing the installation
pub fn summary(game_path: &Path, metadata: &GameMetadata) -> Vec<(String, String)> {
    let or_unavailable = |path: Result<PathBuf>| match path {
        Ok(path) => game_path.join(path).display().to_string(),
        Err(_) => UNAVAILABLE.to_string(),
    };

    let mut rows = vec![
        ("Game path".to_string(), game_path.display().to_string()),
        ("Executable".to_string(), or_unavailable(metadata.executable_path())),
        ("TL executable".to_string(), or_unavailable(metadata.tl_executable_path())),
    ];

    for (field, value) in metadata.fields() {
        let value = value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        rows.push((field.to_string(), value));
    }

    if let Ok(identifier) = metadata.identifier() {
        rows.push(("identifier".to_string(), identifier));
    }
    rows
}

/// Checksums of the executable and TL executable.
///
/// None while the edition is unknown. Missing files are left out.
pub fn checksums(game_path: &Path, metadata: &GameMetadata) -> Result<Option<Vec<(PathBuf, String)>>> {
    let (Ok(executable), Ok(tl_executable)) = (metadata.executable_path(), metadata.tl_executable_path()) else {
        return Ok(None);
    };

    let mut sums = Vec::new();
    for path in [game_path.join(executable), game_path.join(tl_executable)] {
        if !path.exists() {
            log::warn!("Skipping checksum of missing file {}", path.display());
            continue;
        }
        let sum = checksum(&path)?;
        sums.push((path, sum));
    }
    Ok(Some(sums))
}

fn format_rows(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show(ctx: &mut Context<'_>) -> Result<()> {
    let metadata = ctx.metadata()?;
    let rows = summary(&ctx.config.game_path, &metadata);
    ctx.interaction.tell(&format_rows(&rows))
}

/// Tells the identifier, or why it is unavailable while fields are unset
pub fn identifier(ctx: &mut Context<'_>) -> Result<()> {
    match ctx.metadata()?.identifier() {
        Ok(identifier) => ctx.interaction.tell(&identifier),
        Err(e @ Error::IncompleteMetadata(_)) => ctx.interaction.tell(&format!("Identifier unavailable: {}", e)),
        Err(e) => Err(e),
    }
}

pub fn print_checksums(ctx: &mut Context<'_>) -> Result<()> {
    let metadata = ctx.metadata()?;
    match checksums(&ctx.config.game_path, &metadata)? {
        Some(sums) => {
            let rows: Vec<_> = sums
                .into_iter()
                .map(|(path, sum)| (path.display().to_string(), sum))
                .collect();
            ctx.interaction.tell(&format_rows(&rows))
        }
        None => ctx.interaction.tell(&format!("Checksums {}: game edition unknown", UNAVAILABLE)),
    }
}

pub fn reload(ctx: &mut Context<'_>) -> Result<()> {
    ctx.reload_metadata()?;
    show(ctx)
}
