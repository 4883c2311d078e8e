//! `license` commands

use super::types::{Context, Module, ModuleCommand};
use crate::error::Result;

use clap::{Arg, ArgAction};
use std::fs;
use std::path::Path;

pub const LICENSE_FILE: &str = "LICENSE.md";
pub const NOTICE_FILE: &str = "NOTICE.md";

pub const MODULE: Module = Module {
    name: "license",
    friendly_name: "License",
    commands: &[ModuleCommand {
        name: "show",
        about: "Show the license",
        args: show_args,
        run: |ctx, matches| show(ctx, Path::new("."), matches.get_flag("all")),
    }],
};

fn show_args() -> Vec<Arg> {
    vec![
        Arg::new("all")
            .long("all")
            .action(ArgAction::SetTrue)
            .help("Also show third-party notices"),
    ]
}

/// License text, or the notice explaining what is missing
pub fn license_text(dir: &Path, all: bool) -> String {
    let license = fs::read_to_string(dir.join(LICENSE_FILE)).ok();

    if !all {
        return license.unwrap_or_else(|| "License file not found.".to_string());
    }

    match (license, fs::read_to_string(dir.join(NOTICE_FILE)).ok()) {
        (Some(license), Some(notice)) => format!("{}\n\n{}\n\n{}", license, "=".repeat(40), notice),
        _ => "License or notice file not found.".to_string(),
    }
}

pub fn show(ctx: &mut Context<'_>, dir: &Path, all: bool) -> Result<()> {
    ctx.interaction.tell(&license_text(dir, all))
}
