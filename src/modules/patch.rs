//! `patch` commands

use super::types::{no_args, Context, Module, ModuleCommand};
use crate::error::Result;
use crate::patches::{all_patches, patch_for, Patch, ToolType};

use clap::{Arg, ArgMatches};

pub const MODULE: Module = Module {
    name: "patch",
    friendly_name: "Patches",
    commands: &[
        ModuleCommand {
            name: "list",
            about: "List available patches",
            args: no_args,
            run: |ctx, _| list(ctx),
        },
        ModuleCommand {
            name: "install",
            about: "Install a patch",
            args: patch_name_arg,
            run: |ctx, matches| install(ctx, patch_name(matches)?),
        },
        ModuleCommand {
            name: "uninstall",
            about: "Uninstall a patch",
            args: patch_name_arg,
            run: |ctx, matches| uninstall(ctx, patch_name(matches)?),
        },
    ],
};

fn patch_name_arg() -> Vec<Arg> {
    let names: Vec<_> = ToolType::ALL.iter().map(|t| t.as_str()).collect();
    vec![
        Arg::new("name")
            .value_name("NAME")
            .help(format!("One of: {}", names.join(", "))),
    ]
}

/// Optional positional patch or tool name
pub(super) fn patch_name(matches: &ArgMatches) -> Result<Option<ToolType>> {
    matches
        .get_one::<String>("name")
        .map(|name| name.parse())
        .transpose()
}

pub fn state_label(patch: &dyn Patch) -> &'static str {
    if patch.is_installed() {
        "installed"
    } else {
        "not installed"
    }
}

/// Install unless already present, returning the message for the user
pub fn install_outcome(patch: &dyn Patch) -> Result<String> {
    if patch.is_installed() {
        return Ok(format!("{} is already installed.", patch.friendly_name()));
    }

    patch.install()?;
    Ok(format!("{} has been installed successfully.", patch.friendly_name()))
}

/// Uninstall if present, returning the message for the user
pub fn uninstall_outcome(patch: &dyn Patch) -> Result<String> {
    if !patch.is_installed() {
        return Ok(format!("{} is not installed.", patch.friendly_name()));
    }

    patch.uninstall()?;
    Ok(format!("{} has been uninstalled successfully.", patch.friendly_name()))
}

pub fn list(ctx: &mut Context<'_>) -> Result<()> {
    let lines: Vec<_> = all_patches(&ctx.config.game_path)
        .iter()
        .map(|p| format!("{} ({}): {}", p.friendly_name(), p.tool_type(), state_label(p.as_ref())))
        .collect();
    ctx.interaction.tell(&lines.join("\n"))
}

pub fn install(ctx: &mut Context<'_>, name: Option<ToolType>) -> Result<()> {
    let Some(tool) = name else {
        return ctx.interaction.tell("Please specify a patch to install.");
    };

    let message = install_outcome(patch_for(tool, &ctx.config.game_path).as_ref())?;
    ctx.interaction.tell(&message)
}

pub fn uninstall(ctx: &mut Context<'_>, name: Option<ToolType>) -> Result<()> {
    let Some(tool) = name else {
        return ctx.interaction.tell("Please specify a patch to uninstall.");
    };

    let message = uninstall_outcome(patch_for(tool, &ctx.config.game_path).as_ref())?;
    ctx.interaction.tell(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::interaction::testing::ScriptedInteraction;
    use crate::modules::types::testing::{config, empty_database};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_name_asks_for_one() {
        let game = TempDir::new().unwrap();
        let mut interaction = ScriptedInteraction::default();
        let mut ctx = Context::new(config(game.path(), game.path()), empty_database(), &mut interaction);

        install(&mut ctx, None).unwrap();
        uninstall(&mut ctx, None).unwrap();
        drop(ctx);

        assert_eq!(
            interaction.told,
            vec![
                "Please specify a patch to install.".to_string(),
                "Please specify a patch to uninstall.".to_string(),
            ]
        );
    }

    #[test]
    fn test_install_when_present_is_reported() {
        let game = TempDir::new().unwrap();
        fs::write(game.path().join("ddraw.dll"), b"dll").unwrap();

        let mut interaction = ScriptedInteraction::default();
        let mut ctx = Context::new(config(game.path(), game.path()), empty_database(), &mut interaction);
        install(&mut ctx, Some(ToolType::DDrawCompat)).unwrap();
        drop(ctx);

        assert_eq!(interaction.told, vec!["DDrawCompat is already installed.".to_string()]);
    }

    #[test]
    fn test_uninstall_removes_dll_once() {
        let game = TempDir::new().unwrap();
        fs::write(game.path().join("ddraw.dll"), b"dll").unwrap();

        let mut interaction = ScriptedInteraction::default();
        let mut ctx = Context::new(config(game.path(), game.path()), empty_database(), &mut interaction);
        uninstall(&mut ctx, Some(ToolType::DDrawCompat)).unwrap();
        uninstall(&mut ctx, Some(ToolType::DDrawCompat)).unwrap();
        drop(ctx);

        assert!(!game.path().join("ddraw.dll").exists());
        assert_eq!(
            interaction.told,
            vec![
                "DDrawCompat has been uninstalled successfully.".to_string(),
                "DDrawCompat is not installed.".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_shows_state() {
        let game = TempDir::new().unwrap();
        let mut interaction = ScriptedInteraction::default();
        let mut ctx = Context::new(config(game.path(), game.path()), empty_database(), &mut interaction);
        list(&mut ctx).unwrap();
        drop(ctx);

        assert_eq!(interaction.told, vec!["DDrawCompat (ddrawcompat): not installed".to_string()]);
    }

    #[test]
    fn test_unknown_patch_name() {
        let matches = clap::Command::new("install")
            .args(patch_name_arg())
            .try_get_matches_from(["install", "dgvoodoo"])
            .unwrap();
        assert!(matches!(patch_name(&matches), Err(Error::UnknownName { kind: "patch", .. })));
    }
}
