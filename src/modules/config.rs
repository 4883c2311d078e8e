//! `config` commands

use super::types::{no_args, Context, Module, ModuleCommand};
use crate::config::{init_cfg, reset_cfg, save_cfg};
use crate::error::Result;

use clap::{value_parser, Arg, ArgMatches};
use std::path::PathBuf;

pub const MODULE: Module = Module {
    name: "config",
    friendly_name: "Configuration",
    commands: &[
        ModuleCommand {
            name: "init",
            about: "Initialize the configuration",
            args: init_args,
            run: run_init,
        },
        ModuleCommand {
            name: "show",
            about: "Show the current configuration",
            args: no_args,
            run: |ctx, _| show(ctx),
        },
        ModuleCommand {
            name: "reset",
            about: "Delete the configuration and set it up again",
            args: no_args,
            run: |ctx, _| reset(ctx),
        },
        ModuleCommand {
            name: "set_game_path",
            about: "Change the game directory",
            args: set_game_path_args,
            run: run_set_game_path,
        },
        ModuleCommand {
            name: "path",
            about: "Print the location of the configuration file",
            args: no_args,
            run: |ctx, _| path(ctx),
        },
    ],
};

fn init_args() -> Vec<Arg> {
    vec![
        Arg::new("game_path")
            .long("game-path")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .help("Game directory, asked for when omitted"),
    ]
}

fn set_game_path_args() -> Vec<Arg> {
    vec![
        Arg::new("game_path")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(true),
    ]
}

fn run_init(ctx: &mut Context<'_>, matches: &ArgMatches) -> Result<()> {
    init(ctx, matches.get_one::<PathBuf>("game_path").cloned())
}

fn run_set_game_path(ctx: &mut Context<'_>, matches: &ArgMatches) -> Result<()> {
    match matches.get_one::<PathBuf>("game_path") {
        Some(game_path) => set_game_path(ctx, game_path.clone()),
        None => ctx.interaction.tell("Please specify a game path."),
    }
}

pub fn init(ctx: &mut Context<'_>, game_path: Option<PathBuf>) -> Result<()> {
    let config_file_path = ctx.config.config_file_path.clone();
    ctx.config = init_cfg(&config_file_path, game_path, &mut *ctx.interaction)?;
    ctx.invalidate_metadata();
    Ok(())
}

pub fn show(ctx: &mut Context<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(&ctx.config)?;
    ctx.interaction.tell(&format!("Current configuration: {}", json))
}

pub fn reset(ctx: &mut Context<'_>) -> Result<()> {
    reset_cfg(&mut ctx.config, &mut *ctx.interaction)?;
    ctx.invalidate_metadata();
    ctx.interaction.tell(&format!(
        "Configuration reset with game path: {}",
        ctx.config.game_path.display()
    ))
}

pub fn set_game_path(ctx: &mut Context<'_>, game_path: PathBuf) -> Result<()> {
    if !game_path.is_dir() {
        return ctx.interaction.tell("Invalid game path. Please try again.");
    }

    ctx.config.game_path = game_path;
    save_cfg(&ctx.config)?;
    ctx.invalidate_metadata();
    ctx.interaction
        .tell(&format!("Game path set to: {}", ctx.config.game_path.display()))
}

pub fn path(ctx: &mut Context<'_>) -> Result<()> {
    let path = ctx.config.config_file_path.display().to_string();
    ctx.interaction.tell(&path)
}
