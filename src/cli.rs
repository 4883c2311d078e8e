//! Command line surface built from the module tables

use crate::error::{Error, Result};
use crate::modules::{find_module, Context, MODULES};

use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    let mut cli = Command::new("europa1400-manager")
        .about("Configure and maintain a Europa 1400 installation")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("gui")
                .long("gui")
                .action(ArgAction::SetTrue)
                .help("Start the graphical interface"),
        );

    for module in MODULES {
        let mut sub = Command::new(module.name)
            .about(module.friendly_name)
            .subcommand_required(true)
            .arg_required_else_help(true);

        for command in module.commands {
            sub = sub.subcommand(Command::new(command.cli_name()).about(command.about).args((command.args)()));
        }
        cli = cli.subcommand(sub);
    }
    cli
}

/// Run the command selected in `matches`.
///
/// Returns false when no module was selected.
pub fn dispatch(ctx: &mut Context<'_>, matches: &ArgMatches) -> Result<bool> {
    let Some((module_name, module_matches)) = matches.subcommand() else {
        return Ok(false);
    };
    let module = find_module(module_name).ok_or_else(|| Error::UnknownName {
        kind: "module",
        name: module_name.to_string(),
    })?;

    let Some((command_name, command_matches)) = module_matches.subcommand() else {
        return Ok(false);
    };
    let command = module.find_command(command_name).ok_or_else(|| Error::UnknownName {
        kind: "command",
        name: command_name.to_string(),
    })?;

    log::debug!("Running {} {}", module.name, command_name);
    (command.run)(ctx, command_matches)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::testing::ScriptedInteraction;
    use crate::modules::types::testing::{config, empty_database};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_cli_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_underscored_commands_use_hyphens() {
        let matches = build_cli()
            .try_get_matches_from(["europa1400-manager", "config", "set-game-path", "/games"])
            .unwrap();
        let (_, config) = matches.subcommand().unwrap();
        let (name, args) = config.subcommand().unwrap();
        assert_eq!(name, "set-game-path");
        assert_eq!(args.get_one::<PathBuf>("game_path"), Some(&PathBuf::from("/games")));

        assert!(build_cli()
            .try_get_matches_from(["europa1400-manager", "config", "set_game_path", "/games"])
            .is_err());
    }

    #[test]
    fn test_gui_flag_without_subcommand() {
        let matches = build_cli().try_get_matches_from(["europa1400-manager", "--gui"]).unwrap();
        assert!(matches.get_flag("gui"));
        assert!(matches.subcommand().is_none());
    }

    #[test]
    fn test_dispatch_runs_handler() {
        let dir = TempDir::new().unwrap();
        let cfg = config(dir.path(), dir.path());
        let expected = cfg.config_file_path.display().to_string();

        let mut interaction = ScriptedInteraction::default();
        let mut ctx = Context::new(cfg, empty_database(), &mut interaction);

        let matches = build_cli().try_get_matches_from(["europa1400-manager", "config", "path"]).unwrap();
        assert!(dispatch(&mut ctx, &matches).unwrap());

        let matches = build_cli().try_get_matches_from(["europa1400-manager"]).unwrap();
        assert!(!dispatch(&mut ctx, &matches).unwrap());
        drop(ctx);

        assert_eq!(interaction.told, vec![expected]);
    }
}
