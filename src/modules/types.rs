use crate::config::Config;
use crate::database::Database;
use crate::error::Result;
use crate::interaction::Interaction;
use crate::metadata::{builtin_candidate_groups, reconcile, CandidateGroup, GameMetadata};

use clap::{Arg, ArgMatches};

/// State shared by every command of one run
pub struct Context<'a> {
    pub config: Config,
    pub database: Database,
    pub interaction: &'a mut dyn Interaction,
    metadata: Option<GameMetadata>,
}

impl<'a> Context<'a> {
    pub fn new(config: Config, database: Database, interaction: &'a mut dyn Interaction) -> Self {
        Self {
            config,
            database,
            interaction,
            metadata: None,
        }
    }

    /// Detected game metadata, reconciled on first use
    pub fn metadata(&mut self) -> Result<GameMetadata> {
        match &self.metadata {
            Some(metadata) => Ok(metadata.clone()),
            None => self.reload_metadata(),
        }
    }

    /// Run the reconciliation pass again against the current game directory
    pub fn reload_metadata(&mut self) -> Result<GameMetadata> {
        let groups = self.candidate_groups()?;
        let metadata = reconcile(&groups, &self.config.game_path, &mut *self.interaction)?;
        self.metadata = Some(metadata.clone());
        Ok(metadata)
    }

    /// Forget the detected metadata, e.g. after the game path changed
    pub fn invalidate_metadata(&mut self) {
        self.metadata = None;
    }

    /// Database-driven candidates when the database has mappings, the
    /// built-in executable groups otherwise
    fn candidate_groups(&mut self) -> Result<Vec<CandidateGroup>> {
        self.database.init()?;
        match self.database.candidate_groups()? {
            Some(groups) => Ok(groups),
            None => {
                log::debug!("No executable mappings in database, using built-in candidates");
                Ok(builtin_candidate_groups())
            }
        }
    }
}

pub type Handler = fn(&mut Context<'_>, &ArgMatches) -> Result<()>;

/// One subcommand of a module
pub struct ModuleCommand {
    /// Registered name, underscores become hyphens on the command line
    pub name: &'static str,
    pub about: &'static str,
    pub args: fn() -> Vec<Arg>,
    pub run: Handler,
}

impl ModuleCommand {
    pub fn cli_name(&self) -> String {
        self.name.replace('_', "-")
    }
}

pub fn no_args() -> Vec<Arg> {
    Vec::new()
}

pub struct Module {
    pub name: &'static str,
    pub friendly_name: &'static str,
    pub commands: &'static [ModuleCommand],
}

impl Module {
    pub fn find_command(&self, cli_name: &str) -> Option<&ModuleCommand> {
        self.commands.iter().find(|c| c.cli_name() == cli_name)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::database::{DatabaseSource, Tables};
    use std::path::Path;

    /// Config for `game_path` stored at `<config_dir>/config.yml`
    pub fn config(game_path: &Path, config_dir: &Path) -> Config {
        Config::new(game_path.to_path_buf(), config_dir.join("config.yml"))
    }

    /// A database that is initialized but holds no tables
    pub fn empty_database() -> Database {
        Database::with_tables(DatabaseSource::default(), Tables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::interaction::testing::ScriptedInteraction;
    use crate::metadata::{Edition, Language};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_metadata_is_cached_until_invalidated() {
        let game = TempDir::new().unwrap();
        fs::write(game.path().join("GildeGold.exe"), b"MZ").unwrap();

        let mut interaction = ScriptedInteraction::default();
        let mut ctx = Context::new(config(game.path(), game.path()), empty_database(), &mut interaction);

        let metadata = ctx.metadata().unwrap();
        assert_eq!(metadata.edition, Some(Edition::Gold));
        assert_eq!(metadata.language, Some(Language::German));

        fs::remove_file(game.path().join("GildeGold.exe")).unwrap();
        assert_eq!(ctx.metadata().unwrap(), metadata);

        ctx.invalidate_metadata();
        assert!(ctx.metadata().unwrap().is_empty());
    }

    #[test]
    fn test_cli_name_uses_hyphens() {
        let command = ModuleCommand {
            name: "set_game_path",
            about: "",
            args: no_args,
            run: |_, _| Ok(()),
        };
        assert_eq!(command.cli_name(), "set-game-path");
    }
}
