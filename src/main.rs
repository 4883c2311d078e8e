mod app;
mod cli;
mod config;
mod database;
mod error;
mod interaction;
mod metadata;
mod modules;
mod patches;
mod paths;
mod util;

use crate::config::load_cfg;
use crate::database::{Database, DatabaseSource};
use crate::error::{Error, Result};
use crate::interaction::{ConsoleInteraction, GraphicalInteraction};
use crate::modules::Context;
use crate::paths::config_file_path;

use clap::ArgMatches;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    paths::load_env_file();

    let matches = cli::build_cli().get_matches();

    let result = match matches.get_flag("gui") {
        true => run_gui(),
        false => run_cli(&matches),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::InitDeclined { path }) => {
            log::info!("No configuration at {}, exiting", path.display());
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run_cli(matches: &ArgMatches) -> Result<()> {
    let mut interaction = ConsoleInteraction::stdio();
    let config = load_cfg(&config_file_path(), &mut interaction)?;
    let database = Database::new(DatabaseSource::from_env());
    let mut ctx = Context::new(config, database, &mut interaction);

    if !cli::dispatch(&mut ctx, matches)? {
        cli::build_cli().print_help()?;
    }
    Ok(())
}

fn run_gui() -> Result<()> {
    let mut interaction = GraphicalInteraction::new(app::APP_TITLE);
    let config = load_cfg(&config_file_path(), &mut interaction)?;
    let database = Database::new(DatabaseSource::from_env());

    app::run(Context::new(config, database, &mut interaction))
}
