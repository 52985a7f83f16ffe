//! srp command-line entry point

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use srp::cli::{Cli, Commands, ConfigCommands};
use srp::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    logging::init(cli.verbose, &config.logging.level);
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Info { files, json } => commands::info::handle(&files, json, &config.playback),
        Commands::Frames {
            file,
            from,
            to,
            json,
        } => commands::frames::handle(&file, from, to, json),
        Commands::Pose {
            file,
            at,
            axis,
            json,
        } => commands::pose::handle(
            &file,
            at,
            axis.unwrap_or(config.world.axis),
            json,
            &config,
        ),
        Commands::Play {
            file,
            headless,
            fast,
            axis,
        } => commands::play::handle(
            &file,
            headless,
            fast,
            axis.unwrap_or(config.world.axis),
            &config,
        ),
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "srp", &mut io::stdout());
            Ok(())
        }
    }
}
