//! subprompt - terminal subtitle teleprompter

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use subprompt::cli::{Cli, Commands, ConfigCommands};
use subprompt::theme::current_theme;
use subprompt::{logging, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Command failed");
            eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    if let Ok(state_dir) = config.state_dir() {
        logging::init(&state_dir, cli.verbose);
    }
    // Config::load runs before the logger is installed
    if let Ok(path) = Config::config_path() {
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loaded config file");
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
        }
    }
    tracing::debug!(command = ?cli.command, "Starting");
    commands::apply_theme(&config, None);

    match cli.command {
        Commands::Play { file } => commands::play::handle(file.as_deref(), &config),
        Commands::Show { file, at, html } => commands::show::handle(&file, at, html),
        Commands::Info { file } => commands::info::handle(&file),
        Commands::Reset { yes } => commands::reset::handle(yes, &config),
        Commands::Theme { color } => commands::theme::handle(color.as_deref(), &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
