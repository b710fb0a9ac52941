//! trophy-case CLI
//!
//! Command-line dashboard for achievement progress across Steam, GOG and
//! RetroAchievements game lists.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { view, links, json } => {
            commands::list::run_list(cli.data_dir, view, links, json)
        }
        Commands::Tags {
            counts,
            sample_fallback,
        } => commands::tags::run_tags(cli.data_dir, counts, sample_fallback),
        Commands::Stats { view, top_tags } => {
            commands::stats::run_stats(cli.data_dir, view, top_tags)
        }
        Commands::Link {
            platform,
            id,
            parent,
        } => {
            commands::link::run_link(platform, &id, parent.as_deref());
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(cli.data_dir);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDataDir { dir } => commands::config::run_config_set_data_dir(&dir),
            ConfigAction::ClearDataDir => commands::config::run_config_clear_data_dir(),
            ConfigAction::SetSort { sort } => commands::config::run_config_set_sort(sort),
        },
    }
}
