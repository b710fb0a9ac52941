use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use trophy_case_lib::{NormalizedGame, ProgressStatus, Stats, game_link, settings};

use crate::CliError;
use crate::cli_types::ViewArgs;

use super::{format_hours, load_dashboard, progress_bar, truncate_str};

const NAME_WIDTH: usize = 44;

pub(crate) fn run_list(
    data_dir: Option<PathBuf>,
    view: ViewArgs,
    links: bool,
    json: bool,
) -> Result<(), CliError> {
    let mut dashboard = load_dashboard(data_dir, view.sample_fallback)?;
    let default_sort = settings::load_default_sort().unwrap_or_default();
    dashboard.set_criteria(view.criteria(default_sort));

    let current = dashboard.current_view();

    if json {
        println!("{}", serde_json::to_string_pretty(&current.games)?);
        return Ok(());
    }

    if current.games.is_empty() {
        log::info!("No games match the current filters.");
        return Ok(());
    }

    for game in &current.games {
        print_game(game, links);
    }
    crate::logging::blank();
    print_summary(&current.stats);

    Ok(())
}

fn print_game(game: &NormalizedGame, links: bool) {
    let progress = game.progress();
    let name = truncate_str(&game.name, NAME_WIDTH);
    let status = progress.status.label();

    let status = match progress.status {
        ProgressStatus::Complete => status.if_supports_color(Stdout, |t| t.green()).to_string(),
        ProgressStatus::AlmostThere => status.if_supports_color(Stdout, |t| t.cyan()).to_string(),
        ProgressStatus::NoAchievements => status.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        _ => status.to_string(),
    };

    log::info!(
        "{:<width$}  {:<17}  {} {:>3}%  {:>4}/{:<4}  {:>7}  {}",
        name,
        game.platform.display_name(),
        progress_bar(&progress),
        progress.percentage,
        progress.capped_earned,
        progress.total,
        format_hours(game.played_time),
        status,
        width = NAME_WIDTH,
    );

    if links {
        log::info!("    {}", game_link(game).if_supports_color(Stdout, |t| t.underline()));
    }
}

pub(crate) fn print_summary(stats: &Stats) {
    log::info!(
        "{} games | {} achievements unlocked | {} completed",
        stats.total_games.if_supports_color(Stdout, |t| t.bold()),
        stats.total_unlocked.if_supports_color(Stdout, |t| t.bold()),
        stats.fully_completed_count.if_supports_color(Stdout, |t| t.bold()),
    );
}
