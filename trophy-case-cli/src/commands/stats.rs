use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use trophy_case_lib::{platform_breakdown, settings, status_distribution, tag_frequencies};

use crate::CliError;
use crate::cli_types::ViewArgs;
use crate::logging::blank;

use super::load_dashboard;

pub(crate) fn run_stats(
    data_dir: Option<PathBuf>,
    view: ViewArgs,
    top_tags: usize,
) -> Result<(), CliError> {
    let mut dashboard = load_dashboard(data_dir, view.sample_fallback)?;
    let default_sort = settings::load_default_sort().unwrap_or_default();
    dashboard.set_criteria(view.criteria(default_sort));

    let current = dashboard.current_view();
    let stats = &current.stats;

    log::info!("{}", "Achievement Statistics".if_supports_color(Stdout, |t| t.bold()));
    if !dashboard.criteria().is_unfiltered() {
        log::info!(
            "  (filtered: {} of {} games)",
            stats.total_games,
            dashboard.games().len()
        );
    }
    blank();
    log::info!("  Games:              {:>8}", stats.total_games);
    log::info!("  Unlocked:           {:>8}", stats.total_unlocked);
    log::info!("  Achievements:       {:>8}", stats.total_achievements);
    log::info!("  Completed games:    {:>8}", stats.fully_completed_count);
    log::info!("  Average completion: {:>7.1}%", stats.average_completion);
    log::info!("  Hours played:       {:>8.1}", stats.total_playtime_hours);

    let breakdown = platform_breakdown(&current.games);
    if !breakdown.is_empty() {
        blank();
        log::info!("{}", "By platform".if_supports_color(Stdout, |t| t.bold()));
        for row in breakdown {
            log::info!(
                "  {:<18} {:>5} games  {:>6}/{:<6} unlocked  {:>4} completed",
                row.platform.display_name(),
                row.games,
                row.unlocked,
                row.total,
                row.completed,
            );
        }
    }

    blank();
    log::info!("{}", "By status".if_supports_color(Stdout, |t| t.bold()));
    for (status, count) in status_distribution(&current.games) {
        log::info!("  {:<18} {:>5}", status.label(), count);
    }

    let tags = tag_frequencies(&current.games);
    if top_tags > 0 && !tags.is_empty() {
        blank();
        log::info!("{}", "Top tags".if_supports_color(Stdout, |t| t.bold()));
        for (tag, count) in tags.into_iter().take(top_tags) {
            log::info!("  {:<18} {:>5}", tag, count);
        }
    }

    Ok(())
}
