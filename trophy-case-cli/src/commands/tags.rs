use std::path::PathBuf;

use trophy_case_lib::tag_frequencies;

use crate::CliError;

use super::load_dashboard;

pub(crate) fn run_tags(
    data_dir: Option<PathBuf>,
    counts: bool,
    sample_fallback: bool,
) -> Result<(), CliError> {
    let dashboard = load_dashboard(data_dir, sample_fallback)?;

    if dashboard.tags().is_empty() {
        log::info!("No tags found.");
        return Ok(());
    }

    if counts {
        for (tag, count) in tag_frequencies(dashboard.games()) {
            log::info!("{:>5}  {}", count, tag);
        }
    } else {
        for tag in dashboard.tags() {
            log::info!("{}", tag);
        }
    }

    Ok(())
}
