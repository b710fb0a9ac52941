//! Logger setup. All user-facing output goes through `log::info!`, so the
//! default format prints bare messages for info and prefixes other levels.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{Level, LevelFilter};

use crate::CliError;

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, overrides the flags above.
    builder.parse_default_env();

    if verbose {
        builder.format_timestamp_millis().format_target(true);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    if let Some(path) = logfile {
        let file = File::create(path)?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Print an empty line through the logger.
pub(crate) fn blank() {
    log::info!("");
}
