//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use trophy_case_lib::{FilterCriteria, Platform, PlatformFilter, SortKey};

#[derive(Parser)]
#[command(name = "trophy-case")]
#[command(about = "Browse achievement progress across Steam, GOG and RetroAchievements", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing steam.json, gog.json and retroachievements.json
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments that describe which games a view shows and in what order.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ViewArgs {
    /// Platform to show: all, steam, gog, retroachievements (or an alias like ra)
    #[arg(short, long)]
    pub platform: Option<PlatformFilter>,

    /// Only games with at least one of these tags (comma-separated)
    #[arg(short = 't', long = "tag", value_delimiter = ',')]
    pub include_tags: Vec<String>,

    /// Hide games with any of these tags (comma-separated)
    #[arg(short = 'x', long = "exclude-tag", value_delimiter = ',')]
    pub exclude_tags: Vec<String>,

    /// Case-insensitive search in game names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: recent, name, completion, playtime
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Use the built-in sample data when no data files are found
    #[arg(long)]
    pub sample_fallback: bool,
}

impl ViewArgs {
    /// Build the criteria for this invocation. `default_sort` applies when
    /// `--sort` is not given.
    pub fn criteria(&self, default_sort: SortKey) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_platform(self.platform.unwrap_or_default())
            .with_sort(self.sort.unwrap_or(default_sort))
            .with_search(self.search.clone().unwrap_or_default());
        for tag in &self.include_tags {
            criteria = criteria.include_tag(tag.trim());
        }
        // Applied last: a tag given both ways ends up excluded.
        for tag in &self.exclude_tags {
            criteria = criteria.exclude_tag(tag.trim());
        }
        criteria
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List games matching the given filters, with progress
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Print each game's platform link
        #[arg(long)]
        links: bool,

        /// Print the filtered list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every tag used across all games
    Tags {
        /// Show how many games carry each tag
        #[arg(long)]
        counts: bool,

        /// Use the built-in sample data when no data files are found
        #[arg(long)]
        sample_fallback: bool,
    },

    /// Show aggregate statistics for the games matching the given filters
    Stats {
        #[command(flatten)]
        view: ViewArgs,

        /// Number of most frequent tags to show
        #[arg(long, default_value_t = 10)]
        top_tags: usize,
    },

    /// Print the achievement page URL for a game
    Link {
        /// Platform name or alias
        platform: Platform,

        /// Game id (or subset id for RetroAchievements subsets)
        id: String,

        /// Parent game id, for RetroAchievements subsets
        #[arg(long)]
        parent: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and the resolved data directory
    Show,

    /// Print the settings file path
    Path,

    /// Save the default data directory
    SetDataDir {
        /// Directory holding the platform JSON files
        dir: PathBuf,
    },

    /// Forget the saved data directory
    ClearDataDir,

    /// Save the default sort order
    SetSort {
        /// recent, name, completion or playtime
        sort: SortKey,
    },
}
