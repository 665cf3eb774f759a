use clap::Parser;
use std::path::PathBuf;

use crate::core::{ExcludeGlobs, FilterConfig};

#[derive(Parser, Debug)]
#[command(name = "dirtree", version)]
#[command(about = "Print an ASCII directory tree", long_about = None)]
pub struct Cli {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Descend only LEVEL directories deep (-1 for no limit)
    #[arg(
        short = 'L',
        long = "level",
        value_name = "LEVEL",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub level: i64,

    /// Do not list entries with this exact name; may be repeated
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Do not list entries matching this glob (`*`, `?`); may be repeated
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// List all entries, including hidden ones
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    pub dirs_only: bool,

    /// Do not list plain files
    #[arg(long = "no-files")]
    pub no_files: bool,

    /// List directories before files
    #[arg(long = "dirsfirst")]
    pub dirs_first: bool,

    /// Log traversal details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the parsed flags into the configuration a walk runs with.
    pub fn filter_config(&self) -> anyhow::Result<FilterConfig> {
        Ok(FilterConfig {
            exclude: ExcludeGlobs::new(&self.exclude)?,
            show_hidden: self.all,
            include_files: !self.no_files && !self.dirs_only,
            only_dirs: self.dirs_only,
            max_depth: FilterConfig::depth_limit(self.level),
            dirs_first: self.dirs_first,
            ..FilterConfig::default()
        }
        .with_ignored(self.ignore.iter().cloned()))
    }
}
