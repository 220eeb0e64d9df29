use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{LogLevel, PrintMode};

/// Create the folders and empty files drawn in a directory-tree diagram.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File holding the diagram; `-` or nothing reads standard input
    pub input: Option<PathBuf>,

    /// Directory the tree is created in [default: .]
    #[clap(long, short)]
    pub base: Option<PathBuf>,

    /// List what would be created without touching the filesystem
    #[clap(long, short = 'n')]
    pub dry_run: bool,

    /// Print the parsed tree before creating it
    #[clap(long, short, value_enum)]
    pub print: Option<PrintMode>,

    /// Settings file to use instead of ./treeforge.yaml
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
