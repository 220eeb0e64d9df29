use std::path::PathBuf;

use crate::application::data::PrintMode;
use crate::cli::Cli;
use crate::config::Settings;
use crate::input::InputSource;

const DEFAULT_BASE: &str = ".";

/// Effective options for one run: command-line flags win over the settings
/// file, which wins over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub input: InputSource,
    pub base: PathBuf,
    pub dry_run: bool,
    pub print: PrintMode,
}

impl RuntimeConfig {
    pub fn resolve(cli: Cli, settings: Settings) -> Self {
        Self {
            input: cli.input.into(),
            base: cli
                .base
                .or(settings.base)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE)),
            dry_run: cli.dry_run || settings.dry_run.unwrap_or(false),
            print: cli.print.or(settings.print).unwrap_or_default(),
        }
    }
}
