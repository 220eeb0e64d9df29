use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cli::Cli;
use crate::config::{Settings, SettingsError};
use crate::ext::BestEffortPathExt;
use crate::input::InputError;
use crate::materializer::{self, MaterializeError};
use crate::output::{self, OutputError};
use crate::parser;

pub struct Application;

impl Application {
    pub async fn run(cli: Cli) -> Result<(), ApplicationError> {
        let settings = Settings::read(cli.config.as_deref())
            .await
            .context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        let runtime_config = RuntimeConfig::resolve(cli, settings);
        debug!("Resolved runtime config: {:?}", runtime_config);

        let text = runtime_config
            .input
            .read_to_string()
            .await
            .context(InputSnafu)?;
        let forest = parser::parse(&text);
        let parsed = forest.count();
        info!(
            "Parsed {} folder(s) and {} file(s)",
            parsed.folders, parsed.files
        );

        output::configure_colors();
        {
            let mut stdout = io::stdout().lock();
            output::print_forest(&mut stdout, &forest, runtime_config.print)
                .context(OutputSnafu)?;

            if runtime_config.dry_run {
                info!("Dry run, nothing will be written");
                let planned = materializer::plan(&forest, &runtime_config.base);
                output::print_plan(&mut stdout, &planned).context(OutputSnafu)?;
                return Ok(());
            }
        }

        let written = materializer::materialize(&forest, &runtime_config.base)
            .await
            .context(MaterializeSnafu)?;
        info!(
            "Created {} folder(s) and {} file(s) under {}",
            written.folders,
            written.files,
            runtime_config.base.best_effort_path_display()
        );

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Critical failure encountered while reading the diagram"))]
    InputError { source: InputError },
    #[snafu(display("Critical failure encountered while printing output"))]
    OutputError { source: OutputError },
    #[snafu(display("Critical failure encountered while creating the tree"))]
    MaterializeError { source: MaterializeError },
}
