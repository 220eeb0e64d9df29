use std::borrow::Cow;
use std::path::{Path, PathBuf};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::data::PrintMode;
use crate::ext::BestEffortPathExt;

pub const SETTINGS_FILE_NAME: &str = "treeforge.yaml";

/// Values read from the settings file. `None` means the file left the key
/// unset and the built-in default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub base: Option<PathBuf>,
    pub dry_run: Option<bool>,
    pub print: Option<PrintMode>,
}

impl Settings {
    /// Reads `explicit` when given; otherwise looks for [`SETTINGS_FILE_NAME`]
    /// in the working directory and falls back to defaults when it is absent.
    pub async fn read(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::from_path(path).await,
            None => {
                let path = Path::new(SETTINGS_FILE_NAME);
                if !path.exists() {
                    info!("No {SETTINGS_FILE_NAME} found, using defaults");
                    return Ok(Self::default());
                }
                Self::from_path(path).await
            }
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, SettingsError> {
        debug!("Reading settings file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        let contents = String::from_utf8_lossy(&bytes);
        Self::try_from(&*contents)
    }

    fn from_mapping(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        for (key, value) in top_level {
            let Yaml::Value(Scalar::String(key)) = key else {
                debug!("Skipping non-string settings key: {:?}", key);
                continue;
            };

            match &**key {
                "base" => {
                    let base = value.as_str().context(InvalidValueSnafu {
                        key: "base",
                        expected: "a path string",
                    })?;
                    settings.base = Some(PathBuf::from(base));
                }
                "dry_run" => match value {
                    Yaml::Value(Scalar::Boolean(flag)) => settings.dry_run = Some(*flag),
                    _ => {
                        return InvalidValueSnafu {
                            key: "dry_run",
                            expected: "true or false",
                        }
                        .fail();
                    }
                },
                "print" => {
                    let mode = value
                        .as_str()
                        .and_then(PrintMode::from_name)
                        .context(InvalidValueSnafu {
                            key: "print",
                            expected: "one of none, json, tree",
                        })?;
                    settings.print = Some(mode);
                }
                other => debug!("Ignoring unknown settings key '{}'", other),
            }
        }

        Ok(settings)
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };
        if matches!(document, Yaml::Value(Scalar::Null)) {
            return Ok(Self::default());
        }

        let top_level = document
            .as_mapping()
            .ok_or(SettingsError::TopLevelNotMap)?;
        Self::from_mapping(top_level)
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Settings key '{}' should be {}", key, expected))]
    InvalidValue {
        key: Cow<'static, str>,
        expected: &'static str,
    },
}
