//! Where the diagram text comes from: a file, or standard input.

use std::io::Read;
use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new(STDIN_MARKER) => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

impl InputSource {
    pub async fn read_to_string(&self) -> Result<String, InputError> {
        match self {
            InputSource::Stdin => {
                debug!("Reading diagram from standard input");
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context(StdinSnafu)?;
                Ok(text)
            }
            InputSource::File(path) => {
                debug!("Reading diagram from {}", path.best_effort_path_display());
                let bytes = fs::read(path).await.context(ReadSnafu {
                    file_path: path.best_effort_path_display(),
                })?;
                String::from_utf8(bytes).context(EncodingSnafu {
                    file_path: path.best_effort_path_display(),
                })
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum InputError {
    #[snafu(display("Failed to read the diagram from standard input"))]
    StdinError { source: std::io::Error },
    #[snafu(display("Failed to read the diagram file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Diagram file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
}
