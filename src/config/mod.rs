//! Optional `treeforge.yaml` defaults, overridden by command-line flags.

mod settings;

pub use settings::{SETTINGS_FILE_NAME, Settings, SettingsError};
