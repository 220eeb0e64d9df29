use clap::ValueEnum;

/// What to write to stdout after parsing.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum PrintMode {
    #[default]
    None,
    /// The forest as pretty-printed JSON
    Json,
    /// The canonical indented listing
    Tree,
}

impl PrintMode {
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}
