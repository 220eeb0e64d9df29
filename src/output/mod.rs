//! Stdout rendering of a parsed forest and of dry-run plans.

use std::io::{self, Write};

use colored::Colorize;
use snafu::{ResultExt, Snafu};
use supports_color::Stream;

use crate::application::data::PrintMode;
use crate::materializer::PlannedEntry;
use crate::tree::{Forest, NodeKind};

const TREE_INDENT: &str = "  ";

/// Enables colors only when stdout is a terminal that supports them.
pub fn configure_colors() {
    colored::control::set_override(supports_color::on(Stream::Stdout).is_some());
}

pub fn print_forest(
    out: &mut impl Write,
    forest: &Forest,
    mode: PrintMode,
) -> Result<(), OutputError> {
    match mode {
        PrintMode::None => Ok(()),
        PrintMode::Json => {
            let json = forest.to_json_pretty().context(SerializeSnafu)?;
            writeln!(out, "{json}").context(WriteSnafu)
        }
        PrintMode::Tree => {
            for entry in forest.walk("") {
                let indent = TREE_INDENT.repeat(entry.depth);
                let written = match entry.node.kind {
                    NodeKind::Folder => {
                        let name = format!("{}/", entry.node.name);
                        writeln!(out, "{indent}{}", name.blue().bold())
                    }
                    NodeKind::File => writeln!(out, "{indent}{}", entry.node.name),
                };
                written.context(WriteSnafu)?;
            }
            Ok(())
        }
    }
}

pub fn print_plan(out: &mut impl Write, planned: &[PlannedEntry]) -> Result<(), OutputError> {
    for entry in planned {
        let label = match entry.kind {
            NodeKind::Folder => "mkdir".green(),
            NodeKind::File => "touch".yellow(),
        };
        writeln!(out, "{label} {}", entry.path.display()).context(WriteSnafu)?;
    }
    Ok(())
}

#[derive(Debug, Snafu)]
pub enum OutputError {
    #[snafu(display("Failed to serialize the parsed tree"))]
    SerializeError { source: serde_json::Error },
    #[snafu(display("Failed to write to standard output"))]
    WriteError { source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;
    use std::path::PathBuf;

    fn sample() -> Forest {
        Forest::from(vec![TreeNode::folder(
            "src",
            vec![TreeNode::file("main.rs")],
        )])
    }

    fn render(forest: &Forest, mode: PrintMode) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_forest(&mut out, forest, mode).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn none_prints_nothing() {
        assert_eq!(render(&sample(), PrintMode::None), "");
    }

    #[test]
    fn tree_matches_canonical_rendering() {
        let forest = sample();
        assert_eq!(render(&forest, PrintMode::Tree), forest.to_string());
    }

    #[test]
    fn json_reads_back() {
        let forest = sample();
        let printed = render(&forest, PrintMode::Json);
        let decoded: Forest = serde_json::from_str(&printed).unwrap();
        assert_eq!(decoded, forest);
    }

    #[test]
    fn plan_lists_one_line_per_entry() {
        colored::control::set_override(false);
        let planned = vec![
            PlannedEntry {
                path: PathBuf::from("out/src"),
                kind: NodeKind::Folder,
            },
            PlannedEntry {
                path: PathBuf::from("out/src/main.rs"),
                kind: NodeKind::File,
            },
        ];
        let mut out = Vec::new();

        print_plan(&mut out, &planned).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let expected = format!(
            "mkdir {}\ntouch {}\n",
            PathBuf::from("out/src").display(),
            PathBuf::from("out/src/main.rs").display()
        );
        assert_eq!(printed, expected);
    }
}
