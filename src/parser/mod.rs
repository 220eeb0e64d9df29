//! Text-to-tree parser for pasted directory diagrams.
//!
//! Accepts box-drawing output (`├──`, `└──`, `│`), the ASCII variants
//! produced by `tree --charset ascii` and `tree /A`, plain space or tab
//! indentation, and any mix of them. Each line is measured on its own (see
//! [`indent`]); the only thing shared across lines is whether the diagram is
//! box-drawn, which decides how wide a run of bare spaces is. A measured line
//! is placed under the most recent open folder one level up. The parser never fails: indentation deeper than the open folder chain
//! allows is clamped to the deepest valid level.

mod indent;

use indent::IndentStyle;
use tracing::{debug, trace};

use crate::tree::{Forest, NodeKind, TreeNode};

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

/// Builds a node from the text left after the indentation was removed.
///
/// A trailing separator marks a folder. Without one, a name with no `.` is
/// taken to be a folder as well. Returns `None` for decoration-only text.
fn entry(text: &str) -> Option<TreeNode> {
    let text = text.trim();
    let trimmed = text.trim_end_matches(is_separator).trim_end();
    let explicit_folder = trimmed.len() != text.len();
    // names are always relative to their parent, never rooted
    let name = trimmed.trim_start_matches(is_separator).trim_start();
    if name.is_empty() {
        return None;
    }

    if explicit_folder || !name.contains('.') {
        Some(TreeNode::folder(name, Vec::new()))
    } else {
        Some(TreeNode::file(name))
    }
}

/// Open folders, outermost first. A folder is attached to its parent only
/// once it is closed, so siblings keep their line order.
#[derive(Debug, Default)]
struct ForestBuilder {
    roots: Vec<TreeNode>,
    open: Vec<TreeNode>,
}

impl ForestBuilder {
    fn place(&mut self, claimed_level: usize, node: TreeNode, line_number: usize) {
        let level = if claimed_level > self.open.len() {
            debug!(
                "Line {line_number}: '{}' is indented to level {claimed_level} but only {} folder(s) are open, clamping",
                node.name,
                self.open.len()
            );
            self.open.len()
        } else {
            claimed_level
        };

        self.close_until(level);
        trace!(
            "Line {line_number}: {} '{}' at level {level}",
            node.kind.as_str(),
            node.name
        );

        match node.kind {
            NodeKind::Folder => self.open.push(node),
            NodeKind::File => self.attach(node),
        }
    }

    fn close_until(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(folder) = self.open.pop() {
                self.attach(folder);
            }
        }
    }

    fn attach(&mut self, node: TreeNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> Forest {
        self.close_until(0);
        Forest::from(self.roots)
    }
}

/// Parses a directory diagram into a forest. Blank lines are skipped.
pub fn parse(text: &str) -> Forest {
    let text = textwrap::dedent(&text.replace("\r\n", "\n"));
    let style = IndentStyle::detect(&text);
    debug!("Reading indentation as {:?}", style);
    let mut builder = ForestBuilder::default();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let indent = indent::measure(line, style);
        match entry(indent.rest) {
            Some(node) => builder.place(indent.level, node, idx + 1),
            None => trace!("Line {}: decoration only, skipping", idx + 1),
        }
    }

    let forest = builder.finish();
    let stats = forest.count();
    debug!(
        "Parsed {} folder(s) and {} file(s) into {} top-level entries",
        stats.folders,
        stats.files,
        forest.len()
    );
    forest
}
