use std::fmt;
use std::path::{Component, Path, PathBuf};

use derive_more::{Deref, From, IntoIterator};
use serde::{Deserialize, Serialize};

use crate::tree::{NodeKind, TreeNode};

/// Indentation used by the canonical rendering, one unit per level.
const RENDER_INDENT: &str = "  ";

/// Ordered top-level entries of a diagram, in the order they first appeared.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Deref, From, IntoIterator, Serialize, Deserialize,
)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct Forest(Vec<TreeNode>);

/// Number of folders and files in a forest, or written to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub folders: usize,
    pub files: usize,
}

impl TreeStats {
    pub fn record(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::File => self.files += 1,
            NodeKind::Folder => self.folders += 1,
        }
    }
}

impl Forest {
    pub fn parse(text: &str) -> Self {
        crate::parser::parse(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Depth-first, pre-order traversal. Each entry carries the node's path
    /// below `base` and its nesting level.
    pub fn walk(&self, base: impl AsRef<Path>) -> Walk<'_> {
        let base = base.as_ref();
        Walk {
            pending: self
                .0
                .iter()
                .rev()
                .map(|node| WalkEntry {
                    path: join_relative(base, &node.name),
                    depth: 0,
                    node,
                })
                .collect(),
        }
    }

    pub fn count(&self) -> TreeStats {
        self.walk("").fold(TreeStats::default(), |mut stats, entry| {
            stats.record(entry.node.kind);
            stats
        })
    }
}

/// Canonical form: two spaces per level, folders suffixed with `/`.
/// Parsing this output gives back an equal forest.
impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.walk("") {
            let suffix = if entry.node.is_folder() { "/" } else { "" };
            writeln!(
                f,
                "{}{}{}",
                RENDER_INDENT.repeat(entry.depth),
                entry.node.name,
                suffix
            )?;
        }
        Ok(())
    }
}

/// Joins `name` below `parent`. Root and drive prefixes are dropped, so a
/// name such as `/src` cannot replace the parent path.
fn join_relative(parent: &Path, name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .fold(parent.to_path_buf(), |path, component| path.join(component))
}

#[derive(Debug, Clone)]
pub struct WalkEntry<'a> {
    pub path: PathBuf,
    pub depth: usize,
    pub node: &'a TreeNode,
}

/// Iterator returned by [`Forest::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    pending: Vec<WalkEntry<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.pending.pop()?;
        self.pending
            .extend(entry.node.children.iter().rev().map(|child| WalkEntry {
                path: join_relative(&entry.path, &child.name),
                depth: entry.depth + 1,
                node: child,
            }));
        Some(entry)
    }
}
