use serde::{Deserialize, Serialize};

/// Whether an entry becomes a directory or an empty file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        }
    }
}

/// A single file or folder of the diagram.
///
/// Serializes to `{ "name": .., "type": "file" | "folder", "children": [..] }`,
/// with `children` always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children,
        }
    }

    /// Appends a child to a folder. Files stay childless.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        if self.is_folder() {
            self.children.push(child);
        }
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}
