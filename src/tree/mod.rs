//! In-memory model of a parsed directory diagram.
//!
//! A [`Forest`] is the ordered list of top-level entries; every entry is a
//! [`TreeNode`] that owns its children. Files never have children.

mod forest;
mod node;

pub use forest::{Forest, TreeStats, Walk, WalkEntry};
pub use node::{NodeKind, TreeNode};
