#![allow(clippy::enum_variant_names, clippy::module_inception)]

pub mod application;
pub mod cli;
pub mod config;
pub mod ext;
pub mod input;
pub mod materializer;
pub mod output;
pub mod parser;
pub mod tree;

pub use materializer::{MaterializeError, materialize};
pub use parser::parse;
pub use tree::{Forest, NodeKind, TreeNode};
