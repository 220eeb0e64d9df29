//! Writes a parsed forest to disk.
//!
//! The walk is depth-first in forest order and strictly sequential. Folders
//! are created idempotently, files are created empty and truncate anything
//! already at their path. The first failure stops the walk; whatever was
//! created before it stays on disk.

use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::{debug, trace};

use crate::ext::BestEffortPathExt;
use crate::tree::{Forest, NodeKind, TreeStats};

/// One entry a dry run would create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// Lists, in creation order, every path [`materialize`] would write.
pub fn plan(forest: &Forest, base: impl AsRef<Path>) -> Vec<PlannedEntry> {
    forest
        .walk(base)
        .map(|entry| PlannedEntry {
            path: entry.path,
            kind: entry.node.kind,
        })
        .collect()
}

/// Creates every folder and file of `forest` below `base`, creating `base`
/// itself first if needed.
pub async fn materialize(
    forest: &Forest,
    base: impl AsRef<Path>,
) -> Result<TreeStats, MaterializeError> {
    let base = base.as_ref();
    debug!("Ensuring base directory {}", base.best_effort_path_display());
    fs::create_dir_all(base).await.context(BaseDirSnafu {
        path: base.to_path_buf(),
    })?;

    let mut written = TreeStats::default();
    for entry in forest.walk(base) {
        match entry.node.kind {
            NodeKind::Folder => {
                trace!("Creating folder {}", entry.path.display());
                fs::create_dir_all(&entry.path)
                    .await
                    .context(CreateDirSnafu {
                        path: entry.path.clone(),
                    })?;
            }
            NodeKind::File => {
                trace!("Creating file {}", entry.path.display());
                fs::File::create(&entry.path)
                    .await
                    .context(CreateFileSnafu {
                        path: entry.path.clone(),
                    })?;
            }
        }
        written.record(entry.node.kind);
    }

    debug!(
        "Wrote {} folder(s) and {} file(s) under {}",
        written.folders,
        written.files,
        base.best_effort_path_display()
    );
    Ok(written)
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Failed to create base directory {}", path.best_effort_path_display()))]
    BaseDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    CreateFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Forest {
        Forest::from(vec![TreeNode::folder(
            "test-folder",
            vec![TreeNode::file("test-file.txt")],
        )])
    }

    #[compio::test]
    async fn creates_folders_and_empty_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let written = materialize(&sample(), temp_dir.path()).await.unwrap();

        let folder = temp_dir.path().join("test-folder");
        let file = folder.join("test-file.txt");
        assert!(folder.is_dir());
        assert!(file.is_file());
        assert_eq!(std::fs::metadata(&file).unwrap().len(), 0);
        assert_eq!(
            written,
            TreeStats {
                folders: 1,
                files: 1
            }
        );
    }

    #[compio::test]
    async fn creates_missing_base_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path().join("nested").join("base");

        materialize(&sample(), &base).await.unwrap();

        assert!(base.join("test-folder").join("test-file.txt").is_file());
    }

    #[compio::test]
    async fn empty_forest_only_ensures_base() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path().join("out");

        let written = materialize(&Forest::default(), &base).await.unwrap();

        assert!(base.is_dir());
        assert_eq!(std::fs::read_dir(&base).unwrap().count(), 0);
        assert_eq!(written, TreeStats::default());
    }

    #[compio::test]
    async fn folders_are_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let forest = Forest::from(vec![TreeNode::folder(
            "a",
            vec![TreeNode::folder("b", vec![])],
        )]);

        materialize(&forest, temp_dir.path()).await.unwrap();
        materialize(&forest, temp_dir.path()).await.unwrap();

        assert!(temp_dir.path().join("a").join("b").is_dir());
    }

    #[compio::test]
    async fn existing_files_are_truncated() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let folder = temp_dir.path().join("test-folder");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("test-file.txt"), "previous content").unwrap();

        materialize(&sample(), temp_dir.path()).await.unwrap();

        assert_eq!(
            std::fs::metadata(folder.join("test-file.txt")).unwrap().len(),
            0
        );
    }

    #[compio::test]
    async fn file_in_the_way_of_a_folder_fails_with_its_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(temp_dir.path().join("test-folder"), "").unwrap();

        let result = materialize(&sample(), temp_dir.path()).await;

        match result {
            Err(MaterializeError::CreateDirError { path, .. }) => {
                assert_eq!(path, temp_dir.path().join("test-folder"));
            }
            other => panic!("Expected CreateDirError, got {other:?}"),
        }
    }

    #[compio::test]
    async fn earlier_siblings_survive_a_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(temp_dir.path().join("blocked"), "").unwrap();
        let forest = Forest::from(vec![
            TreeNode::file("first.txt"),
            TreeNode::folder("blocked", vec![TreeNode::file("inner.txt")]),
            TreeNode::file("never.txt"),
        ]);

        let result = materialize(&forest, temp_dir.path()).await;

        assert!(result.is_err());
        assert!(temp_dir.path().join("first.txt").is_file());
        assert!(!temp_dir.path().join("never.txt").exists());
    }

    #[compio::test]
    async fn rooted_names_are_created_under_base() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let forest = crate::parser::parse("/src/\n  /main.rs\n");

        materialize(&forest, temp_dir.path()).await.unwrap();

        assert!(temp_dir.path().join("src").is_dir());
        assert!(temp_dir.path().join("src").join("main.rs").is_file());
    }

    #[test]
    fn plan_keeps_rooted_names_under_base() {
        let forest = crate::parser::parse("/escape_dir/\n  x.txt\n");

        let planned = plan(&forest, "/out/base");

        assert_eq!(
            planned,
            vec![
                PlannedEntry {
                    path: PathBuf::from("/out/base/escape_dir"),
                    kind: NodeKind::Folder,
                },
                PlannedEntry {
                    path: PathBuf::from("/out/base/escape_dir/x.txt"),
                    kind: NodeKind::File,
                },
            ]
        );
    }

    #[test]
    fn plan_lists_paths_in_creation_order() {
        let planned = plan(&sample(), "/out");
        assert_eq!(
            planned,
            vec![
                PlannedEntry {
                    path: PathBuf::from("/out/test-folder"),
                    kind: NodeKind::Folder,
                },
                PlannedEntry {
                    path: PathBuf::from("/out/test-folder/test-file.txt"),
                    kind: NodeKind::File,
                },
            ]
        );
    }

    #[test]
    fn plan_does_not_touch_disk() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path().join("untouched");

        let planned = plan(&sample(), &base);

        assert_eq!(planned.len(), 2);
        assert!(!base.exists());
    }
}
