use std::path::{Component, Path, PathBuf};

/// Renders `path` as an absolute path for messages. Paths that do not exist
/// yet (the usual case before materializing) cannot be canonicalized, so they
/// are joined onto the working directory and normalized lexically instead.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    normalize_path(&absolute).display().to_string()
}

fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .fold(Vec::new(), |mut kept, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(kept.last(), Some(Component::Normal(_))) {
                        kept.pop();
                    }
                }
                other => kept.push(other),
            }
            kept
        })
        .iter()
        .collect()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}
