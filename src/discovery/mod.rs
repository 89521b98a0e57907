mod file_finder;
mod source_index;

pub use file_finder::{DiscoveredFiles, FileFinder};
pub use source_index::{FileId, SourceFile, SourceIndex};

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path, folding `.` and `..` without touching the disk
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Path relative to `root` with `/` separators, as shown in reports
pub fn display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
