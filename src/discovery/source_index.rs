use super::display_path;
use crate::warning::AnalysisWarning;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Compact identifier of a file within one run's index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileId(u32);

impl FileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A loaded source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: FileId,

    /// Absolute, normalized path
    pub path: PathBuf,

    /// Path relative to the analysis root, `/`-separated
    pub relative_path: String,

    pub content: String,

    /// Extension without the leading dot
    pub extension: String,
}

impl SourceFile {
    pub fn basename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

/// All file contents of a run, addressed by `FileId`
#[derive(Debug, Default)]
pub struct SourceIndex {
    root: PathBuf,
    files: Vec<SourceFile>,
    by_path: HashMap<PathBuf, FileId>,
}

impl SourceIndex {
    /// Read every path into memory
    ///
    /// Reads run in parallel; ids are assigned afterwards in input order, so
    /// sorted input yields the same ids every run. Files that cannot be read
    /// are left out and reported through `warnings`.
    pub fn load(
        root: &Path,
        paths: &[PathBuf],
        warnings: &mut Vec<AnalysisWarning>,
    ) -> Self {
        let loaded: Vec<(&PathBuf, std::io::Result<String>)> = paths
            .par_iter()
            .map(|path| (path, std::fs::read_to_string(path)))
            .collect();

        let mut index = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };

        for (path, result) in loaded {
            match result {
                Ok(content) => {
                    index.insert(path.clone(), content);
                }
                Err(err) => {
                    let warning = AnalysisWarning::UnreadableFile {
                        path: PathBuf::from(display_path(path, root)),
                        detail: err.to_string(),
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        debug!("Indexed {} of {} files", index.len(), paths.len());
        index
    }

    /// Build an index from in-memory contents
    pub fn from_contents<I>(root: &Path, files: I) -> Self
    where
        I: IntoIterator<Item = (PathBuf, String)>,
    {
        let mut index = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };
        for (path, content) in files {
            index.insert(path, content);
        }
        index
    }

    fn insert(&mut self, path: PathBuf, content: String) -> FileId {
        if let Some(&id) = self.by_path.get(&path) {
            return id;
        }

        let id = FileId(self.files.len() as u32);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();
        let relative_path = display_path(&path, &self.root);

        self.by_path.insert(path.clone(), id);
        self.files.push(SourceFile {
            id,
            path,
            relative_path,
            content,
            extension,
        });
        id
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    pub fn id_of(&self, path: &Path) -> Option<FileId> {
        self.by_path.get(path).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn ids(&self) -> impl Iterator<Item = FileId> + '_ {
        self.files.iter().map(|f| f.id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
