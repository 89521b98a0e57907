//! Non-fatal conditions collected during a run
//!
//! None of these abort the analysis. They are logged as they happen and
//! returned with the run outcome so callers can audit analysis blind spots.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A recoverable problem encountered while analyzing the tree
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnalysisWarning {
    /// A directory could not be listed; its contents were skipped
    UnreadableDirectory { path: Option<PathBuf>, detail: String },

    /// A file could not be read as UTF-8 text; it was left out of the index
    UnreadableFile { path: PathBuf, detail: String },

    /// A relative or aliased specifier matched no file on disk
    UnresolvedImport { file: PathBuf, specifier: String },

    /// A dynamic import or require whose argument is not a string literal
    UnresolvableDynamicImport { file: PathBuf, expression: String },
}

impl AnalysisWarning {
    pub fn category(&self) -> &'static str {
        match self {
            AnalysisWarning::UnreadableDirectory { .. } => "unreadable-directory",
            AnalysisWarning::UnreadableFile { .. } => "unreadable-file",
            AnalysisWarning::UnresolvedImport { .. } => "unresolved-import",
            AnalysisWarning::UnresolvableDynamicImport { .. } => "dynamic-import",
        }
    }
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisWarning::UnreadableDirectory { path: Some(path), detail } => {
                write!(f, "Skipping unreadable directory {}: {}", path.display(), detail)
            }
            AnalysisWarning::UnreadableDirectory { path: None, detail } => {
                write!(f, "Skipping unreadable directory: {}", detail)
            }
            AnalysisWarning::UnreadableFile { path, detail } => {
                write!(f, "Could not read {}: {}", path.display(), detail)
            }
            AnalysisWarning::UnresolvedImport { file, specifier } => {
                write!(f, "Unresolved import '{}' in {}", specifier, file.display())
            }
            AnalysisWarning::UnresolvableDynamicImport { file, expression } => {
                write!(
                    f,
                    "Dynamic import with computed specifier `{}` in {} cannot be followed",
                    expression,
                    file.display()
                )
            }
        }
    }
}
