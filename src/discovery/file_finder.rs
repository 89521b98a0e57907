use super::normalize_path;
use crate::config::Config;
use crate::warning::AnalysisWarning;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Files found under a root, plus whatever could not be walked
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// Canonical root the walk started from
    pub root: PathBuf,

    /// Sorted, duplicate-free absolute paths
    pub files: Vec<PathBuf>,

    pub warnings: Vec<AnalysisWarning>,
}

/// File finder for discovering source files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all source files under `root`
    ///
    /// Symlinks are never followed, so a link cycle cannot make the walk loop.
    pub fn find_files(&self, root: &Path) -> Result<DiscoveredFiles> {
        let root = root
            .canonicalize()
            .into_diagnostic()
            .wrap_err_with(|| format!("Cannot analyze {}", root.display()))?;

        debug!("Scanning for files in: {}", root.display());

        let config = self.config.clone();
        let respect_gitignore = self.config.respect_gitignore;

        let walker = WalkBuilder::new(&root)
            .hidden(false)
            .git_ignore(respect_gitignore)
            .git_global(respect_gitignore)
            .git_exclude(respect_gitignore)
            .ignore(respect_gitignore)
            .parents(respect_gitignore)
            .require_git(false)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && entry.file_name().to_str().is_some_and(|name| config.is_excluded_dir(name)))
            })
            .build();

        let mut files = Vec::new();
        let mut warnings = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let warning = AnalysisWarning::UnreadableDirectory {
                        path: error_path(&err),
                        detail: err.to_string(),
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            if !self.config.accepts_extension(path) {
                continue;
            }

            trace!("Found: {}", path.display());
            files.push(normalize_path(path));
        }

        files.sort();
        files.dedup();

        debug!("Found {} files", files.len());
        Ok(DiscoveredFiles {
            root,
            files,
            warnings,
        })
    }
}

/// Dig the offending path out of a walk error, if it carries one
fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errors) => errors.iter().find_map(error_path),
        _ => None,
    }
}
