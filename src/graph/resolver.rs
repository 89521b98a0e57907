use super::SpecifierOrigin;
use crate::config::Config;
use crate::discovery::{normalize_path, FileId, SourceFile, SourceIndex};
use std::path::{Path, PathBuf};

/// Outcome of resolving one specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Bare package specifier; not followed
    External,
    /// Resolved to an analyzed file
    Indexed(FileId),
    /// Resolved to a file that exists but is not analyzed (stylesheets, JSON, ...)
    OutsideIndex(PathBuf),
    /// No candidate exists on disk
    Unresolved,
}

/// Maps import specifiers onto files
///
/// Candidates are tried in a fixed order and the first hit wins: the path
/// itself, then each extension appended, then `index.<ext>` inside the path.
pub struct SpecifierResolver {
    alias_prefix: String,
    alias_root: PathBuf,
    extensions: Vec<String>,
}

impl SpecifierResolver {
    pub fn new(config: &Config, project_root: &Path) -> Self {
        Self {
            alias_prefix: config.alias.prefix.clone(),
            alias_root: normalize_path(&config.alias_root(project_root)),
            extensions: config.extensions.clone(),
        }
    }

    /// Resolve `specifier` as imported from `from`
    pub fn resolve(
        &self,
        from: &SourceFile,
        specifier: &str,
        origin: SpecifierOrigin,
        index: &SourceIndex,
    ) -> Resolution {
        let base = match origin {
            SpecifierOrigin::External => return Resolution::External,
            SpecifierOrigin::Relative => normalize_path(&from.dir().join(specifier)),
            SpecifierOrigin::Alias => {
                let rest = specifier
                    .strip_prefix(&self.alias_prefix)
                    .unwrap_or(specifier)
                    .trim_start_matches('/');
                normalize_path(&self.alias_root.join(rest))
            }
        };

        for candidate in self.candidates(&base) {
            if let Some(id) = index.id_of(&candidate) {
                return Resolution::Indexed(id);
            }
            if candidate.is_file() {
                return Resolution::OutsideIndex(candidate);
            }
        }

        Resolution::Unresolved
    }

    /// Candidate paths for `base`, in priority order
    pub fn candidates(&self, base: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(1 + self.extensions.len() * 2);
        candidates.push(base.to_path_buf());

        for ext in &self.extensions {
            let mut with_ext = base.as_os_str().to_owned();
            with_ext.push(".");
            with_ext.push(ext);
            candidates.push(PathBuf::from(with_ext));
        }

        for ext in &self.extensions {
            candidates.push(base.join(format!("index.{}", ext)));
        }

        candidates
    }
}
