use crate::config::Config;
use crate::discovery::{FileId, SourceFile, SourceIndex};
use std::collections::HashSet;
use tracing::{debug, info};

/// Files the framework loads by naming convention
pub type RootSet = HashSet<FileId>;

/// Flags framework entry points by basename
///
/// Position in the module graph plays no part: a `page.tsx` nobody imports
/// is still a root.
pub struct RootClassifier<'a> {
    config: &'a Config,
}

impl<'a> RootClassifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Check if a file is a root
    pub fn is_root(&self, file: &SourceFile) -> bool {
        self.config.is_root_basename(file.basename())
    }

    /// Collect every root of the index
    pub fn detect(&self, index: &SourceIndex) -> RootSet {
        let roots: RootSet = index
            .iter()
            .filter(|file| self.is_root(file))
            .inspect(|file| debug!("Root: {}", file.relative_path))
            .map(|file| file.id)
            .collect();

        info!("Detected {} root files", roots.len());
        roots
    }
}
