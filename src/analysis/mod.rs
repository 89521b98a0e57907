//! File liveness and symbol usage analysis
//!
//! Symbol usage is decided by word-boundary textual matching over whole files.
//! Two unrelated bindings that share a name in different scopes are
//! indistinguishable, so a symbol can be reported as used when only a
//! namesake is. The reverse does not happen: a symbol whose name occurs
//! nowhere else is really unreferenced by name.

mod entry_points;
mod reachability;
mod usage;
mod word_index;
pub mod detectors;

pub use entry_points::{RootClassifier, RootSet};
pub use reachability::{ReachabilityAnalyzer, ReachabilityMode, ReachabilityResult};
pub use usage::{SymbolUsageAnalyzer, UsageContext};
pub use word_index::WordIndex;

use crate::discovery::FileId;

/// A symbol reported by one of the usage detectors
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolFinding {
    pub file: FileId,
    pub name: String,
}

impl SymbolFinding {
    pub fn new(file: FileId, name: impl Into<String>) -> Self {
        Self {
            file,
            name: name.into(),
        }
    }
}

/// The kinds of dead code the engine reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeadCodeIssue {
    /// File unreachable from every root
    DeadFile,
    /// Export never referenced outside its file
    UnusedExport,
    /// Imported name never used in the importing file
    UnusedImport,
    /// Local binding that only occurs at its declaration
    UnusedLocal,
    /// Type or interface referenced nowhere
    UnusedType,
}

impl DeadCodeIssue {
    pub const ALL: [DeadCodeIssue; 5] = [
        DeadCodeIssue::DeadFile,
        DeadCodeIssue::UnusedExport,
        DeadCodeIssue::UnusedImport,
        DeadCodeIssue::UnusedLocal,
        DeadCodeIssue::UnusedType,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DeadCodeIssue::DeadFile => "Dead files",
            DeadCodeIssue::UnusedExport => "Unused exports",
            DeadCodeIssue::UnusedImport => "Unused imports",
            DeadCodeIssue::UnusedLocal => "Unused locals",
            DeadCodeIssue::UnusedType => "Unused types",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeadCodeIssue::DeadFile => "files not reachable from any entry point",
            DeadCodeIssue::UnusedExport => "exports with no reference outside their file",
            DeadCodeIssue::UnusedImport => "imported names never used",
            DeadCodeIssue::UnusedLocal => "variables only referenced by their declaration",
            DeadCodeIssue::UnusedType => "types and interfaces never referenced",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeadCodeIssue::DeadFile => "TD001",
            DeadCodeIssue::UnusedExport => "TD002",
            DeadCodeIssue::UnusedImport => "TD003",
            DeadCodeIssue::UnusedLocal => "TD004",
            DeadCodeIssue::UnusedType => "TD005",
        }
    }
}

/// Output of the four usage detectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageFindings {
    pub unused_exports: Vec<SymbolFinding>,
    pub unused_imports: Vec<SymbolFinding>,
    pub unused_locals: Vec<SymbolFinding>,
    pub unused_types: Vec<SymbolFinding>,
}

impl UsageFindings {
    pub fn total(&self) -> usize {
        self.unused_exports.len()
            + self.unused_imports.len()
            + self.unused_locals.len()
            + self.unused_types.len()
    }
}
