//! tsdeadcode - Fast dead code detection for TypeScript/JavaScript projects
//!
//! This library scans a source tree, rebuilds an approximate module graph
//! from textual import/export declarations and reports dead files together
//! with unused exports, imports, locals and types.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all .ts, .tsx, .js and .jsx files
//! 2. **Extraction** - Pull imports, exports, locals and types out with regexes
//! 3. **Graph Building** - Resolve specifiers into a file-level module graph
//! 4. **Root Detection** - Identify framework entry points by file name
//! 5. **Reachability Analysis** - Find files no root can reach
//! 6. **Usage Analysis** - Word-boundary matching for unused symbols
//! 7. **Reporting** - Terminal summary and a JSON artifact

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod graph;
pub mod parser;
pub mod report;
pub mod warning;

pub use analysis::{ReachabilityAnalyzer, ReachabilityMode, RootClassifier, SymbolUsageAnalyzer};
pub use config::Config;
pub use discovery::{FileFinder, SourceIndex};
pub use engine::{AnalysisRun, DeadCodeEngine, RunStats};
pub use graph::{ModuleGraph, ModuleGraphBuilder};
pub use report::{DeadCodeReport, HealthBand, ReportFormat, Reporter};
pub use warning::AnalysisWarning;
