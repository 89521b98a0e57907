//! Per-symbol dead code detectors
//!
//! Each detector walks the files in parallel and returns its findings sorted
//! by file and name, so merged output never depends on thread scheduling.

mod unused_export;
mod unused_import;
mod unused_local;
mod unused_type;

pub use unused_export::UnusedExportDetector;
pub use unused_import::UnusedImportDetector;
pub use unused_local::UnusedLocalDetector;
pub use unused_type::UnusedTypeDetector;

use super::{SymbolFinding, UsageContext};

/// Trait for dead code detectors
pub trait Detector {
    /// Run the detector over the context and return found issues
    fn detect(&self, ctx: &UsageContext<'_>) -> Vec<SymbolFinding>;
}

/// Sort and dedupe findings collected from parallel workers
fn finish(mut findings: Vec<SymbolFinding>) -> Vec<SymbolFinding> {
    findings.sort();
    findings.dedup();
    findings
}
