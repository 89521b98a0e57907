use super::{finish, Detector};
use crate::analysis::{SymbolFinding, UsageContext};
use rayon::prelude::*;
use tracing::trace;

/// Exports whose name occurs in no other file
///
/// Root files are skipped: the framework consumes their exports.
pub struct UnusedExportDetector;

impl UnusedExportDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for UnusedExportDetector {
    fn detect(&self, ctx: &UsageContext<'_>) -> Vec<SymbolFinding> {
        let findings = ctx
            .ids()
            .into_par_iter()
            .filter(|id| !ctx.is_root(*id))
            .flat_map_iter(|id| {
                ctx.symbols(id)
                    .exports
                    .iter()
                    .filter(move |export| !ctx.referenced_outside(&export.name, id))
                    .inspect(move |export| {
                        trace!("Unused export {} in {}", export.name, ctx.file(id).relative_path)
                    })
                    .map(move |export| SymbolFinding::new(id, export.name.as_str()))
            })
            .collect();
        finish(findings)
    }
}

impl Default for UnusedExportDetector {
    fn default() -> Self {
        Self::new()
    }
}
