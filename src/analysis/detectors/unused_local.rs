use super::{finish, Detector};
use crate::analysis::{SymbolFinding, UsageContext};
use rayon::prelude::*;

/// `const`/`let`/`var` bindings whose name occurs exactly once in their file
///
/// Exported bindings are left to the export detector.
pub struct UnusedLocalDetector;

impl UnusedLocalDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for UnusedLocalDetector {
    fn detect(&self, ctx: &UsageContext<'_>) -> Vec<SymbolFinding> {
        let findings = ctx
            .ids()
            .into_par_iter()
            .flat_map_iter(|id| {
                let symbols = ctx.symbols(id);
                let words = ctx.words(id);
                symbols
                    .locals
                    .iter()
                    .filter(move |name| !symbols.exports_name(name))
                    .filter(move |name| words.count(name) == 1)
                    .map(move |name| SymbolFinding::new(id, name.as_str()))
            })
            .collect();
        finish(findings)
    }
}

impl Default for UnusedLocalDetector {
    fn default() -> Self {
        Self::new()
    }
}
