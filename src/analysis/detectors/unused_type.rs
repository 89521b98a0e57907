use super::{finish, Detector};
use crate::analysis::{SymbolFinding, UsageContext};
use rayon::prelude::*;

/// Types and interfaces named only at their declaration
pub struct UnusedTypeDetector;

impl UnusedTypeDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for UnusedTypeDetector {
    fn detect(&self, ctx: &UsageContext<'_>) -> Vec<SymbolFinding> {
        let findings = ctx
            .ids()
            .into_par_iter()
            .flat_map_iter(|id| {
                let words = ctx.words(id);
                ctx.symbols(id)
                    .types
                    .iter()
                    .filter(move |name| words.count(name) == 1)
                    .filter(move |name| !ctx.referenced_outside(name, id))
                    .map(move |name| SymbolFinding::new(id, name.as_str()))
            })
            .collect();
        finish(findings)
    }
}

impl Default for UnusedTypeDetector {
    fn default() -> Self {
        Self::new()
    }
}
