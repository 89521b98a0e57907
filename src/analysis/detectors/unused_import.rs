use super::{finish, Detector};
use crate::analysis::{SymbolFinding, UsageContext, WordIndex};
use rayon::prelude::*;
use std::collections::HashSet;
use std::ops::Range;

/// Imported names that never occur in the importing file outside its
/// import statements
pub struct UnusedImportDetector;

impl UnusedImportDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for UnusedImportDetector {
    fn detect(&self, ctx: &UsageContext<'_>) -> Vec<SymbolFinding> {
        let findings = ctx
            .ids()
            .into_par_iter()
            .flat_map_iter(|id| {
                let symbols = ctx.symbols(id);
                let mut names: Vec<&str> = symbols.imported_names().collect();
                if names.is_empty() {
                    return Vec::new();
                }
                let mut seen = HashSet::new();
                names.retain(|name| seen.insert(*name));

                let body = strip_spans(&ctx.file(id).content, &symbols.import_spans);
                let words = WordIndex::new(&body);
                names
                    .into_iter()
                    .filter(|name| !words.contains(name))
                    .map(|name| SymbolFinding::new(id, name))
                    .collect::<Vec<_>>()
            })
            .collect();
        finish(findings)
    }
}

impl Default for UnusedImportDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Text with every import statement blanked out
///
/// Statements become a single space so the words around them stay apart.
fn strip_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor {
            cursor = cursor.max(span.end);
            continue;
        }
        out.push_str(&text[cursor..span.start]);
        out.push(' ');
        cursor = span.end;
    }
    out.push_str(&text[cursor.min(text.len())..]);
    out
}
