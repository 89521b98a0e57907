use super::detectors::{
    Detector, UnusedExportDetector, UnusedImportDetector, UnusedLocalDetector, UnusedTypeDetector,
};
use super::word_index::is_plain_word;
use super::{RootSet, UsageFindings, WordIndex};
use crate::discovery::{FileId, SourceFile, SourceIndex};
use crate::graph::{FileSymbols, ModuleGraph};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info};

/// Everything the usage detectors read, built once per run
///
/// Word tables are computed up front so that the tree-wide question
/// "does this name occur in any other file" is a map lookup.
pub struct UsageContext<'a> {
    index: &'a SourceIndex,
    graph: &'a ModuleGraph,
    roots: &'a RootSet,
    words: Vec<WordIndex<'a>>,

    /// Number of files each word occurs in
    document_frequency: HashMap<&'a str, usize>,
}

impl<'a> UsageContext<'a> {
    pub fn new(index: &'a SourceIndex, graph: &'a ModuleGraph, roots: &'a RootSet) -> Self {
        let words: Vec<WordIndex<'a>> = index
            .files()
            .par_iter()
            .map(|file| WordIndex::new(&file.content))
            .collect();

        let mut document_frequency: HashMap<&'a str, usize> = HashMap::new();
        for table in &words {
            for word in table.words() {
                *document_frequency.entry(word).or_default() += 1;
            }
        }

        debug!(
            "Usage context: {} files, {} distinct words",
            words.len(),
            document_frequency.len()
        );

        Self {
            index,
            graph,
            roots,
            words,
            document_frequency,
        }
    }

    pub fn file(&self, id: FileId) -> &'a SourceFile {
        self.index.get(id)
    }

    pub fn symbols(&self, id: FileId) -> &'a FileSymbols {
        self.graph.symbols(id)
    }

    pub fn ids(&self) -> Vec<FileId> {
        self.index.ids().collect()
    }

    pub fn is_root(&self, id: FileId) -> bool {
        self.roots.contains(&id)
    }

    /// Word table of one file's full text
    pub fn words(&self, id: FileId) -> &WordIndex<'a> {
        &self.words[id.index()]
    }

    /// Number of files whose text contains `name` as a whole word
    pub fn files_containing(&self, name: &str) -> usize {
        if is_plain_word(name) {
            self.document_frequency.get(name).copied().unwrap_or(0)
        } else {
            self.words.iter().filter(|table| table.contains(name)).count()
        }
    }

    /// Whether `name` occurs in any file other than `owner`
    pub fn referenced_outside(&self, name: &str, owner: FileId) -> bool {
        let in_owner = usize::from(self.words(owner).contains(name));
        self.files_containing(name) > in_owner
    }
}

/// Runs the four usage detectors over a shared context
pub struct SymbolUsageAnalyzer {
    exports: UnusedExportDetector,
    imports: UnusedImportDetector,
    locals: UnusedLocalDetector,
    types: UnusedTypeDetector,
}

impl SymbolUsageAnalyzer {
    pub fn new() -> Self {
        Self {
            exports: UnusedExportDetector::new(),
            imports: UnusedImportDetector::new(),
            locals: UnusedLocalDetector::new(),
            types: UnusedTypeDetector::new(),
        }
    }

    pub fn analyze(&self, ctx: &UsageContext<'_>) -> UsageFindings {
        let findings = UsageFindings {
            unused_exports: self.exports.detect(ctx),
            unused_imports: self.imports.detect(ctx),
            unused_locals: self.locals.detect(ctx),
            unused_types: self.types.detect(ctx),
        };

        info!(
            "Usage analysis: {} unused exports, {} unused imports, {} unused locals, {} unused types",
            findings.unused_exports.len(),
            findings.unused_imports.len(),
            findings.unused_locals.len(),
            findings.unused_types.len()
        );

        findings
    }
}

impl Default for SymbolUsageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
