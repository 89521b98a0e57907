use crate::graph::{ExportedName, ImportStatement};
use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

/// Result of scanning a source file
#[derive(Debug, Default, Clone)]
pub struct ParseResult {
    /// Imports in source order
    pub imports: Vec<ImportStatement>,

    /// Exported names, deduplicated by name
    pub exports: Vec<ExportedName>,

    /// `const|let|var` binding names, deduplicated
    pub locals: Vec<String>,

    /// `interface|type` declaration names, deduplicated
    pub types: Vec<String>,

    /// Arguments of `import()`/`require()` calls that are not string literals
    pub dynamic_imports: Vec<String>,

    /// Byte ranges of static import statements
    pub import_spans: Vec<Range<usize>>,
}

/// Trait for language-specific declaration extractors
pub trait Parser {
    /// Extract import and export declarations from a file
    ///
    /// Scanning text that is already in memory cannot fail.
    fn parse(&self, path: &Path, contents: &str) -> ParseResult;
}

/// Check that `s` is a plain JS identifier
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Push `name` unless it has been seen already, keeping first-seen order
pub fn push_unique(names: &mut Vec<String>, seen: &mut HashSet<String>, name: &str) {
    if seen.insert(name.to_string()) {
        names.push(name.to_string());
    }
}
