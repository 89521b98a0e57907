use crate::discovery::FileId;
use serde::Serialize;
use std::ops::Range;

/// Where an import specifier points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecifierOrigin {
    /// Starts with `./` or `../`
    Relative,
    /// Starts with the configured alias prefix
    Alias,
    /// Bare package name; never followed
    External,
}

/// Syntactic shape of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImportKind {
    /// `import { a, b } from '...'`
    Named,
    /// `import a from '...'`
    Default,
    /// `import a, { b } from '...'`
    DefaultAndNamed,
    /// `import * as a from '...'`
    Namespace,
    /// `import '...'`
    SideEffect,
    /// `export { a } from '...'` / `export * from '...'`
    ReExport,
    /// `import('...')` / `require('...')` with a literal argument
    Dynamic,
}

/// One import statement as written in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub specifier: String,
    pub origin: SpecifierOrigin,
    pub kind: ImportKind,

    /// Locally bound names, after alias renaming
    pub names: Vec<String>,
}

/// How a symbol is exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExportKind {
    Named,
    Default,
}

/// An exported name as extracted from one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedName {
    pub name: String,
    pub kind: ExportKind,
}

/// An exported symbol attributed to its file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportSymbol {
    pub owner: FileId,
    pub name: String,
    pub kind: ExportKind,
}

/// An import after specifier resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    pub from: FileId,
    pub specifier: String,
    pub origin: SpecifierOrigin,
    pub kind: ImportKind,

    /// `None` for external specifiers, unresolved specifiers, and files
    /// outside the index such as stylesheets
    pub resolved: Option<FileId>,

    pub names: Vec<String>,
}

/// Per-file symbol table
#[derive(Debug, Clone, Default)]
pub struct FileSymbols {
    pub imports: Vec<ImportEdge>,
    pub exports: Vec<ExportSymbol>,

    /// `const|let|var` binding names, in source order
    pub locals: Vec<String>,

    /// `interface|type` declaration names, in source order
    pub types: Vec<String>,

    /// Byte ranges of static import statements
    pub import_spans: Vec<Range<usize>>,
}

impl FileSymbols {
    pub fn exports_name(&self, name: &str) -> bool {
        self.exports.iter().any(|e| e.name == name)
    }

    /// Names bound by imports of interest (relative or aliased)
    pub fn imported_names(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .filter(|edge| edge.origin != SpecifierOrigin::External)
            .flat_map(|edge| edge.names.iter().map(String::as_str))
    }
}
