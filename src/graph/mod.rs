mod builder;
mod resolver;
mod symbol;

pub use builder::ModuleGraphBuilder;
pub use resolver::{Resolution, SpecifierResolver};
pub use symbol::{
    ExportKind, ExportSymbol, ExportedName, FileSymbols, ImportEdge, ImportKind,
    ImportStatement, SpecifierOrigin,
};

use crate::discovery::FileId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// The module graph: one node per indexed file, one edge per resolved import
///
/// Edges point from the importing file to the imported file. Every edge
/// target is a file of the `SourceIndex` the graph was built from.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    /// The underlying directed graph
    inner: DiGraph<FileId, ImportKind>,

    /// Map from FileId to node index
    node_map: HashMap<FileId, NodeIndex>,

    /// Symbol tables, indexed by FileId
    symbols: Vec<FileSymbols>,
}

impl ModuleGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file node together with its symbol table
    ///
    /// Files must be added in `FileId` order.
    pub fn add_file(&mut self, id: FileId, symbols: FileSymbols) {
        debug_assert_eq!(id.index(), self.symbols.len(), "files added out of order");
        let node_idx = self.inner.add_node(id);
        self.node_map.insert(id, node_idx);
        self.symbols.push(symbols);
    }

    /// Add an import edge; repeated imports of the same file collapse into one edge
    pub fn add_import(&mut self, from: FileId, to: FileId, kind: ImportKind) {
        if let (Some(&from_idx), Some(&to_idx)) = (self.node_map.get(&from), self.node_map.get(&to)) {
            if self.inner.find_edge(from_idx, to_idx).is_none() {
                self.inner.add_edge(from_idx, to_idx, kind);
            }
        }
    }

    /// Symbol table of a file
    pub fn symbols(&self, id: FileId) -> &FileSymbols {
        &self.symbols[id.index()]
    }

    /// Files directly imported by `id`
    pub fn imports_of(&self, id: FileId) -> Vec<FileId> {
        let Some(&node_idx) = self.node_map.get(&id) else {
            return Vec::new();
        };

        let mut files: Vec<FileId> = self
            .inner
            .neighbors_directed(node_idx, Direction::Outgoing)
            .map(|idx| self.inner[idx])
            .collect();
        files.sort();
        files
    }

    /// Check if any file imports `id`
    pub fn has_importer(&self, id: FileId) -> bool {
        self.node_map
            .get(&id)
            .is_some_and(|&idx| self.inner.neighbors_directed(idx, Direction::Incoming).next().is_some())
    }

    /// Get the number of files
    pub fn file_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Get the number of import edges
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Get the underlying petgraph for traversals
    pub fn inner(&self) -> &DiGraph<FileId, ImportKind> {
        &self.inner
    }

    /// Get node index for a file
    pub fn node_index(&self, id: FileId) -> Option<NodeIndex> {
        self.node_map.get(&id).copied()
    }
}
