use super::RootSet;
use crate::config::Config;
use crate::discovery::{FileId, SourceIndex};
use crate::graph::ModuleGraph;
use petgraph::visit::Dfs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// How liveness propagates from the roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReachabilityMode {
    /// Everything transitively imported from a root is live
    #[default]
    Transitive,

    /// A file is live if it is a root or anything at all imports it.
    /// Kept for comparison with older reports; it misses dead clusters whose
    /// files only import each other.
    OneHop,
}

impl fmt::Display for ReachabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReachabilityMode::Transitive => write!(f, "transitive"),
            ReachabilityMode::OneHop => write!(f, "one-hop"),
        }
    }
}

/// Live and dead files of one run
#[derive(Debug, Clone, Default)]
pub struct ReachabilityResult {
    pub reachable: HashSet<FileId>,

    /// Unreachable files minus exempted ones, in `FileId` order
    pub dead_files: Vec<FileId>,
}

/// Analyzer for finding unreachable files via graph traversal
pub struct ReachabilityAnalyzer {
    mode: ReachabilityMode,
    exemptions: Vec<String>,
}

impl ReachabilityAnalyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: config.reachability,
            exemptions: config.dead_file_exemptions.clone(),
        }
    }

    pub fn with_mode(mut self, mode: ReachabilityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Find all dead files and also return the reachable set
    pub fn analyze(&self, index: &SourceIndex, graph: &ModuleGraph, roots: &RootSet) -> ReachabilityResult {
        let reachable = self.find_reachable(graph, roots);

        let dead_files: Vec<FileId> = index
            .iter()
            .filter(|file| !reachable.contains(&file.id))
            .filter(|file| {
                let exempt = self
                    .exemptions
                    .iter()
                    .any(|marker| file.relative_path.contains(marker.as_str()));
                if exempt {
                    debug!("Unreachable but exempt: {}", file.relative_path);
                }
                !exempt
            })
            .map(|file| file.id)
            .collect();

        info!(
            "Reachability ({}): {} reachable, {} dead, {} total",
            self.mode,
            reachable.len(),
            dead_files.len(),
            index.len()
        );

        ReachabilityResult {
            reachable,
            dead_files,
        }
    }

    /// Find all files reachable from the roots
    pub fn find_reachable(&self, graph: &ModuleGraph, roots: &RootSet) -> HashSet<FileId> {
        match self.mode {
            ReachabilityMode::Transitive => self.transitive_closure(graph, roots),
            ReachabilityMode::OneHop => self.one_hop(graph, roots),
        }
    }

    /// DFS from every root; the shared discovered set handles cycles and
    /// files reachable from several roots
    fn transitive_closure(&self, graph: &ModuleGraph, roots: &RootSet) -> HashSet<FileId> {
        let inner = graph.inner();
        let mut reachable = HashSet::new();
        let mut dfs = Dfs::empty(inner);

        for root in roots {
            let Some(start_idx) = graph.node_index(*root) else {
                continue;
            };
            dfs.move_to(start_idx);
            while let Some(node_idx) = dfs.next(inner) {
                reachable.insert(inner[node_idx]);
            }
        }

        reachable
    }

    fn one_hop(&self, graph: &ModuleGraph, roots: &RootSet) -> HashSet<FileId> {
        let mut reachable: HashSet<FileId> = roots.clone();
        reachable.extend(
            graph
                .inner()
                .node_indices()
                .map(|idx| graph.inner()[idx])
                .filter(|id| graph.has_importer(*id)),
        );
        reachable
    }
}
