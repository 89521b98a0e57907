use crate::analysis::{
    ReachabilityAnalyzer, RootClassifier, SymbolUsageAnalyzer, UsageContext,
};
use crate::config::Config;
use crate::discovery::{FileFinder, SourceIndex};
use crate::graph::ModuleGraphBuilder;
use crate::report::{DeadCodeReport, ReportAggregator};
use crate::warning::AnalysisWarning;
use indicatif::{ProgressBar, ProgressStyle};
use miette::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Counters describing one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_discovered: usize,
    pub files_indexed: usize,
    pub import_edges: usize,
    pub roots: usize,
    pub reachable: usize,
    pub elapsed: Duration,
}

/// Everything a run produces besides the written artifact
#[derive(Debug)]
pub struct AnalysisRun {
    /// Canonical analysis root
    pub root: PathBuf,
    pub report: DeadCodeReport,

    /// Non-fatal conditions, sorted
    pub warnings: Vec<AnalysisWarning>,
    pub stats: RunStats,
}

/// Runs discovery, extraction, reachability and usage analysis in sequence
pub struct DeadCodeEngine<'a> {
    config: &'a Config,
    show_progress: bool,
}

impl<'a> DeadCodeEngine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while declarations are extracted
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn run(&self, root: &Path) -> Result<AnalysisRun> {
        let start = Instant::now();

        // Step 1: Discover files
        info!("Discovering files...");
        let discovered = FileFinder::new(self.config).find_files(root)?;
        let mut warnings = discovered.warnings;
        info!("Found {} source files", discovered.files.len());

        // Step 2: Load contents
        let index = SourceIndex::load(&discovered.root, &discovered.files, &mut warnings);

        // Step 3: Extract declarations and build the module graph
        let progress = self.progress_bar();
        let graph = ModuleGraphBuilder::new(self.config, &index)
            .with_progress(progress.clone())
            .build(&index, &mut warnings);
        progress.finish_and_clear();

        // Step 4: Roots and reachability
        let roots = RootClassifier::new(self.config).detect(&index);
        let reachability = ReachabilityAnalyzer::new(self.config).analyze(&index, &graph, &roots);

        // Step 5: Symbol usage
        info!("Analyzing symbol usage...");
        let ctx = UsageContext::new(&index, &graph, &roots);
        let findings = SymbolUsageAnalyzer::new().analyze(&ctx);

        let report = ReportAggregator::new(&index).aggregate(&reachability, &findings);

        warnings.sort();
        warnings.dedup();
        if !warnings.is_empty() {
            warn!("{} warnings during analysis", warnings.len());
        }

        let stats = RunStats {
            files_discovered: discovered.files.len(),
            files_indexed: index.len(),
            import_edges: graph.edge_count(),
            roots: roots.len(),
            reachable: reachability.reachable.len(),
            elapsed: start.elapsed(),
        };
        info!(
            "Analysis finished in {:.2}s: {} issues",
            stats.elapsed.as_secs_f64(),
            report.total_issues()
        );

        Ok(AnalysisRun {
            root: discovered.root,
            report,
            warnings,
            stats,
        })
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} extracting",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
