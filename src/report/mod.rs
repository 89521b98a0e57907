mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::analysis::{DeadCodeIssue, ReachabilityResult, SymbolFinding, UsageFindings};
use crate::config::ExampleLimits;
use crate::discovery::SourceIndex;
use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("Failed to write report to {}", path.display())]
    #[diagnostic(
        code(tsdeadcode::report::write),
        help("check that the output directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report")]
    #[diagnostic(code(tsdeadcode::report::serialize))]
    Serialize(#[from] serde_json::Error),
}

/// A symbol finding with its file spelled as a report path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReportEntry {
    pub file: String,
    pub name: String,
}

/// The result of one run: five sorted, duplicate-free lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadCodeReport {
    pub dead_files: Vec<String>,
    pub unused_exports: Vec<ReportEntry>,
    pub unused_imports: Vec<ReportEntry>,
    pub unused_locals: Vec<ReportEntry>,
    pub unused_types: Vec<ReportEntry>,
}

impl DeadCodeReport {
    pub fn count(&self, issue: DeadCodeIssue) -> usize {
        match issue {
            DeadCodeIssue::DeadFile => self.dead_files.len(),
            DeadCodeIssue::UnusedExport => self.unused_exports.len(),
            DeadCodeIssue::UnusedImport => self.unused_imports.len(),
            DeadCodeIssue::UnusedLocal => self.unused_locals.len(),
            DeadCodeIssue::UnusedType => self.unused_types.len(),
        }
    }

    /// Symbol entries of one category; empty for dead files
    pub fn entries(&self, issue: DeadCodeIssue) -> &[ReportEntry] {
        match issue {
            DeadCodeIssue::DeadFile => &[],
            DeadCodeIssue::UnusedExport => &self.unused_exports,
            DeadCodeIssue::UnusedImport => &self.unused_imports,
            DeadCodeIssue::UnusedLocal => &self.unused_locals,
            DeadCodeIssue::UnusedType => &self.unused_types,
        }
    }

    pub fn total_issues(&self) -> usize {
        DeadCodeIssue::ALL.iter().map(|issue| self.count(*issue)).sum()
    }

    pub fn band(&self) -> HealthBand {
        HealthBand::from_total(self.total_issues())
    }

    pub fn is_empty(&self) -> bool {
        self.total_issues() == 0
    }
}

/// Qualitative amount of dead code in a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Excellent,
    Good,
    Moderate,
    High,
}

impl HealthBand {
    pub fn from_total(total: usize) -> Self {
        match total {
            0 => HealthBand::Excellent,
            1..=19 => HealthBand::Good,
            20..=49 => HealthBand::Moderate,
            _ => HealthBand::High,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent: no significant dead code found",
            HealthBand::Good => "Good: little dead code, easy to clean up",
            HealthBand::Moderate => "Moderate: a fair amount of dead code",
            HealthBand::High => "High: considerable dead code to clean up",
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HealthBand::Excellent => "excellent",
            HealthBand::Good => "good",
            HealthBand::Moderate => "moderate",
            HealthBand::High => "high",
        };
        f.write_str(name)
    }
}

/// Turns id-based analysis output into path-based report lists
pub struct ReportAggregator<'a> {
    index: &'a SourceIndex,
}

impl<'a> ReportAggregator<'a> {
    pub fn new(index: &'a SourceIndex) -> Self {
        Self { index }
    }

    pub fn aggregate(&self, reachability: &ReachabilityResult, findings: &UsageFindings) -> DeadCodeReport {
        let mut dead_files: Vec<String> = reachability
            .dead_files
            .iter()
            .map(|id| self.index.get(*id).relative_path.clone())
            .collect();
        dead_files.sort();
        dead_files.dedup();

        DeadCodeReport {
            dead_files,
            unused_exports: self.entries(&findings.unused_exports),
            unused_imports: self.entries(&findings.unused_imports),
            unused_locals: self.entries(&findings.unused_locals),
            unused_types: self.entries(&findings.unused_types),
        }
    }

    fn entries(&self, findings: &[SymbolFinding]) -> Vec<ReportEntry> {
        let mut entries: Vec<ReportEntry> = findings
            .iter()
            .map(|finding| ReportEntry {
                file: self.index.get(finding.file).relative_path.clone(),
                name: finding.name.clone(),
            })
            .collect();
        entries.sort();
        entries.dedup();
        entries
    }
}

/// Output format for the console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Prints the report to the console and writes the JSON artifact
pub struct Reporter {
    format: ReportFormat,
    output_path: PathBuf,
    limits: ExampleLimits,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: PathBuf, limits: ExampleLimits) -> Self {
        Self {
            format,
            output_path,
            limits,
        }
    }

    /// Report the findings; the JSON file is written in every format
    pub fn report(&self, report: &DeadCodeReport) -> Result<(), ReportError> {
        let json = JsonReporter::new(self.output_path.clone());
        match self.format {
            ReportFormat::Terminal => TerminalReporter::new(self.limits).report(report),
            ReportFormat::Json => println!("{}", json.render(report)?),
        }
        json.write(report)
    }
}
