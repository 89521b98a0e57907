use super::{DeadCodeReport, HealthBand, ReportError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: PathBuf,
}

impl JsonReporter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// The full document as pretty-printed JSON
    pub fn render(&self, report: &DeadCodeReport) -> Result<String, ReportError> {
        let document = JsonReport {
            report,
            summary: JsonSummary::from_report(report),
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }

    /// Replace the output file with the rendered report
    ///
    /// The document goes to a temporary file next to the target which is
    /// then renamed over it, so a failed run never leaves a truncated file.
    pub fn write(&self, report: &DeadCodeReport) -> Result<(), ReportError> {
        let json = self.render(report)?;
        let write_error = |source: std::io::Error| ReportError::Write {
            path: self.output_path.clone(),
            source,
        };

        let dir = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(json.as_bytes()).map_err(write_error)?;
        file.flush().map_err(write_error)?;
        file.persist(&self.output_path)
            .map_err(|err| write_error(err.error))?;

        info!("Report written to: {}", self.output_path.display());
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a DeadCodeReport,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total_issues: usize,
    band: HealthBand,
    dead_files: usize,
    unused_exports: usize,
    unused_imports: usize,
    unused_locals: usize,
    unused_types: usize,
}

impl JsonSummary {
    fn from_report(report: &DeadCodeReport) -> Self {
        Self {
            total_issues: report.total_issues(),
            band: report.band(),
            dead_files: report.dead_files.len(),
            unused_exports: report.unused_exports.len(),
            unused_imports: report.unused_imports.len(),
            unused_locals: report.unused_locals.len(),
            unused_types: report.unused_types.len(),
        }
    }
}
