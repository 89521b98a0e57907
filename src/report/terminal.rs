use super::{DeadCodeReport, HealthBand};
use crate::analysis::DeadCodeIssue;
use crate::config::ExampleLimits;
use colored::Colorize;
use std::fmt::Write;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    limits: ExampleLimits,
}

impl TerminalReporter {
    pub fn new(limits: ExampleLimits) -> Self {
        Self { limits }
    }

    pub fn report(&self, report: &DeadCodeReport) {
        print!("{}", self.render(report));
    }

    pub fn render(&self, report: &DeadCodeReport) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule.dimmed());
        let _ = writeln!(out, "{}", "Dead code report".bold());
        let _ = writeln!(out, "{}", rule.dimmed());
        let _ = writeln!(out);

        for issue in DeadCodeIssue::ALL {
            let lines: Vec<String> = match issue {
                DeadCodeIssue::DeadFile => report.dead_files.clone(),
                _ => report
                    .entries(issue)
                    .iter()
                    .map(|entry| format!("{} {}", entry.file, entry.name.white().bold()))
                    .collect(),
            };
            self.print_section(&mut out, issue, &lines);
        }

        self.print_summary(&mut out, report);
        out
    }

    fn limit(&self, issue: DeadCodeIssue) -> usize {
        match issue {
            DeadCodeIssue::DeadFile => self.limits.dead_files,
            DeadCodeIssue::UnusedExport => self.limits.unused_exports,
            DeadCodeIssue::UnusedImport => self.limits.unused_imports,
            DeadCodeIssue::UnusedLocal => self.limits.unused_locals,
            DeadCodeIssue::UnusedType => self.limits.unused_types,
        }
    }

    fn print_section(&self, out: &mut String, issue: DeadCodeIssue, lines: &[String]) {
        if lines.is_empty() {
            let _ = writeln!(
                out,
                "{} {}: {}",
                "✓".green(),
                issue.title().green().bold(),
                format!("no {}", issue.description()).dimmed()
            );
            let _ = writeln!(out);
            return;
        }

        let _ = writeln!(
            out,
            "{} ({}): {} {}",
            issue.title().yellow().bold(),
            lines.len(),
            issue.description().dimmed(),
            format!("[{}]", issue.code()).dimmed()
        );

        let limit = self.limit(issue);
        for (i, line) in lines.iter().take(limit).enumerate() {
            let _ = writeln!(out, "  {:>3}. {}", i + 1, line.cyan());
        }
        if lines.len() > limit {
            let _ = writeln!(out, "       {}", format!("... and {} more", lines.len() - limit).dimmed());
        }
        let _ = writeln!(out);
    }

    fn print_summary(&self, out: &mut String, report: &DeadCodeReport) {
        let rule = "=".repeat(60);
        let total = report.total_issues();

        let _ = writeln!(out, "{}", rule.dimmed());
        let _ = writeln!(out, "{}", format!("Total: {} dead code issues", total).bold());
        for issue in DeadCodeIssue::ALL {
            let _ = writeln!(out, "  {:<16} {}", format!("{}:", issue.title()), report.count(issue));
        }
        let _ = writeln!(out, "{}", rule.dimmed());

        let band = report.band();
        let message = match band {
            HealthBand::Excellent => band.message().green().bold(),
            HealthBand::Good => band.message().green(),
            HealthBand::Moderate => band.message().yellow(),
            HealthBand::High => band.message().red().bold(),
        };
        let _ = writeln!(out, "{}", message);
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(ExampleLimits::default())
    }
}
