//! Console rendering for the treecp CLI

use console::style;
use std::path::Path;
use treecp_engine::SourceReport;
use treecp_types::{CopyObserver, CopyStats, Error, ErrorKind};

/// Prints the copy transcript to stdout and failures to stderr
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    /// Create a reporter; `quiet` drops the stdout transcript but keeps errors
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl CopyObserver for ConsoleReporter {
    fn file_started(&mut self, source: &Path, destination: &Path) {
        if !self.quiet {
            println!("{}", render_transfer(source, destination));
        }
    }

    fn file_copied(&mut self, _source: &Path, _destination: &Path, _bytes: u64) {
        if !self.quiet {
            println!("\t{}", style("File copied").green());
        }
    }

    fn error(&mut self, error: &Error) {
        eprintln!("{}", render_error(error));
    }
}

/// `source >>> destination` line for one file attempt
pub fn render_transfer(source: &Path, destination: &Path) -> String {
    format!(
        "{} {} {}",
        style(source.display()).cyan(),
        style(">>>").bold(),
        style(destination.display()).cyan()
    )
}

/// One stderr line for a failure
///
/// File copy failures are indented under the transfer line they belong to.
pub fn render_error(error: &Error) -> String {
    let indent = if error.kind() == ErrorKind::FileCopy {
        "\t"
    } else {
        ""
    };
    format!("{}{}", indent, style(error).for_stderr().red())
}

/// Totals over every source of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Merged statistics
    pub stats: CopyStats,
    /// Sources whose copy recorded at least one failure
    pub failed_sources: usize,
    /// Sources removed after copying
    pub deleted_sources: usize,
    /// Sources that could not be removed
    pub delete_failures: usize,
}

impl RunSummary {
    /// Fold per-source reports into run totals
    pub fn from_reports(reports: &[SourceReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            summary.stats.merge(report.outcome.stats());
            if !report.succeeded() {
                summary.failed_sources += 1;
            }
            if report.deleted {
                summary.deleted_sources += 1;
            }
            if report.delete_error.is_some() {
                summary.delete_failures += 1;
            }
        }
        summary
    }

    /// Whether every copy went through; delete failures do not count
    pub fn succeeded(&self) -> bool {
        self.failed_sources == 0
    }

    /// Human readable one-liner
    pub fn describe(&self) -> String {
        format!(
            "{} file(s) copied ({}), {} directories created, {} empty skipped, {} error(s), \
             {} source(s) deleted, {} delete failure(s)",
            self.stats.files_copied,
            format_bytes(self.stats.bytes_copied),
            self.stats.directories_created,
            self.stats.empty_dirs_skipped,
            self.stats.errors,
            self.deleted_sources,
            self.delete_failures
        )
    }
}

/// Format bytes in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}
