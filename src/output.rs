//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Pages
//! 001 Home → index.md
//! 002 Guide Intro → guide-intro.md
//! 003 (untitled) → about.md
//!
//! Wrote 5 files
//!
//! Warnings
//!     docs/ghost.md does not exist, skipping
//! ```

use crate::types::SyncReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the run report: pages in traversal order, write count, warnings.
pub fn format_report(report: &SyncReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    for (i, entry) in report.pages.iter().enumerate() {
        let title = if entry.title.is_empty() {
            "(untitled)"
        } else {
            entry.title.as_str()
        };
        lines.push(format!(
            "{} {} → {}.md",
            format_index(i + 1),
            title,
            entry.page_name
        ));
    }
    if report.pages.is_empty() {
        lines.push("    (none)".to_string());
    }

    if !report.written.is_empty() {
        lines.push(String::new());
        lines.push(format!("Wrote {} files", report.written.len()));
    }

    if !report.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for diag in &report.diagnostics {
            lines.push(format!("    {}", diag.message));
        }
    }

    lines
}

/// Print the run report to stdout.
pub fn print_report(report: &SyncReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Diagnostic, DiagnosticKind, PageEntry};

    fn report() -> SyncReport {
        SyncReport {
            pages: vec![
                PageEntry {
                    title: "Home".to_string(),
                    page_name: "index".to_string(),
                },
                PageEntry {
                    title: String::new(),
                    page_name: "about".to_string(),
                },
            ],
            written: vec!["Home.md".to_string(), "index.md".to_string()],
            diagnostics: vec![Diagnostic::new(
                DiagnosticKind::MissingSource,
                "docs/ghost.md does not exist, skipping",
            )],
        }
    }

    #[test]
    fn pages_listed_with_indices() {
        let lines = format_report(&report());
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 Home → index.md");
        assert_eq!(lines[2], "002 (untitled) → about.md");
    }

    #[test]
    fn write_count_shown() {
        let lines = format_report(&report());
        assert!(lines.contains(&"Wrote 2 files".to_string()));
    }

    #[test]
    fn warnings_section_lists_diagnostics() {
        let lines = format_report(&report());
        let warn_at = lines.iter().position(|l| l == "Warnings").unwrap();
        assert_eq!(lines[warn_at + 1], "    docs/ghost.md does not exist, skipping");
    }

    #[test]
    fn empty_report_shows_none_marker() {
        let empty = SyncReport {
            pages: vec![],
            written: vec![],
            diagnostics: vec![],
        };
        let lines = format_report(&empty);
        assert_eq!(lines, ["Pages", "    (none)"]);
    }
}
