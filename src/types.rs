//! Shared types used across the sync pipeline.

use serde::Serialize;

/// One entry produced by the navigation walk.
///
/// Entries are recorded in traversal order, and that order is the sidebar
/// order. Duplicates are allowed — the same document may appear under two
/// sections. An empty title means the page is written but not listed in
/// the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    /// Sidebar label. Empty for untitled direct references.
    pub title: String,
    /// Flat wiki page name, also the output filename stem.
    pub page_name: String,
}

/// Category of a non-fatal warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// mkdocs.yml was unreadable, malformed, or had an unusable entry;
    /// defaults were used where possible.
    Config,
    /// A navigation entry references a source file that does not exist.
    MissingSource,
    /// Repository identity could not be determined.
    RepoIdentity,
    /// A single image reference could not be resolved.
    ImagePath,
}

/// A non-fatal warning collected during a run.
///
/// Nothing in this taxonomy aborts a sync. Diagnostics accumulate into
/// the [`SyncReport`] so callers and tests can assert on them instead of
/// scraping stderr.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of a sync or check run, serializable for `--report`.
#[derive(Debug, Serialize)]
pub struct SyncReport {
    /// Sidebar entries in traversal order.
    pub pages: Vec<PageEntry>,
    /// Files written into the wiki directory (empty for a check run).
    pub written: Vec<String>,
    /// Non-fatal warnings accumulated across the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl SyncReport {
    /// Diagnostics of one kind, for targeted assertions.
    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.kind == kind).collect()
    }
}
