//! # wiki-sync
//!
//! Converts an mkdocs-formatted documentation tree into a GitHub wiki
//! page set. The wiki is flat and the docs tree is not, so the work is
//! mostly renaming: every document gets a flat page name, every internal
//! link is rewritten to match, and relative image references become
//! absolute `raw.githubusercontent.com` URLs (wikis cannot serve files
//! out of the repository checkout).
//!
//! # Pipeline
//!
//! ```text
//! mkdocs.yml ──parse──▶ NavNode tree ──plan──▶ [PlannedPage]
//!                                                  │
//!            clean wiki/ (keep .git) ◀─────────────┤
//!            write Home.md, one page per plan      │
//!            entry, _Sidebar.md ◀──────────────────┘
//! ```
//!
//! Planning is pure and shared between `sync` (writes everything) and
//! `check` (verifies sources, writes nothing). Traversal order of the
//! navigation tree defines sidebar order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `mkdocs.yml` loading and the typed [`config::NavNode`] tree |
//! | [`slug`] | document path → flat wiki page name |
//! | [`repo`] | repository identity: `--repo` flag, env var, or git remote |
//! | [`rewrite`] | link rewriting and image URL resolution |
//! | [`page`] | per-document processing: front matter, rewrite, write |
//! | [`sync`] | planning, output-dir cleaning, orchestration |
//! | [`generate`] | `_Sidebar.md` and `Home.md` synthesis |
//! | [`types`] | shared types: `PageEntry`, `Diagnostic`, `SyncReport` |
//! | [`output`] | CLI output formatting |
//!
//! # Warn-and-Continue
//!
//! Configuration problems, missing source documents, unknown repository
//! identity, and unresolvable images are all non-fatal: each becomes a
//! [`types::Diagnostic`] collected into the run's [`types::SyncReport`],
//! the affected piece is skipped or left unmodified, and the run
//! finishes. Only unexpected I/O failures propagate as errors.

pub mod config;
pub mod generate;
pub mod output;
pub mod page;
pub mod repo;
pub mod rewrite;
pub mod slug;
pub mod sync;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
