//! The sync pipeline: plan, clean, write, summarize.
//!
//! A run has two phases. Planning is pure: the navigation tree (or the
//! fallback docs scan) becomes an ordered list of [`PlannedPage`]s, each
//! pairing a sidebar title and wiki page name with its source file.
//! Execution then cleans the wiki directory, processes every planned
//! page, and writes the home page and sidebar. `check` stops after
//! planning and only verifies that sources exist, so it shares the exact
//! traversal the real sync uses.
//!
//! Nothing in the diagnostic taxonomy aborts a run; the only fatal errors
//! are unexpected I/O failures (an unwritable wiki directory, a source
//! that exists but cannot be read).

use crate::config::{self, ConfigSource, NavNode, SiteConfig};
use crate::generate;
use crate::page;
use crate::repo::{self, RepoIdentity};
use crate::rewrite::Rewriter;
use crate::slug::wiki_page_name;
use crate::types::{Diagnostic, DiagnosticKind, PageEntry, SyncReport};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a run needs, injected rather than read from globals.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Repository root: config file paths, git metadata, and image paths
    /// are all resolved against this.
    pub repo_root: PathBuf,
    /// Path to `mkdocs.yml`.
    pub config_path: PathBuf,
    /// Wiki checkout to write into.
    pub wiki_dir: PathBuf,
    /// Explicit `owner/name` override for image URLs.
    pub repo: Option<String>,
}

impl SyncOptions {
    /// Conventional layout under a repository root: `mkdocs.yml` at the
    /// top, `wiki/` as the output checkout.
    pub fn for_root(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            config_path: repo_root.join("mkdocs.yml"),
            wiki_dir: repo_root.join("wiki"),
            repo: None,
        }
    }
}

/// A page the walker intends to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    /// Sidebar title; empty for untitled references.
    pub title: String,
    /// Wiki page name (output filename stem).
    pub page_name: String,
    /// Source document path.
    pub source: PathBuf,
}

impl PlannedPage {
    fn entry(&self) -> PageEntry {
        PageEntry {
            title: self.title.clone(),
            page_name: self.page_name.clone(),
        }
    }
}

/// Run a full sync: clean the wiki directory, write the home page, every
/// navigation page, and the sidebar.
pub fn sync(opts: &SyncOptions) -> Result<SyncReport, SyncError> {
    let (config, docs_dir, plan, mut diags) = load_plan(opts);

    // Resolved once; the rewriter reuses it for every image in the run.
    let repo = resolve_repo(opts);
    let rewriter = Rewriter::new(repo, &opts.repo_root);

    clean_wiki_dir(&opts.wiki_dir)?;

    let mut written = Vec::new();

    let home = generate::home_page(&config, &docs_dir, &opts.repo_root, &rewriter)?;
    fs::write(opts.wiki_dir.join("Home.md"), home)?;
    written.push("Home.md".to_string());

    let mut pages = Vec::new();
    for planned in &plan {
        let dest = opts.wiki_dir.join(format!("{}.md", planned.page_name));
        if page::process_document(&planned.source, &dest, &rewriter, &mut diags)? {
            written.push(format!("{}.md", planned.page_name));
        }
        // Recorded even when the source was missing, so the sidebar
        // still carries the entry.
        pages.push(planned.entry());
    }

    let sidebar = generate::sidebar(&config, &pages);
    fs::write(opts.wiki_dir.join("_Sidebar.md"), sidebar)?;
    written.push("_Sidebar.md".to_string());

    Ok(SyncReport {
        pages,
        written,
        diagnostics: diags,
    })
}

/// Plan-only run: parse configuration and navigation, verify that every
/// planned source exists, write nothing.
pub fn check(opts: &SyncOptions) -> SyncReport {
    let (_, _, plan, mut diags) = load_plan(opts);
    let mut pages = Vec::new();
    for planned in &plan {
        if !planned.source.exists() {
            diags.push(Diagnostic::new(
                DiagnosticKind::MissingSource,
                format!("{} does not exist", planned.source.display()),
            ));
        }
        pages.push(planned.entry());
    }
    SyncReport {
        pages,
        written: Vec::new(),
        diagnostics: diags,
    }
}

fn resolve_repo(opts: &SyncOptions) -> Option<RepoIdentity> {
    repo::resolve(opts.repo.as_deref(), &opts.repo_root)
}

/// Load configuration and produce the ordered page plan.
///
/// A parsed config without a `nav` key plans zero pages; the docs-tree
/// scan only kicks in when the config file itself was missing or
/// unreadable.
fn load_plan(opts: &SyncOptions) -> (SiteConfig, PathBuf, Vec<PlannedPage>, Vec<Diagnostic>) {
    let (config, source, mut diags) = config::load(&opts.config_path);
    let docs_dir = config::resolve_docs_dir(&config, &opts.repo_root, &mut diags);

    let plan = match (&config.nav, source) {
        (Some(values), _) => {
            let (nodes, nav_diags) = config::parse_nav(values);
            diags.extend(nav_diags);
            plan_nav(&nodes, &docs_dir)
        }
        (None, ConfigSource::File) => Vec::new(),
        (None, ConfigSource::Defaults) => plan_fallback(&docs_dir, &mut diags),
    };
    (config, docs_dir, plan, diags)
}

/// Depth-first plan of a navigation tree, preserving input order.
///
/// A page inside a section gets the nearest enclosing section title as a
/// prefix: `"{section} {title}"`. Untitled pages stay untitled, whatever
/// section they sit in.
fn plan_nav(nodes: &[NavNode], docs_dir: &Path) -> Vec<PlannedPage> {
    let mut plan = Vec::new();
    plan_nav_nodes(nodes, None, docs_dir, &mut plan);
    plan
}

fn plan_nav_nodes(
    nodes: &[NavNode],
    section: Option<&str>,
    docs_dir: &Path,
    plan: &mut Vec<PlannedPage>,
) {
    for node in nodes {
        match node {
            NavNode::Page { title, path } => {
                let full_title = match (section, title) {
                    (Some(prefix), Some(title)) => format!("{prefix} {title}"),
                    (None, Some(title)) => title.clone(),
                    (_, None) => String::new(),
                };
                plan.push(PlannedPage {
                    title: full_title,
                    page_name: wiki_page_name(path),
                    source: docs_dir.join(path),
                });
            }
            NavNode::Section { title, children } => {
                plan_nav_nodes(children, Some(title), docs_dir, plan);
            }
        }
    }
}

/// Fallback when no config file could be read: every markdown file under
/// the docs directory becomes a top-level page titled by its wiki name.
fn plan_fallback(docs_dir: &Path, diags: &mut Vec<Diagnostic>) -> Vec<PlannedPage> {
    if !docs_dir.is_dir() {
        diags.push(Diagnostic::new(
            DiagnosticKind::Config,
            format!("docs directory {} does not exist", docs_dir.display()),
        ));
        return Vec::new();
    }
    let mut plan = Vec::new();
    for entry in WalkDir::new(docs_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let is_md = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if !is_md {
            continue;
        }
        let rel = entry.path().strip_prefix(docs_dir).unwrap_or(entry.path());
        let page_name = wiki_page_name(&rel.to_string_lossy());
        plan.push(PlannedPage {
            title: page_name.clone(),
            page_name,
            source: entry.path().to_path_buf(),
        });
    }
    plan
}

/// Clear the wiki directory, preserving its `.git` subdirectory.
fn clean_wiki_dir(wiki_dir: &Path) -> io::Result<()> {
    if !wiki_dir.exists() {
        return fs::create_dir_all(wiki_dir);
    }
    for entry in fs::read_dir(wiki_dir)? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
