//! Markdown text rewriting: internal links and image references.
//!
//! Rewriting is textual and local. Single-level, non-greedy patterns
//! find `[label](target)` and `![alt](path)` occurrences; nothing
//! validates that a rewritten target exists, and nested brackets inside
//! a label are not matched. Both are accepted limitations: every byte
//! outside a match must pass through exactly as it came in, so no full
//! markdown parse happens here.

use crate::repo::RepoIdentity;
use crate::slug::wiki_page_name;
use crate::types::{Diagnostic, DiagnosticKind};
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Inline link: `[label](target)`. Image matches are excluded by looking
/// at the preceding byte, not the pattern, so the two regexes stay simple.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Image reference: `![alt](path)`. Alt text may be empty.
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";

/// Branch name assumed for raw URLs. Fixed, not configurable.
const DEFAULT_BRANCH: &str = "main";

#[derive(Error, Debug)]
enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("path escapes the repository root")]
    OutsideRepo,
}

/// Rewrites document text for the wiki: internal links get flat page
/// names, relative images get absolute raw URLs.
///
/// Holds what varies per run (repository identity, repository root) and
/// what is fixed but injectable for tests (raw host, branch name).
pub struct Rewriter {
    repo: Option<RepoIdentity>,
    repo_root: PathBuf,
    raw_host: String,
    branch: String,
}

impl Rewriter {
    pub fn new(repo: Option<RepoIdentity>, repo_root: &Path) -> Self {
        Self::with_raw_target(repo, repo_root, DEFAULT_RAW_HOST, DEFAULT_BRANCH)
    }

    /// Construct with an explicit raw host and branch.
    pub fn with_raw_target(
        repo: Option<RepoIdentity>,
        repo_root: &Path,
        raw_host: &str,
        branch: &str,
    ) -> Self {
        Self {
            repo,
            repo_root: repo_root.to_path_buf(),
            raw_host: raw_host.to_string(),
            branch: branch.to_string(),
        }
    }

    /// Rewrite inline links `[label](target)` to wiki page names.
    ///
    /// Left untouched: image references (preceded by `!`), external
    /// targets (`http://`, `https://`), and same-page anchors (`#…`).
    pub fn rewrite_links(&self, text: &str) -> String {
        LINK_PATTERN
            .replace_all(text, |caps: &Captures| {
                let is_image = caps
                    .get(0)
                    .is_some_and(|m| m.start() > 0 && text.as_bytes()[m.start() - 1] == b'!');
                let target = &caps[2];
                if is_image
                    || target.starts_with("http://")
                    || target.starts_with("https://")
                    || target.starts_with('#')
                {
                    return caps[0].to_string();
                }
                format!("[{}]({})", &caps[1], wiki_page_name(target))
            })
            .into_owned()
    }

    /// Rewrite image references `![alt](path)` to absolute raw URLs.
    ///
    /// Returns the rewritten text plus one diagnostic per reference that
    /// was left untouched (unknown repository identity, unresolvable
    /// path). A bad image reference never fails the document.
    pub fn rewrite_images(&self, text: &str, source_path: &Path) -> (String, Vec<Diagnostic>) {
        let mut diags = Vec::new();
        let out = IMAGE_PATTERN
            .replace_all(text, |caps: &Captures| {
                let target = &caps[2];
                if target.starts_with("http://") || target.starts_with("https://") {
                    return caps[0].to_string();
                }
                let Some(repo) = &self.repo else {
                    diags.push(Diagnostic::new(
                        DiagnosticKind::RepoIdentity,
                        format!("repository identity unknown, image left as-is: {target}"),
                    ));
                    return caps[0].to_string();
                };
                match self.raw_image_url(repo, source_path, target) {
                    Ok(url) => format!("![{}]({})", &caps[1], url),
                    Err(err) => {
                        diags.push(Diagnostic::new(
                            DiagnosticKind::ImagePath,
                            format!(
                                "could not resolve image {target} in {}: {err}",
                                source_path.display()
                            ),
                        ));
                        caps[0].to_string()
                    }
                }
            })
            .into_owned();
        (out, diags)
    }

    /// Resolve an image path relative to its document and build the raw
    /// URL from the repository-root-relative path.
    ///
    /// Canonicalization requires the file to exist, which doubles as the
    /// existence check: a missing image resolves to an error, and the
    /// reference stays as written.
    fn raw_image_url(
        &self,
        repo: &RepoIdentity,
        source_path: &Path,
        target: &str,
    ) -> Result<String, ImageError> {
        let source_dir = source_path.parent().unwrap_or(Path::new("."));
        let abs = fs::canonicalize(source_dir.join(target))?;
        let root = fs::canonicalize(&self.repo_root)?;
        let rel = abs.strip_prefix(&root).map_err(|_| ImageError::OutsideRepo)?;
        // Forward slashes regardless of host path conventions.
        let rel: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(format!(
            "{}/{}/{}/{}/{}",
            self.raw_host,
            repo.owner,
            repo.name,
            self.branch,
            rel.join("/")
        ))
    }
}
