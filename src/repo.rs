//! Repository identity resolution.
//!
//! Wiki pages cannot serve images out of the repository checkout, so
//! relative image references are rewritten to absolute
//! `raw.githubusercontent.com` URLs — which requires knowing the
//! `owner/name` of the repository. Resolution order:
//!
//! 1. an explicit `--repo` override,
//! 2. the `GITHUB_REPOSITORY` environment variable (set by Actions),
//! 3. the URL of the `origin` remote, queried from `git` once per run.
//!
//! The git query runs on a worker thread with a short timeout so a hung
//! `git` (a credential prompt, a dead filesystem) abandons the lookup
//! instead of stalling the sync. An unknown identity is never fatal; the
//! rewriter degrades to leaving image references untouched.

use std::path::Path;
use std::process::Command;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long to wait for `git` before abandoning the remote lookup.
const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable carrying `owner/name` directly.
const REPO_ENV_VAR: &str = "GITHUB_REPOSITORY";

/// The `owner/name` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub owner: String,
    pub name: String,
}

impl RepoIdentity {
    /// Parse an `owner/name` string (the `--repo` flag and env var shape).
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().trim_matches('/').splitn(2, '/');
        let owner = parts.next()?.trim().to_string();
        let name = parts.next()?.trim().to_string();
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { owner, name })
    }

    /// Derive identity from a git remote URL.
    ///
    /// Three shapes are recognized:
    /// - `https://github.com/owner/name(.git)`
    /// - `http://github.com/owner/name(.git)`
    /// - `git@github.com:owner/name(.git)`
    ///
    /// Anything else (GitLab, bare paths, ssh:// forms) yields `None`.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();
        let rest = url
            .strip_prefix("https://github.com/")
            .or_else(|| url.strip_prefix("http://github.com/"))
            .or_else(|| url.strip_prefix("git@github.com:"))?;
        let rest = rest.trim_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);
        Self::parse(rest)
    }

    /// `owner/name` as a single string.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Resolve the repository identity for a run.
///
/// Checked once and cached by the caller for the lifetime of the run.
pub fn resolve(override_repo: Option<&str>, repo_root: &Path) -> Option<RepoIdentity> {
    let env_repo = std::env::var(REPO_ENV_VAR).ok();
    resolve_with_env(override_repo, env_repo.as_deref(), repo_root)
}

/// [`resolve`] with the environment value passed in, for tests.
pub fn resolve_with_env(
    override_repo: Option<&str>,
    env_repo: Option<&str>,
    repo_root: &Path,
) -> Option<RepoIdentity> {
    if let Some(raw) = override_repo {
        return RepoIdentity::parse(raw);
    }
    if let Some(id) = env_repo.and_then(RepoIdentity::parse) {
        return Some(id);
    }
    let url = remote_origin_url(repo_root, GIT_TIMEOUT)?;
    RepoIdentity::from_remote_url(&url)
}

/// Query `git config --get remote.origin.url`, abandoning after `timeout`.
fn remote_origin_url(repo_root: &Path, timeout: Duration) -> Option<String> {
    let (tx, rx) = mpsc::channel();
    let root = repo_root.to_path_buf();
    thread::spawn(move || {
        let out = Command::new("git")
            .args(["config", "--get", "remote.origin.url"])
            .current_dir(&root)
            .output();
        // The receiver may have timed out and gone away.
        let _ = tx.send(out);
    });
    match rx.recv_timeout(timeout) {
        Ok(Ok(out)) if out.status.success() => {
            let url = String::from_utf8_lossy(&out.stdout).trim().to_string();
            (!url.is_empty()).then_some(url)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_owner_name() {
        let id = RepoIdentity::parse("alice/docs").unwrap();
        assert_eq!(id.owner, "alice");
        assert_eq!(id.name, "docs");
        assert_eq!(id.slug(), "alice/docs");
    }

    #[test]
    fn parse_rejects_missing_name() {
        assert_eq!(RepoIdentity::parse("alice"), None);
        assert_eq!(RepoIdentity::parse("alice/"), None);
        assert_eq!(RepoIdentity::parse(""), None);
    }

    #[test]
    fn ssh_remote_url() {
        let id = RepoIdentity::from_remote_url("git@github.com:alice/docs.git").unwrap();
        assert_eq!(id.slug(), "alice/docs");
    }

    #[test]
    fn https_remote_url_with_and_without_git_suffix() {
        let with = RepoIdentity::from_remote_url("https://github.com/alice/docs.git").unwrap();
        let without = RepoIdentity::from_remote_url("https://github.com/alice/docs").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn http_remote_url() {
        let id = RepoIdentity::from_remote_url("http://github.com/alice/docs").unwrap();
        assert_eq!(id.slug(), "alice/docs");
    }

    #[test]
    fn trailing_slash_stripped() {
        let id = RepoIdentity::from_remote_url("https://github.com/alice/docs/").unwrap();
        assert_eq!(id.slug(), "alice/docs");
    }

    #[test]
    fn non_github_remote_is_none() {
        assert_eq!(
            RepoIdentity::from_remote_url("https://gitlab.com/alice/docs.git"),
            None
        );
        assert_eq!(RepoIdentity::from_remote_url("/srv/git/docs.git"), None);
    }

    #[test]
    fn override_wins_over_env() {
        let tmp = tempfile::TempDir::new().unwrap();
        let id = resolve_with_env(Some("cli/repo"), Some("env/repo"), tmp.path()).unwrap();
        assert_eq!(id.slug(), "cli/repo");
    }

    #[test]
    fn env_used_when_no_override() {
        let tmp = tempfile::TempDir::new().unwrap();
        let id = resolve_with_env(None, Some("env/repo"), tmp.path()).unwrap();
        assert_eq!(id.slug(), "env/repo");
    }

    #[test]
    fn unparseable_override_is_none_even_with_env() {
        // An explicit override that doesn't parse does not fall through.
        let tmp = tempfile::TempDir::new().unwrap();
        assert_eq!(
            resolve_with_env(Some("not-a-repo"), Some("env/repo"), tmp.path()),
            None
        );
    }
}
