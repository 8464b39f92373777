//! Site configuration: `mkdocs.yml` loading and the typed navigation tree.
//!
//! Only the handful of keys this tool cares about are modeled; a real
//! mkdocs.yml also carries theme, plugin, and markdown-extension settings
//! that are deliberately ignored rather than rejected.
//!
//! ```yaml
//! site_name: My Project
//! site_description: What the project does
//! docs_dir: docs
//! nav:
//!   - Home: index.md                # titled page
//!   - Guide:                        # section with children
//!       - Intro: guide/intro.md
//!       - Advanced: guide/advanced.md
//!   - changelog.md                  # untitled page (written, not listed)
//! ```
//!
//! The `nav` value is dynamically shaped — strings, single-key mappings,
//! and nested lists mixed freely. [`parse_nav`] converts it into the
//! explicit [`NavNode`] variant once, up front, so the walker never
//! inspects raw YAML. Every field has a default and a missing or
//! malformed file degrades to defaults with a diagnostic; configuration
//! problems never abort a run.

use crate::types::{Diagnostic, DiagnosticKind};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Site configuration from `mkdocs.yml`. Every field has a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Documentation source directory, relative to the repository root.
    pub docs_dir: String,
    /// Site title, used for the sidebar heading and fallback home page.
    pub site_name: String,
    /// One-line description, used only by the fallback home page.
    pub site_description: String,
    /// Raw navigation tree. `None` when the file carries no `nav` key,
    /// which plans zero pages; the fallback enumeration of the docs tree
    /// is reserved for a missing or unreadable file (see [`ConfigSource`]).
    pub nav: Option<Vec<Value>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_dir: "docs".to_string(),
            site_name: "Documentation".to_string(),
            site_description: String::new(),
            nav: None,
        }
    }
}

/// A navigation tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    /// A document reference, optionally titled.
    Page { title: Option<String>, path: String },
    /// A titled section containing child nodes.
    Section { title: String, children: Vec<NavNode> },
}

/// Where the effective configuration came from.
///
/// A file that parsed but has no `nav` key is still [`File`]: its empty
/// navigation is respected. Only a missing or unreadable file degrades
/// to [`Defaults`], and only then does the walker fall back to
/// enumerating the docs tree.
///
/// [`File`]: ConfigSource::File
/// [`Defaults`]: ConfigSource::Defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the configuration file.
    File,
    /// Stock defaults, because the file was missing or unreadable.
    Defaults,
}

/// Load configuration, degrading to defaults on any failure.
pub fn load(config_path: &Path) -> (SiteConfig, ConfigSource, Vec<Diagnostic>) {
    let mut diags = Vec::new();
    let (config, source) = match try_load(config_path) {
        Ok(Some(config)) => (config, ConfigSource::File),
        Ok(None) => {
            diags.push(Diagnostic::new(
                DiagnosticKind::Config,
                format!("{} not found, using defaults", config_path.display()),
            ));
            (SiteConfig::default(), ConfigSource::Defaults)
        }
        Err(err) => {
            diags.push(Diagnostic::new(
                DiagnosticKind::Config,
                format!("could not read {}: {err}, using defaults", config_path.display()),
            ));
            (SiteConfig::default(), ConfigSource::Defaults)
        }
    };
    (config, source, diags)
}

fn try_load(path: &Path) -> Result<Option<SiteConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    Ok(Some(serde_yaml::from_str(&text)?))
}

/// Resolve the effective docs directory against the repository root.
///
/// If the configured `docs_dir` does not exist but `docs/` does, `docs/`
/// is used and a note is recorded. A docs directory that does not exist
/// at all is returned as configured; downstream steps surface the missing
/// sources individually.
pub fn resolve_docs_dir(
    config: &SiteConfig,
    repo_root: &Path,
    diags: &mut Vec<Diagnostic>,
) -> PathBuf {
    let configured = repo_root.join(&config.docs_dir);
    if configured.is_dir() || config.docs_dir == "docs" {
        return configured;
    }
    let fallback = repo_root.join("docs");
    if fallback.is_dir() {
        diags.push(Diagnostic::new(
            DiagnosticKind::Config,
            format!("docs_dir '{}' does not exist, using 'docs'", config.docs_dir),
        ));
        return fallback;
    }
    configured
}

/// Convert the raw YAML `nav` list into typed nodes.
///
/// Unusable entries (non-string keys, numbers, null values) are skipped
/// with a diagnostic; the rest of the tree still converts. A mapping with
/// several keys flattens to several nodes, preserving order.
pub fn parse_nav(values: &[Value]) -> (Vec<NavNode>, Vec<Diagnostic>) {
    let mut nodes = Vec::new();
    let mut diags = Vec::new();
    for value in values {
        parse_nav_value(value, &mut nodes, &mut diags);
    }
    (nodes, diags)
}

fn parse_nav_value(value: &Value, nodes: &mut Vec<NavNode>, diags: &mut Vec<Diagnostic>) {
    match value {
        Value::String(path) => nodes.push(NavNode::Page {
            title: None,
            path: path.clone(),
        }),
        Value::Mapping(map) => {
            for (key, val) in map {
                let Some(title) = key.as_str() else {
                    diags.push(Diagnostic::new(
                        DiagnosticKind::Config,
                        format!("nav entry key is not a string: {key:?}, skipping"),
                    ));
                    continue;
                };
                match val {
                    Value::String(path) => nodes.push(NavNode::Page {
                        title: Some(title.to_string()),
                        path: path.clone(),
                    }),
                    Value::Sequence(children) => {
                        let (child_nodes, child_diags) = parse_nav(children);
                        diags.extend(child_diags);
                        nodes.push(NavNode::Section {
                            title: title.to_string(),
                            children: child_nodes,
                        });
                    }
                    other => diags.push(Diagnostic::new(
                        DiagnosticKind::Config,
                        format!("unsupported nav value under '{title}': {other:?}, skipping"),
                    )),
                }
            }
        }
        other => diags.push(Diagnostic::new(
            DiagnosticKind::Config,
            format!("unsupported nav entry: {other:?}, skipping"),
        )),
    }
}
