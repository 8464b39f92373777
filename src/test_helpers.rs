//! Shared test utilities.
//!
//! Fixtures are built programmatically in a `TempDir` so every test gets
//! an isolated repository layout it can mutate freely.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a repository layout with an mkdocs config and a small docs tree:
///
/// ```text
/// mkdocs.yml                  site_name "Demo Docs", three nav entries
/// docs/index.md               front matter + internal link
/// docs/guide/intro.md         relative image + parent-relative link
/// docs/guide/advanced_topics.md   external link + anchor
/// docs/about.md               bare (untitled) nav reference
/// docs/assets/diagram.png
/// README.md
/// ```
pub fn setup_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "mkdocs.yml",
        r#"site_name: Demo Docs
site_description: Documentation for the demo project
nav:
  - Home: index.md
  - Guide:
      - Intro: guide/intro.md
      - Advanced: guide/advanced_topics.md
  - about.md
"#,
    );
    write_file(
        tmp.path(),
        "docs/index.md",
        "---\ntitle: Index\n---\n# Demo\n\nSee the [guide](guide/intro.md).\n",
    );
    write_file(
        tmp.path(),
        "docs/guide/intro.md",
        "# Intro\n\n![diagram](../assets/diagram.png)\n\nBack to [home](../index.md).\n",
    );
    write_file(
        tmp.path(),
        "docs/guide/advanced_topics.md",
        "# Advanced\n\nExternal: [rust](https://www.rust-lang.org) and [anchor](#top).\n",
    );
    write_file(tmp.path(), "docs/about.md", "# About\n");
    write_file(tmp.path(), "docs/assets/diagram.png", "png bytes");
    write_file(tmp.path(), "README.md", "# Demo Docs\n\nTop-level readme.\n");
    tmp
}

/// Write `content` at `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
