//! Sidebar and home page synthesis.
//!
//! Two pages are built from run-level data rather than from a single
//! source document: `_Sidebar.md`, rendered from the collected page
//! entries, and `Home.md`, chosen from the best available source in
//! priority order (docs index → repository readme → site metadata).

use crate::config::SiteConfig;
use crate::page;
use crate::rewrite::Rewriter;
use crate::types::PageEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Render `_Sidebar.md` from collected entries.
///
/// One list line per entry whose title and page name are both non-empty,
/// in traversal order. Untitled entries exist in the wiki but are not
/// listed.
pub fn sidebar(config: &SiteConfig, pages: &[PageEntry]) -> String {
    let mut out = format!("# 📚 {} Wiki\n\n", config.site_name);
    out.push_str("## Table of Contents\n\n");
    for entry in pages {
        if !entry.title.is_empty() && !entry.page_name.is_empty() {
            out.push_str(&format!("- [{}]({})\n", entry.title, entry.page_name));
        }
    }
    out
}

/// Build `Home.md` content.
///
/// Prefers `<docs>/index.md` with its front matter stripped, then the
/// repository `README.md` as-is, then a minimal page synthesized from
/// site metadata. Links are rewritten in every case; image references
/// are deliberately left as written.
pub fn home_page(
    config: &SiteConfig,
    docs_dir: &Path,
    repo_root: &Path,
    rewriter: &Rewriter,
) -> io::Result<String> {
    let index = docs_dir.join("index.md");
    let readme = repo_root.join("README.md");

    let body = if index.exists() {
        page::strip_front_matter(&fs::read_to_string(&index)?)
    } else if readme.exists() {
        fs::read_to_string(&readme)?
    } else {
        let mut body = format!("# {}\n\n", config.site_name);
        if !config.site_description.is_empty() {
            body.push_str(&config.site_description);
            body.push_str("\n\n");
        }
        body.push_str("Welcome to the wiki!\n");
        body
    };

    Ok(rewriter.rewrite_links(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    fn entry(title: &str, page_name: &str) -> PageEntry {
        PageEntry {
            title: title.to_string(),
            page_name: page_name.to_string(),
        }
    }

    fn demo_config() -> SiteConfig {
        SiteConfig {
            site_name: "Demo Docs".to_string(),
            site_description: "Documentation for the demo project".to_string(),
            ..SiteConfig::default()
        }
    }

    // =========================================================================
    // Sidebar
    // =========================================================================

    #[test]
    fn sidebar_heading_uses_site_name() {
        let out = sidebar(&demo_config(), &[]);
        assert!(out.starts_with("# 📚 Demo Docs Wiki\n"));
        assert!(out.contains("## Table of Contents"));
    }

    #[test]
    fn sidebar_one_line_per_titled_entry_in_order() {
        let pages = vec![
            entry("Home", "index"),
            entry("", "hidden"),
            entry("Guide Intro", "guide-intro"),
        ];
        let out = sidebar(&demo_config(), &pages);
        let lines: Vec<&str> = out.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(lines, ["- [Home](index)", "- [Guide Intro](guide-intro)"]);
    }

    #[test]
    fn sidebar_skips_entry_with_empty_page_name() {
        let pages = vec![entry("Orphan", "")];
        let out = sidebar(&demo_config(), &pages);
        assert!(!out.contains("Orphan"));
    }

    #[test]
    fn sidebar_keeps_duplicates() {
        let pages = vec![entry("One", "page"), entry("Two", "page")];
        let out = sidebar(&demo_config(), &pages);
        assert!(out.contains("- [One](page)"));
        assert!(out.contains("- [Two](page)"));
    }

    // =========================================================================
    // Home page
    // =========================================================================

    #[test]
    fn home_prefers_docs_index_and_strips_front_matter() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "docs/index.md", "---\ntitle: X\n---\n# Index\n");
        write_file(tmp.path(), "README.md", "# Readme\n");

        let rewriter = Rewriter::new(None, tmp.path());
        let home =
            home_page(&demo_config(), &tmp.path().join("docs"), tmp.path(), &rewriter).unwrap();
        assert_eq!(home, "# Index\n");
    }

    #[test]
    fn home_falls_back_to_readme_without_front_matter_strip() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "README.md", "---\nnot front matter here\n");

        let rewriter = Rewriter::new(None, tmp.path());
        let home =
            home_page(&demo_config(), &tmp.path().join("docs"), tmp.path(), &rewriter).unwrap();
        assert_eq!(home, "---\nnot front matter here\n");
    }

    #[test]
    fn home_synthesized_from_metadata_when_no_sources() {
        let tmp = TempDir::new().unwrap();
        let rewriter = Rewriter::new(None, tmp.path());
        let home =
            home_page(&demo_config(), &tmp.path().join("docs"), tmp.path(), &rewriter).unwrap();
        assert_eq!(
            home,
            "# Demo Docs\n\nDocumentation for the demo project\n\nWelcome to the wiki!\n"
        );
    }

    #[test]
    fn home_omits_empty_description() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig {
            site_name: "Bare".to_string(),
            ..SiteConfig::default()
        };
        let rewriter = Rewriter::new(None, tmp.path());
        let home = home_page(&config, &tmp.path().join("docs"), tmp.path(), &rewriter).unwrap();
        assert_eq!(home, "# Bare\n\nWelcome to the wiki!\n");
    }

    #[test]
    fn home_links_rewritten_but_images_untouched() {
        let tmp = TempDir::new().unwrap();
        write_file(
            tmp.path(),
            "docs/index.md",
            "See [guide](guide/intro.md).\n\n![shot](assets/shot.png)\n",
        );

        let rewriter = Rewriter::new(None, tmp.path());
        let home =
            home_page(&demo_config(), &tmp.path().join("docs"), tmp.path(), &rewriter).unwrap();
        assert!(home.contains("[guide](guide-intro)"));
        assert!(home.contains("![shot](assets/shot.png)"));
    }
}
