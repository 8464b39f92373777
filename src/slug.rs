//! Centralized wiki page naming.
//!
//! GitHub wikis are flat: every page lives at the top level and is
//! addressed by a single name. Documentation trees are not. This module is
//! the one place the flattening happens, so rewritten links, output
//! filenames, and the sidebar all agree on what a document is called.
//!
//! - `chapter/page.md` → `chapter-page`
//! - `../other/page.md` → `other-page`
//! - `guide/index.md` → `guide`

/// Convert a document-relative path into a flat wiki page name.
///
/// Strips a `.md` suffix, turns path separators and underscores into
/// dashes, drops leading relative-path markers (`./`, `../`), trims
/// surrounding dashes, and collapses a trailing `index` onto its parent
/// (`guide/index.md` → `guide`).
///
/// Total and idempotent: every string input produces a string output, and
/// feeding a result back in returns it unchanged. Flattening is lossy by
/// nature — `a/index.md` and `a.md` both become `a`. That collision is
/// accepted rather than worked around.
pub fn wiki_page_name(path: &str) -> String {
    let stem = path.strip_suffix(".md").unwrap_or(path);
    let flat: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | '_' => '-',
            other => other,
        })
        .collect();
    // Relative-path markers are now leading dots and dashes.
    let flat = flat.trim_start_matches(['.', '-']);
    let mut name = flat.trim_matches('-');
    while let Some(parent) = name.strip_suffix("-index") {
        name = parent.trim_matches('-');
    }
    name.to_string()
}
