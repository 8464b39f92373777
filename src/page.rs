//! Per-document processing: front matter, link rewriting, image URLs.

use crate::rewrite::Rewriter;
use crate::types::{Diagnostic, DiagnosticKind};
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// A front-matter block: an opening `---` line at the very start of the
/// file, a body, and a closing `---` line.
static FRONT_MATTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n.*?\n---\s*\n").unwrap());

/// Strip a leading front-matter block, if present.
///
/// A `---` thematic break later in the document is left alone, as is an
/// opening delimiter that never closes.
pub fn strip_front_matter(text: &str) -> String {
    FRONT_MATTER_PATTERN.replace(text, "").into_owned()
}

/// Process one source document into a wiki page.
///
/// Reads the source, strips front matter, rewrites links, resolves image
/// references, and writes the result to `dest`. A missing source is a
/// diagnostic, not an error: the write is skipped and the run goes on.
/// Returns whether the destination was written. Read/write failures on a
/// file that does exist are unexpected and propagate.
pub fn process_document(
    source: &Path,
    dest: &Path,
    rewriter: &Rewriter,
    diags: &mut Vec<Diagnostic>,
) -> io::Result<bool> {
    if !source.exists() {
        diags.push(Diagnostic::new(
            DiagnosticKind::MissingSource,
            format!("{} does not exist, skipping", source.display()),
        ));
        return Ok(false);
    }
    let text = fs::read_to_string(source)?;
    let text = strip_front_matter(&text);
    let text = rewriter.rewrite_links(&text);
    let (text, image_diags) = rewriter.rewrite_images(&text, source);
    diags.extend(image_diags);
    fs::write(dest, text)?;
    Ok(true)
}
