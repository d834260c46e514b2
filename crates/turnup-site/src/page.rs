//! Page generation.
//!
//! Turns Markdown content files into HTML pages by substituting the
//! extracted title and the rendered tree into a template.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use turnup::{extract_title, markdown_to_html};

/// Literal placeholder replaced with the document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Literal placeholder replaced with the rendered document body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Generate one HTML page from a Markdown file and a template string.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<()> {
    log::info!("generating {} from {}", dest.display(), from.display());

    let markdown = fs::read_to_string(from)
        .with_context(|| format!("reading {}", from.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("extracting title from {}", from.display()))?;
    let content = markdown_to_html(&markdown)
        .with_context(|| format!("converting {}", from.display()))?;

    let html = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(dest, html).with_context(|| format!("writing {}", dest.display()))
}

/// Walk `content_dir` and generate a mirrored `.html` page for every `.md`
/// file. Returns the number of pages generated.
///
/// A document that fails to convert is logged and skipped; the remaining
/// documents are still generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
) -> Result<usize> {
    let mut generated = 0;

    let entries = fs::read_dir(content_dir)
        .with_context(|| format!("reading content directory {}", content_dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", content_dir.display()))?;
        let from = entry.path();

        if entry
            .file_type()
            .with_context(|| format!("inspecting {}", from.display()))?
            .is_dir()
        {
            let nested = dest_dir.join(entry.file_name());
            generated += generate_pages_recursive(&from, template, &nested)?;
        } else if from.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            match generate_page(&from, template, &dest) {
                Ok(()) => generated += 1,
                Err(err) => log::error!("skipping {}: {err:#}", from.display()),
            }
        }
    }

    Ok(generated)
}
