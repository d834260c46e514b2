//! Static asset copying.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Recreate `dest` from scratch and recursively copy `source` into it.
///
/// The destination is removed first so stale files from a previous run
/// never survive. Returns the number of files copied.
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        fs::remove_dir_all(dest)
            .with_context(|| format!("removing stale output directory {}", dest.display()))?;
    }
    fs::create_dir_all(dest)
        .with_context(|| format!("creating output directory {}", dest.display()))?;

    let copied = copy_tree(source, dest)?;
    log::info!(
        "copied {copied} static files from {} to {}",
        source.display(),
        dest.display()
    );
    Ok(copied)
}

fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    let entries = fs::read_dir(source)
        .with_context(|| format!("reading static directory {}", source.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", source.display()))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if entry
            .file_type()
            .with_context(|| format!("inspecting {}", from.display()))?
            .is_dir()
        {
            fs::create_dir(&to).with_context(|| format!("creating {}", to.display()))?;
            copied += copy_tree(&from, &to)?;
        } else {
            log::debug!("copy {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)
                .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
