//! Writes that skip files whose content is already up to date.
//!
//! Generated files feed incremental builds, so rewriting an identical file would
//! bump its timestamp and trigger needless rebuilds. These helpers compare first
//! and only write on a difference.

use crate::utils::fs::atomic::atomic_write;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `content` to `path` unless the file already holds exactly those bytes.
///
/// Returns `true` when the file was written, `false` when it was left untouched.
/// Missing parent directories are created. Text and binary content are both
/// compared byte for byte.
///
/// ```rust,no_run
/// use basetools::utils::fs::save_file_on_change;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let changed = save_file_on_change(Path::new("Build/AutoGen.h"), b"#define X 1\n")?;
/// if !changed {
///     println!("AutoGen.h is up to date");
/// }
/// # Ok(())
/// # }
/// ```
pub fn save_file_on_change(path: &Path, content: &[u8]) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) if existing == content => {
            debug!("Skipping unchanged file {}", path.display());
            return Ok(false);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read existing file: {}", path.display()));
        }
    }

    debug!("Writing {} ({} bytes)", path.display(), content.len());
    atomic_write(path, content)?;
    Ok(true)
}

/// Runs [`save_file_on_change`] for many files in parallel.
///
/// Returns one flag per input, in input order. Every file is attempted; if any
/// fail, the error lists all failures.
pub async fn save_files_on_change(files: &[(PathBuf, Vec<u8>)]) -> Result<Vec<bool>> {
    use futures::future::try_join_all;

    if files.is_empty() {
        return Ok(Vec::new());
    }

    let tasks = files.iter().map(|(path, content)| {
        let path = path.clone();
        let content = content.clone();
        tokio::task::spawn_blocking(move || {
            save_file_on_change(&path, &content)
                .with_context(|| format!("Failed to save {}", path.display()))
        })
    });

    let results = try_join_all(tasks).await.context("Failed to join file write tasks")?;

    let mut changed = Vec::with_capacity(results.len());
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(flag) => changed.push(flag),
            Err(e) => errors.push(format!("  {e:#}")),
        }
    }

    if !errors.is_empty() {
        return Err(anyhow::anyhow!(
            "Failed to write {} files:\n{}",
            errors.len(),
            errors.join("\n")
        ));
    }

    Ok(changed)
}
