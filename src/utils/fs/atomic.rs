//! Atomic file writes using a temp-and-rename strategy.

use crate::utils::fs::dirs::ensure_parent_dir;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary sibling used while writing `path`: `AutoGen.h` becomes `AutoGen.h.tmp`.
///
/// The full file name is kept so `AutoGen.c` and `AutoGen.h` written concurrently
/// never share a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically writes bytes to a file.
///
/// 1. Creates the parent directory if needed
/// 2. Writes `content` to `<file name>.tmp` next to the target and syncs it
/// 3. Renames the temp file over the target
///
/// Readers therefore see either the old content or the new content, never a
/// partial write.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    let safe_path = crate::utils::platform::windows_long_path(path);
    ensure_parent_dir(&safe_path)?;

    let temp_path = temp_path_for(&safe_path);

    {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            let platform_help = if crate::utils::platform::is_windows() {
                "On Windows: Check file permissions, path length, and that directory exists"
            } else {
                "Check file permissions and that directory exists"
            };

            format!("Failed to create temp file: {}\n\n{}", temp_path.display(), platform_help)
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, &safe_path)
        .with_context(|| format!("Failed to rename temp file to: {}", safe_path.display()))?;

    Ok(())
}
