//! Platform-specific helpers for file-system paths.

use std::path::{Path, PathBuf};

/// Returns `true` when compiled for Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Adds the `\\?\` prefix to paths longer than `MAX_PATH` so Win32 APIs accept them.
///
/// Relative paths are made absolute first, since the prefix disables relative
/// path resolution. Network paths become `\\?\UNC\server\share\...`.
#[cfg(windows)]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str.len() <= 260 || path_str.starts_with(r"\\?\") {
        return path.to_path_buf();
    }

    let absolute_path = if path.is_relative() {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
    } else {
        path.to_path_buf()
    };

    let absolute_str = absolute_path.to_string_lossy();
    if absolute_str.len() <= 260 {
        return absolute_path;
    }
    match absolute_str.strip_prefix(r"\\") {
        Some(stripped) => PathBuf::from(format!(r"\\?\UNC\{stripped}")),
        None => PathBuf::from(format!(r"\\?\{absolute_str}")),
    }
}

/// No-op on platforms without a path length limit.
#[cfg(not(windows))]
#[must_use]
pub fn windows_long_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
