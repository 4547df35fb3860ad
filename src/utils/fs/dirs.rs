//! Directory creation helpers.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Creates `path` and any missing ancestors.
///
/// An existing directory is left alone; an existing file at `path` is an error.
///
/// ```rust,no_run
/// use basetools::utils::fs::create_directory;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// create_directory(Path::new("Build/DEBUG/X64"))?;
/// # Ok(())
/// # }
/// ```
pub fn create_directory(path: &Path) -> Result<()> {
    let safe_path = crate::utils::platform::windows_long_path(path);

    if !safe_path.exists() {
        debug!("Creating directory {}", path.display());
        fs::create_dir_all(&safe_path).with_context(|| {
            let platform_help = if crate::utils::platform::is_windows() {
                "On Windows: Check that the path length is < 260 chars or that long path support is enabled"
            } else {
                "Check directory permissions and path validity"
            };

            format!("Failed to create directory: {}\n\n{}", path.display(), platform_help)
        })?;
    } else if !safe_path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Creates the parent directory of `path`, if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_directory(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_directory() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("Build").join("DEBUG").join("X64");

        assert!(!nested.exists());
        create_directory(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        create_directory(&nested).unwrap();
    }

    #[test]
    fn test_create_directory_on_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("file.txt");
        std::fs::write(&file_path, "content").unwrap();

        let result = create_directory(&file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("parent").join("child").join("file.txt");

        ensure_parent_dir(&file_path).unwrap();
        assert!(file_path.parent().unwrap().is_dir());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        ensure_parent_dir(Path::new("file.txt")).unwrap();
    }
}
