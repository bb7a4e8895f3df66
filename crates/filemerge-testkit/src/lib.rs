//! Test utilities for filemerge
//!
//! This crate provides shared testing utilities used across the filemerge workspace.

pub mod fixtures;

pub use fixtures::Fixture;

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// All test output lands in one gitignored location that is easy to clean
/// up by hand. The directory is removed when the returned `TempDir` drops.
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_under_dot_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert_eq!(
            temp.path().parent().and_then(|p| p.file_name()),
            Some(std::ffi::OsStr::new(".tmp"))
        );
    }
}
