use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Find the first path derived from `candidate` that does not exist yet
///
/// Returns `candidate` itself when it is free, otherwise probes
/// `stem_1.ext`, `stem_2.ext`, ... in order. The existence check and the
/// later write are not atomic; callers must be the only writer in the
/// directory.
pub fn resolve_collision(candidate: &Path) -> PathBuf {
    if !candidate.exists() {
        return candidate.to_path_buf();
    }

    let stem = candidate.file_stem().unwrap_or_default();
    let extension = candidate.extension();

    (1u64..)
        .map(|n| {
            let mut name = OsString::from(stem);
            name.push(format!("_{}", n));
            if let Some(ext) = extension {
                name.push(".");
                name.push(ext);
            }
            candidate.with_file_name(name)
        })
        .find(|path| !path.exists())
        .unwrap_or_else(|| candidate.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_free_path_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let candidate = dir.path().join("out.txt");
        assert_eq!(resolve_collision(&candidate), candidate);
    }

    #[test]
    fn test_existing_path_gets_numeric_suffix() {
        let dir = TempDir::new().unwrap();
        let candidate = dir.path().join("out.txt");
        fs::write(&candidate, "first").unwrap();

        assert_eq!(resolve_collision(&candidate), dir.path().join("out_1.txt"));
    }

    #[test]
    fn test_probes_in_ascending_order() {
        let dir = TempDir::new().unwrap();
        let candidate = dir.path().join("out.txt");
        fs::write(&candidate, "").unwrap();
        fs::write(dir.path().join("out_1.txt"), "").unwrap();
        fs::write(dir.path().join("out_3.txt"), "").unwrap();

        assert_eq!(resolve_collision(&candidate), dir.path().join("out_2.txt"));
    }

    #[test]
    fn test_sequential_writes_never_overwrite() {
        let dir = TempDir::new().unwrap();
        let candidate = dir.path().join("out.txt");

        let first = resolve_collision(&candidate);
        fs::write(&first, "one").unwrap();
        let second = resolve_collision(&candidate);
        fs::write(&second, "two").unwrap();

        assert_eq!(first, candidate);
        assert_eq!(second, dir.path().join("out_1.txt"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "one");
    }

    #[test]
    fn test_without_extension() {
        let dir = TempDir::new().unwrap();
        let candidate = dir.path().join("README");
        fs::write(&candidate, "").unwrap();

        assert_eq!(resolve_collision(&candidate), dir.path().join("README_1"));
    }

    #[test]
    fn test_only_last_extension_is_split() {
        let dir = TempDir::new().unwrap();
        let candidate = dir.path().join("archive.tar.gz");
        fs::write(&candidate, "").unwrap();

        assert_eq!(
            resolve_collision(&candidate),
            dir.path().join("archive.tar_1.gz")
        );
    }
}
