//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is if it exists.
///
/// # Example
/// ```text
/// /home/user/game/src/assets/  ← start
/// /home/user/game/nobg.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Resolve a configured directory against the project root.
///
/// Expands a leading `~`, joins relative paths onto `root`, then normalizes.
/// Non-UTF-8 paths skip tilde expansion and are used as given.
pub fn resolve_dir(dir: &Path, root: &Path) -> PathBuf {
    let path = match dir.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => dir.to_path_buf(),
    };
    let full_path = if path.is_relative() {
        root.join(&path)
    } else {
        path
    };
    normalize_path(&full_path)
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, falling back to joining with the
/// current directory for relative paths that do not exist yet.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/assets");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("nobg.toml"), "").unwrap();

        let found = find_config_file(Path::new("nobg.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("nobg.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-nobg-config.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sprites.toml");
        assert!(find_config_file(&path, Path::new("/")).is_none());

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_resolve_dir_relative_to_root() {
        let resolved = resolve_dir(Path::new("src/assets"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/project/src/assets"));
    }

    #[test]
    fn test_resolve_dir_absolute_ignores_root() {
        let resolved = resolve_dir(Path::new("/srv/sprites"), Path::new("/project"));
        assert_eq!(resolved, PathBuf::from("/srv/sprites"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_dir_keeps_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new(OsStr::from_bytes(b"sprites-\xff"));
        let resolved = resolve_dir(dir, Path::new("/project"));
        assert_eq!(resolved, Path::new("/project").join(dir));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.png"));
        assert!(normalized.is_absolute());
    }
}
