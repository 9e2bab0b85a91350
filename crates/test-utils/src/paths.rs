//! Locating optional sample files.
//!
//! Real RADOLAN files are not checked in. Tests that need them look in
//! `TEST_DATA_DIR` first, then in the `testdata/` directories of the
//! workspace, and skip when nothing is found.

use std::path::{Path, PathBuf};

/// Returns the workspace root directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent() // crates/
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Directories searched by [`find_test_file`], in order.
pub fn test_data_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(dir) = std::env::var("TEST_DATA_DIR") {
        dirs.push(PathBuf::from(dir));
    }

    let root = workspace_root();
    dirs.push(root.join("crates/radolan-parser/testdata"));
    dirs.push(root.join("testdata"));
    dirs
}

/// Find a sample file by name.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    test_data_dirs()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Write `data` to a file inside a fresh temporary directory.
///
/// The file is removed together with the returned directory.
pub fn write_temp_file(name: &str, data: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("radolan_test_")
        .tempdir()
        .expect("Failed to create temporary test directory");
    let path = dir.path().join(name);
    std::fs::write(&path, data).expect("Failed to write temporary test file");
    (dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_missing_file_is_none() {
        assert_eq!(find_test_file("no-such-composite---bin"), None);
    }

    #[test]
    fn test_write_temp_file() {
        let (dir, path) = write_temp_file("composite---bin", b"RW");
        assert!(path.starts_with(dir.path()));
        assert_eq!(std::fs::read(&path).unwrap(), b"RW");
    }
}
