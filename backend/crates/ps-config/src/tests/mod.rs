
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to a config.toml inside a fresh temp directory
pub(crate) fn write_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}
