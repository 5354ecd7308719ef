// tests/common.rs

use filetime::{set_file_mtime, FileTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the CLI tests, but not the library tests.
pub fn resfilter_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("resfilter"))
}

/// A scratch directory tree for a single test.
#[allow(dead_code)]
pub struct TestTree {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestTree {
    pub fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Creates a file (and its parents) under the tree root.
    pub fn file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Creates a file and pins its modification time to `mtime` seconds since the epoch.
    pub fn file_at(&self, path: &str, content: &[u8], mtime: i64) -> PathBuf {
        let full_path = self.file(path, content);
        set_mtime(&full_path, mtime);
        full_path
    }

    pub fn dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    pub fn path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path)).unwrap()
    }
}

#[allow(dead_code)]
pub fn set_mtime(path: &Path, mtime: i64) {
    set_file_mtime(path, FileTime::from_unix_time(mtime, 0)).unwrap();
}

#[allow(dead_code)]
pub fn mtime(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
}
