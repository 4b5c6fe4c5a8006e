//! Filesystem collaborator used by the assembly pipeline.
//!
//! The pipeline only touches disk through this trait, so tests can verify
//! preconditions (e.g. that a rejected run performed zero writes) against
//! an in-memory double.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait Fs: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem
pub struct DiskFs;

impl Fs for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory filesystem recording every write, for tests and dry runs
#[derive(Default)]
pub struct MemoryFs {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    dirs: Vec<PathBuf>,
    preexisting: Vec<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as already present on disk before the pipeline runs
    pub fn with_existing(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().preexisting.push(path.into());
        self
    }

    /// Number of files written so far
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    /// All written file paths, in no particular order
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().files.keys().cloned().collect()
    }

    /// Content of a written file
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }
}

impl Fs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.preexisting.iter().any(|p| p == path)
            || state.files.contains_key(path)
            || state.dirs.iter().any(|d| d == path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.state.lock().unwrap().dirs.push(path.to_path_buf());
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_tracks_writes() {
        let fs = MemoryFs::new();
        assert_eq!(fs.write_count(), 0);
        fs.write(Path::new("/p/a.txt"), "hello").unwrap();
        assert_eq!(fs.write_count(), 1);
        assert_eq!(fs.contents("/p/a.txt").unwrap(), "hello");
        assert!(fs.exists(Path::new("/p/a.txt")));
    }

    #[test]
    fn test_memory_fs_preexisting_paths() {
        let fs = MemoryFs::new().with_existing("/taken");
        assert!(fs.exists(Path::new("/taken")));
        assert!(!fs.exists(Path::new("/free")));
        assert_eq!(fs.write_count(), 0);
    }
}
