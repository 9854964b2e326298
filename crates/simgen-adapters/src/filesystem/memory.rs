//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use simgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SimgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    poisoned: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Make every write beneath `path` fail, for exercising partial-batch
    /// behavior.
    pub fn poison(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().poisoned.push(path.into());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SimgenResult<()> {
        let mut inner = self.inner.write().expect("memory fs lock");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SimgenResult<()> {
        let mut inner = self.inner.write().expect("memory fs lock");

        if inner.poisoned.iter().any(|p| path.starts_with(p)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "write refused (poisoned for test)".into(),
            }
            .into());
        }

        // Ensure parent exists, mirroring the real filesystem's behavior.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().expect("memory fs lock");
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn walk_files(&self, root: &Path) -> SimgenResult<Vec<PathBuf>> {
        let inner = self.inner.read().expect("memory fs lock");
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}
