//! Project filesystem collaborator.
//!
//! Commands address files by normalized logical path (`Assets/...`); how
//! those map onto real storage is the host's business. `DiskFs` is the
//! on-disk implementation for live projects, `MemoryFs` backs tests and
//! embedded hosts.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::BridgeError;
use crate::paths::AssetRoot;

/// Read/write access to files under the project's asset root, keyed by
/// normalized logical path.
pub trait ProjectFs {
    fn exists(&self, logical: &str) -> bool;
    fn read(&self, logical: &str) -> Result<String, BridgeError>;
    fn write(&mut self, logical: &str, content: &str) -> Result<(), BridgeError>;
    /// Create the folder (and any missing parents). Fails with
    /// `DirectoryCreateFailed` instead of silently proceeding.
    fn ensure_folder(&mut self, logical: &str) -> Result<(), BridgeError>;
    fn folder_exists(&self, logical: &str) -> bool;
    /// Logical paths of all files under `folder`, recursively, sorted.
    fn list(&self, folder: &str) -> Vec<String>;
}

/// On-disk implementation rooted at the configured project directory.
pub struct DiskFs {
    root: AssetRoot,
}

impl DiskFs {
    pub fn new(root: AssetRoot) -> Self {
        Self { root }
    }

    fn physical(&self, logical: &str) -> PathBuf {
        self.root.normalize(logical).physical
    }
}

impl ProjectFs for DiskFs {
    fn exists(&self, logical: &str) -> bool {
        self.physical(logical).is_file()
    }

    fn read(&self, logical: &str) -> Result<String, BridgeError> {
        let path = self.physical(logical);
        std::fs::read_to_string(&path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => BridgeError::NotFound(format!("file '{logical}'")),
                _ => BridgeError::Unknown(format!("failed to read '{logical}': {e}")),
            })
    }

    fn write(&mut self, logical: &str, content: &str) -> Result<(), BridgeError> {
        let path = self.physical(logical);
        std::fs::write(&path, content)
            .map_err(|e| BridgeError::Unknown(format!("failed to write '{logical}': {e}")))
    }

    fn ensure_folder(&mut self, logical: &str) -> Result<(), BridgeError> {
        let path = self.physical(logical);
        std::fs::create_dir_all(&path).map_err(|e| BridgeError::DirectoryCreateFailed {
            path: logical.to_string(),
            reason: e.to_string(),
        })
    }

    fn folder_exists(&self, logical: &str) -> bool {
        self.physical(logical).is_dir()
    }

    fn list(&self, folder: &str) -> Vec<String> {
        let normalized = self.root.normalize(folder);
        let mut found = Vec::new();
        let mut pending = vec![normalized.physical.clone()];
        while let Some(dir) = pending.pop() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if let Ok(rel) = path.strip_prefix(self.root.project_dir()) {
                    let logical = rel
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/");
                    found.push(self.root.normalize(&logical).logical);
                }
            }
        }
        found.sort();
        found
    }
}

/// In-memory implementation: a sorted map of logical path → content plus an
/// explicit set of folders.
#[derive(Default)]
pub struct MemoryFs {
    files: BTreeMap<String, String>,
    folders: std::collections::BTreeSet<String>,
    /// Folder prefixes whose creation is forced to fail, for exercising the
    /// `DirectoryCreateFailed` path in tests.
    pub fail_folder_creates: Vec<String>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, logical: &str, content: &str) -> Self {
        self.files.insert(logical.to_string(), content.to_string());
        self
    }
}

impl ProjectFs for MemoryFs {
    fn exists(&self, logical: &str) -> bool {
        self.files.contains_key(logical)
    }

    fn read(&self, logical: &str) -> Result<String, BridgeError> {
        self.files
            .get(logical)
            .cloned()
            .ok_or_else(|| BridgeError::NotFound(format!("file '{logical}'")))
    }

    fn write(&mut self, logical: &str, content: &str) -> Result<(), BridgeError> {
        self.files.insert(logical.to_string(), content.to_string());
        Ok(())
    }

    fn ensure_folder(&mut self, logical: &str) -> Result<(), BridgeError> {
        if self
            .fail_folder_creates
            .iter()
            .any(|prefix| logical.starts_with(prefix.as_str()))
        {
            return Err(BridgeError::DirectoryCreateFailed {
                path: logical.to_string(),
                reason: "simulated failure".to_string(),
            });
        }
        self.folders.insert(logical.to_string());
        Ok(())
    }

    fn folder_exists(&self, logical: &str) -> bool {
        self.folders.contains(logical)
            || self
                .files
                .keys()
                .any(|k| k.starts_with(&format!("{logical}/")))
    }

    fn list(&self, folder: &str) -> Vec<String> {
        let prefix = format!("{folder}/");
        self.files
            .keys()
            .filter(|k| k.starts_with(&prefix) || *k == folder)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_round_trips() {
        let mut fs = MemoryFs::new();
        assert!(!fs.exists("Assets/a.txt"));
        fs.write("Assets/a.txt", "hello").expect("write");
        assert!(fs.exists("Assets/a.txt"));
        assert_eq!(fs.read("Assets/a.txt").expect("read"), "hello");
        assert_eq!(fs.read("Assets/missing.txt").expect_err("missing").kind(), "not_found");
    }

    #[test]
    fn memory_fs_simulated_dir_failure() {
        let mut fs = MemoryFs::new();
        fs.fail_folder_creates.push("Assets/Locked".to_string());
        let err = fs.ensure_folder("Assets/Locked/Sub").expect_err("blocked");
        assert_eq!(err.kind(), "directory_create_failed");
        fs.ensure_folder("Assets/Open").expect("allowed");
        assert!(fs.folder_exists("Assets/Open"));
    }

    #[test]
    fn disk_fs_reads_writes_and_lists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = AssetRoot::new("Assets", dir.path());
        let mut fs = DiskFs::new(root);

        fs.ensure_folder("Assets/Scripts").expect("mkdir");
        fs.write("Assets/Scripts/One.cs", "class One {}").expect("write");
        fs.write("Assets/Scripts/Two.cs", "class Two {}").expect("write");

        assert!(fs.exists("Assets/Scripts/One.cs"));
        assert_eq!(fs.read("Assets/Scripts/One.cs").expect("read"), "class One {}");
        assert_eq!(
            fs.list("Assets/Scripts"),
            vec!["Assets/Scripts/One.cs".to_string(), "Assets/Scripts/Two.cs".to_string()]
        );
        assert_eq!(fs.read("Assets/Scripts/Zero.cs").expect_err("missing").kind(), "not_found");
    }

    #[test]
    fn disk_fs_dir_create_failure_is_classified() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = AssetRoot::new("Assets", dir.path());
        let mut fs = DiskFs::new(root);
        // A file standing where the folder should go makes create_dir_all fail.
        fs.ensure_folder("Assets").expect("mkdir root");
        fs.write("Assets/blocked", "i am a file").expect("write");
        let err = fs
            .ensure_folder("Assets/blocked/child")
            .expect_err("blocked by file");
        assert_eq!(err.kind(), "directory_create_failed");
    }
}
