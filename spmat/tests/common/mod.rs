#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Path to a file under the workspace `sample_inputs/` directory
pub fn sample_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("sample_inputs")
        .join(name)
}

/// Scratch file in the system temp dir, removed on drop
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Create (or overwrite) a scratch file with `contents`
    pub fn with_contents(name: &str, contents: &str) -> Self {
        let scratch = Self::empty(name);
        std::fs::write(&scratch.path, contents).expect("write scratch file");
        scratch
    }

    /// Reserve a scratch path without creating the file
    pub fn empty(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("spmat-{}-{name}", std::process::id()));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
