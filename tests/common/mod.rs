//! Common test utilities for cistring tests

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Test context with temporary directory for isolated test execution
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestContext {
    /// Create an empty temp directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Create a temp directory populated with `(relative path, contents)` files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let ctx = Self::new();
        for (name, contents) in files {
            ctx.write(name, contents.as_bytes());
        }
        ctx
    }

    /// Write a file (creating parent directories) and return its path
    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Run a case-insensitive search over the whole temp directory
    pub fn find(&self, needle: &str) -> cistring::FindReport {
        self.find_with(needle, &[], &[])
    }

    pub fn find_with(
        &self,
        needle: &str,
        include: &[&str],
        exclude: &[&str],
    ) -> cistring::FindReport {
        cistring::find_in_paths(&cistring::FindOptions {
            needle: needle.to_string(),
            paths: vec![self.root.clone()],
            include: include.iter().map(|s| s.to_string()).collect(),
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
            verbose: false,
        })
        .expect("Search should succeed")
    }

    /// Path of `path` relative to the temp root, with `/` separators
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

/// Run the `cistring` binary with `args`, feeding `stdin` when given
pub fn run_cli(args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cistring"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn cistring");

    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input)
                .expect("Failed to write to cistring stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for cistring")
}
