// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use drivefind::model::DriveMap;
use drivefind::search::{ProgressHandle, ProgressReporter};
use drivefind::util::percent;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a temporary directory tree from `(relative path, size)` pairs
pub fn create_tree(files: &[(&str, usize)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, size) in files {
        write_file(dir.path(), path, *size);
    }
    dir
}

/// Write a file of `size` bytes, creating parent directories as needed
pub fn write_file(root: &Path, rel: &str, size: usize) {
    let full_path = root.join(rel);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full_path, vec![b'x'; size]).unwrap();
}

/// Drive letters backed by subdirectories of a temp dir (`<tmp>/C`, `<tmp>/D`, ...)
pub struct TempDrives {
    pub dir: TempDir,
}

impl TempDrives {
    /// Create drives for the given letters
    pub fn new(letters: &[char]) -> Self {
        let dir = TempDir::new().unwrap();
        for letter in letters {
            fs::create_dir(dir.path().join(letter.to_string())).unwrap();
        }
        Self { dir }
    }

    pub fn drive(&self, letter: char) -> PathBuf {
        self.dir.path().join(letter.to_string())
    }
}

impl DriveMap for &TempDrives {
    fn root_for(&self, letter: char) -> PathBuf {
        self.drive(letter)
    }
}

/// Cloneable writer so a session and a progress bar can share one "terminal"
#[derive(Clone, Default)]
pub struct SharedOutput(pub Arc<Mutex<Vec<u8>>>);

impl SharedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Draws `\r[====----] 42%` into a shared output, the way a terminal bar does
pub struct TerminalBar(pub SharedOutput);

struct TerminalBarHandle {
    out: SharedOutput,
    total: u64,
}

impl ProgressHandle for TerminalBarHandle {
    fn set(&self, scanned: u64) {
        let p = percent(scanned, self.total);
        let filled = (p / 10) as usize;
        let line = format!("\r[{}{}] {:>3}%", "=".repeat(filled), "-".repeat(10 - filled), p);
        self.out.clone().write_all(line.as_bytes()).unwrap();
    }

    fn finish(&self) {}
}

impl ProgressReporter for TerminalBar {
    fn start(&self, total: u64) -> Box<dyn ProgressHandle> {
        Box::new(TerminalBarHandle {
            out: self.0.clone(),
            total,
        })
    }

    fn is_visible(&self) -> bool {
        true
    }
}
