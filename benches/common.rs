// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Generate a directory tree with N files spread over nested directories
pub fn generate_tree(num_files: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let dirs = ["src", "lib", "test", "pkg", "mod"];

    for i in 0..num_files {
        let depth = (i % 5) + 1;
        let mut path = dir.path().to_path_buf();
        for d in dirs.iter().take(depth) {
            path.push(format!("{}_{}", d, i / 100));
        }
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join(format!("file_{}.rs", i)), vec![b'x'; i % 512]).unwrap();
    }
    dir
}
