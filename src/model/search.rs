use std::path::PathBuf;

/// Result of searching one volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Absolute path of the first match
    Found(PathBuf),
    NotFound,
}

/// What a single volume scan produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub outcome: SearchOutcome,
    pub scanned_bytes: u64,
    pub entries_visited: u64,
    pub entries_skipped: u64,
}

impl ScanSummary {
    pub fn found_path(&self) -> Option<&PathBuf> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}
