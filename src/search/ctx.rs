//! Traversal context
//!
//! Owns the per-volume accumulator so the walk itself only has to report
//! what it saw.

use std::ffi::OsStr;

use crate::model::{ScanSummary, SearchOutcome};

use super::progress::ProgressHandle;

/// State of one volume scan
pub struct ScanCtx<'a> {
    target: &'a str,
    total: u64,
    scanned: u64,
    visited: u64,
    skipped: u64,
    progress: Box<dyn ProgressHandle>,
}

impl<'a> ScanCtx<'a> {
    pub fn new(target: &'a str, total: u64, progress: Box<dyn ProgressHandle>) -> Self {
        progress.set(0);
        Self {
            target,
            total,
            scanned: 0,
            visited: 0,
            skipped: 0,
            progress,
        }
    }

    /// Exact, case-sensitive file name comparison
    pub fn is_target(&self, file_name: &OsStr) -> bool {
        file_name == self.target
    }

    /// Count a visited entry and redraw progress
    pub fn record(&mut self, size: u64) {
        self.scanned = self.scanned.saturating_add(size);
        self.visited += 1;
        self.progress.set(self.scanned);
    }

    /// Count an entry that could not be read
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn scanned(&self) -> u64 {
        self.scanned
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn finish(self, outcome: SearchOutcome) -> ScanSummary {
        self.progress.finish();
        ScanSummary {
            outcome,
            scanned_bytes: self.scanned,
            entries_visited: self.visited,
            entries_skipped: self.skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorded {
        values: Mutex<Vec<u64>>,
        finished: Mutex<bool>,
    }

    struct RecordingHandle(Arc<Recorded>);

    impl ProgressHandle for RecordingHandle {
        fn set(&self, scanned: u64) {
            self.0.values.lock().unwrap().push(scanned);
        }

        fn finish(&self) {
            *self.0.finished.lock().unwrap() = true;
        }
    }

    #[test]
    fn test_accumulates_and_reports() {
        let rec = Arc::new(Recorded::default());
        let mut ctx = ScanCtx::new("a.txt", 100, Box::new(RecordingHandle(rec.clone())));

        ctx.record(10);
        ctx.record(5);
        ctx.skip();
        assert_eq!(ctx.scanned(), 15);
        assert_eq!(ctx.total(), 100);

        let summary = ctx.finish(SearchOutcome::NotFound);
        assert_eq!(summary.scanned_bytes, 15);
        assert_eq!(summary.entries_visited, 2);
        assert_eq!(summary.entries_skipped, 1);

        assert_eq!(*rec.values.lock().unwrap(), vec![0, 10, 15]);
        assert!(*rec.finished.lock().unwrap());
    }

    #[test]
    fn test_target_match_is_exact() {
        let rec = Arc::new(Recorded::default());
        let ctx = ScanCtx::new("Report.pdf", 0, Box::new(RecordingHandle(rec)));

        assert!(ctx.is_target(OsStr::new("Report.pdf")));
        assert!(!ctx.is_target(OsStr::new("report.pdf")));
        assert!(!ctx.is_target(OsStr::new("Report.pdf.bak")));
        assert!(!ctx.is_target(OsStr::new("Report")));
    }

    #[test]
    fn test_accumulator_saturates() {
        let rec = Arc::new(Recorded::default());
        let mut ctx = ScanCtx::new("x", 1, Box::new(RecordingHandle(rec)));
        ctx.record(u64::MAX);
        ctx.record(1);
        assert_eq!(ctx.scanned(), u64::MAX);
    }
}
