//! Volume file search
//!
//! Finds a file by exact name under a root directory while reporting
//! progress against an estimated byte total.
//!
//! # Architecture
//!
//! - **filter**: special-directory predicate
//! - **progress**: progress reporting abstraction
//! - **ctx**: per-volume traversal state (accumulator and counters)
//! - **FileSearcher**: walk orchestration, entry by entry

mod ctx;
mod filter;
mod progress;

pub use ctx::ScanCtx;
pub use filter::{SpecialDirFilter, SPECIAL_DIRS};
pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter, VerboseProgress};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::model::{ProgressBasis, ScanSummary, SearchOutcome, Volume};
use crate::util::{format_size, percent};

/// Depth-first file searcher
pub struct FileSearcher {
    filter: SpecialDirFilter,
    follow_links: bool,
    verbose: bool,
}

impl Default for FileSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSearcher {
    pub fn new() -> Self {
        Self {
            filter: SpecialDirFilter::default(),
            follow_links: true,
            verbose: true,
        }
    }

    /// Create a quiet searcher (no per-volume summary, used by benchmarks)
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            ..Self::new()
        }
    }

    pub fn with_filter(mut self, filter: SpecialDirFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Search a whole volume, estimating progress from its space figures
    pub fn search_volume(
        &self,
        volume: &Volume,
        target: &str,
        basis: ProgressBasis,
        progress: &dyn ProgressReporter,
    ) -> ScanSummary {
        self.search(&volume.root, target, volume.progress_total(basis), progress)
    }

    /// Walk `root` looking for a regular file named exactly `target`.
    ///
    /// Stops at the first match. Entries that cannot be read are skipped
    /// and counted; they never abort the walk.
    pub fn search(
        &self,
        root: &Path,
        target: &str,
        total: u64,
        progress: &dyn ProgressReporter,
    ) -> ScanSummary {
        let start = Instant::now();
        let mut ctx = ScanCtx::new(target, total, progress.start(total));

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    ctx.skip();
                    continue;
                }
            };

            if is_regular_file(&entry) && ctx.is_target(entry.file_name()) {
                let path = absolute(entry.path());
                self.log_summary(root, &ctx, start);
                return ctx.finish(SearchOutcome::Found(path));
            }

            if entry.file_type().is_dir() {
                ctx.record(0);
                continue;
            }
            match entry.metadata() {
                Ok(meta) => ctx.record(meta.len()),
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "skipping entry without metadata");
                    ctx.skip();
                }
            }
        }

        self.log_summary(root, &ctx, start);
        ctx.finish(SearchOutcome::NotFound)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_dir() && self.filter.is_special(entry.path()) {
            debug!(path = %entry.path().display(), "skipping special directory");
            return true;
        }
        false
    }

    fn log_summary(&self, root: &Path, ctx: &ScanCtx<'_>, start: Instant) {
        if self.verbose {
            info!(
                root = %root.display(),
                scanned = %format_size(ctx.scanned()),
                estimate = %format_size(ctx.total()),
                percent = percent(ctx.scanned(), ctx.total()),
                elapsed = ?start.elapsed(),
                "volume walk finished"
            );
        }
    }
}

/// Regular file, or a link to one when links are not being followed
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
