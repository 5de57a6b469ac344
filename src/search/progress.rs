//! Progress reporting abstraction
//!
//! Decouples the walk from terminal concerns (indicatif). Handles receive
//! the raw accumulator; turning it into a percentage happens here so every
//! reporter shares the same zero-total guard and clamp.

use std::io::{self, IsTerminal};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::util::percent;

/// A handle to an active progress bar
pub trait ProgressHandle: Send + Sync {
    /// Report the cumulative number of bytes scanned so far
    fn set(&self, scanned: u64);
    fn finish(&self);
}

/// Factory for creating progress handles, one per volume scan
pub trait ProgressReporter: Send + Sync {
    fn start(&self, total: u64) -> Box<dyn ProgressHandle>;

    /// Whether handles draw on stdout. A drawn bar leaves the cursor at the
    /// end of its line, so the caller must end that line before printing.
    fn is_visible(&self) -> bool;
}

/// Indicatif-based progress reporter drawing `[=====-----]  42%` on stdout
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, total: u64) -> Box<dyn ProgressHandle> {
        let pb = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::with_template("[{bar:50}] {pos:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.tick();
        Box::new(IndicatifHandle { bar: pb, total })
    }

    fn is_visible(&self) -> bool {
        io::stdout().is_terminal()
    }
}

struct IndicatifHandle {
    bar: ProgressBar,
    total: u64,
}

impl ProgressHandle for IndicatifHandle {
    fn set(&self, scanned: u64) {
        self.bar.set_position(percent(scanned, self.total));
    }

    fn finish(&self) {
        self.bar.abandon();
    }
}

/// No-op progress reporter for benchmarks and quiet mode
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _total: u64) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }

    fn is_visible(&self) -> bool {
        false
    }
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn set(&self, _scanned: u64) {}
    fn finish(&self) {}
}

/// Progress reporter that only shows output when verbose
pub struct VerboseProgress {
    verbose: bool,
}

impl VerboseProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for VerboseProgress {
    fn start(&self, total: u64) -> Box<dyn ProgressHandle> {
        if self.verbose {
            IndicatifProgress.start(total)
        } else {
            NoopProgress.start(total)
        }
    }

    fn is_visible(&self) -> bool {
        self.verbose && IndicatifProgress.is_visible()
    }
}
