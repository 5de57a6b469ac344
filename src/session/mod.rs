//! Interactive search session
//!
//! Drives the console protocol as a small state machine:
//! `AwaitFilename → AwaitScope → [AwaitDrive | Ready] → Scanning → Reporting → Done`.
//! Invalid answers only ever loop back to their own prompt.

mod prompt;

pub use prompt::{parse_drive_letter, parse_yes_no, InputError, Prompter};

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::model::{enumerate_drives, find_drive, DriveMap, ProgressBasis, SearchOutcome, Volume};
use crate::search::{FileSearcher, ProgressReporter};
use crate::util::megabytes;

pub const NAME_PROMPT: &str = "Enter the name of the file you want to search: ";
pub const SCOPE_PROMPT: &str = "Do you want to search on all storage drives? (y/n): ";
pub const DRIVE_PROMPT: &str = "Enter the drive letter of an existing drive to explore: ";
pub const INVALID_DRIVE: &str = "Invalid drive letter. Please enter a valid drive letter.";
pub const NO_DRIVES: &str = "No storage drives were found.";

/// Which volumes to search, when decided before the session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every existing drive letter
    All,
    /// One drive; the raw answer is validated like a typed one
    Drive(String),
    /// A directory tree instead of drive roots
    Root(PathBuf),
}

/// Answers supplied up front; anything left `None` is prompted for
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub name: Option<String>,
    pub scope: Option<Scope>,
    pub basis: ProgressBasis,
}

/// What the session ended with
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub target: String,
    pub found: Option<PathBuf>,
    pub volumes_scanned: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    AwaitFilename,
    AwaitScope,
    AwaitDrive,
    Ready,
    Scanning,
    Reporting,
    Done,
}

pub struct Session<'a, R, W, D> {
    prompt: Prompter<R, W>,
    drives: D,
    searcher: FileSearcher,
    progress: &'a dyn ProgressReporter,
    config: SessionConfig,

    target: String,
    pending_drive: Option<String>,
    volumes: Vec<Volume>,
    found: Option<PathBuf>,
    volumes_scanned: usize,
    elapsed: Duration,
}

impl<'a, R: BufRead, W: Write, D: DriveMap> Session<'a, R, W, D> {
    pub fn new(
        prompt: Prompter<R, W>,
        drives: D,
        searcher: FileSearcher,
        progress: &'a dyn ProgressReporter,
        config: SessionConfig,
    ) -> Self {
        Self {
            prompt,
            drives,
            searcher,
            progress,
            config,
            target: String::new(),
            pending_drive: None,
            volumes: Vec::new(),
            found: None,
            volumes_scanned: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn run(mut self) -> Result<SessionReport> {
        let mut stage = Stage::AwaitFilename;
        while stage != Stage::Done {
            debug!(?stage, "session stage");
            stage = self.step(stage)?;
        }

        Ok(SessionReport {
            target: self.target,
            found: self.found,
            volumes_scanned: self.volumes_scanned,
            elapsed: self.elapsed,
        })
    }

    fn step(&mut self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::AwaitFilename => {
                self.target = self.read_target()?;
                Stage::AwaitScope
            }
            Stage::AwaitScope => self.choose_scope()?,
            Stage::AwaitDrive => {
                self.choose_drive()?;
                Stage::Ready
            }
            Stage::Ready => Stage::Scanning,
            Stage::Scanning => {
                self.scan_volumes()?;
                Stage::Reporting
            }
            Stage::Reporting => {
                self.report()?;
                Stage::Done
            }
            Stage::Done => Stage::Done,
        };
        Ok(next)
    }

    fn read_target(&mut self) -> Result<String> {
        let preset = self
            .config
            .name
            .take()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if let Some(name) = preset {
            return Ok(name);
        }

        loop {
            let answer = self.prompt.ask(NAME_PROMPT, "a file name")?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    fn choose_scope(&mut self) -> Result<Stage> {
        match self.config.scope.take() {
            Some(Scope::All) => {
                self.volumes = enumerate_drives(&self.drives);
                Ok(Stage::Ready)
            }
            Some(Scope::Drive(answer)) => {
                self.pending_drive = Some(answer);
                Ok(Stage::AwaitDrive)
            }
            Some(Scope::Root(root)) => {
                match Volume::probe(None, &root) {
                    Some(volume) => self.volumes.push(volume),
                    None => warn!(root = %root.display(), "search root does not exist"),
                }
                Ok(Stage::Ready)
            }
            None => loop {
                let answer = self.prompt.ask(SCOPE_PROMPT, "a y/n answer")?;
                match parse_yes_no(&answer) {
                    Some(true) => {
                        self.volumes = enumerate_drives(&self.drives);
                        break Ok(Stage::Ready);
                    }
                    Some(false) => break Ok(Stage::AwaitDrive),
                    None => continue,
                }
            },
        }
    }

    fn choose_drive(&mut self) -> Result<()> {
        if let Some(answer) = self.pending_drive.take() {
            if let Some(volume) = self.lookup_drive(&answer) {
                self.volumes.push(volume);
                return Ok(());
            }
            self.prompt.say(INVALID_DRIVE)?;
        }

        let available = enumerate_drives(&self.drives);
        if available.is_empty() {
            self.prompt.say(NO_DRIVES)?;
            return Ok(());
        }
        for volume in &available {
            self.prompt
                .say(format_args!("{} {} MB", volume.label(), megabytes(volume.capacity)))?;
        }

        loop {
            let answer = self.prompt.ask(DRIVE_PROMPT, "a drive letter")?;
            match self.lookup_drive(&answer) {
                Some(volume) => {
                    self.volumes.push(volume);
                    return Ok(());
                }
                None => self.prompt.say(INVALID_DRIVE)?,
            }
        }
    }

    fn lookup_drive(&self, answer: &str) -> Option<Volume> {
        parse_drive_letter(answer).and_then(|letter| find_drive(&self.drives, letter))
    }

    fn scan_volumes(&mut self) -> Result<()> {
        let start = Instant::now();

        for volume in &self.volumes {
            self.prompt
                .say(format_args!("Search in : {}", volume.root.display()))?;
            if !volume.root.is_dir() {
                debug!(root = %volume.root.display(), "volume root is not a directory");
                continue;
            }

            self.volumes_scanned += 1;
            let summary =
                self.searcher
                    .search_volume(volume, &self.target, self.config.basis, self.progress);
            if self.progress.is_visible() {
                self.prompt.say("")?;
            }
            if summary.entries_skipped > 0 {
                info!(
                    volume = %volume.label(),
                    skipped = summary.entries_skipped,
                    "some entries could not be read"
                );
            }

            if let SearchOutcome::Found(path) = summary.outcome {
                self.prompt
                    .say(format_args!("File found : {}", path.display()))?;
                self.found = Some(path);
                break;
            }
        }

        self.elapsed = start.elapsed();
        Ok(())
    }

    fn report(&mut self) -> Result<()> {
        if self.found.is_none() {
            self.prompt
                .say(format_args!("The file '{}' was not found.", self.target))?;
        }
        self.prompt.say(format_args!(
            "\nSearch duration : {} ms",
            self.elapsed.as_millis()
        ))?;
        Ok(())
    }
}
