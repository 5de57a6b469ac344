use std::path::{Path, PathBuf};

use tracing::warn;

/// How the progress total of a volume is estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ProgressBasis {
    /// Whole capacity of the volume, free space included
    #[default]
    Capacity,
    /// Capacity minus free space
    Used,
}

/// A storage root that can be searched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Drive letter, or `None` for a plain directory root
    pub letter: Option<char>,
    pub root: PathBuf,
    pub capacity: u64,
    pub free: u64,
}

impl Volume {
    /// Probe `root`, returning `None` when it does not exist.
    ///
    /// Space queries that fail are logged and count as zero bytes; the
    /// progress computation copes with a zero total.
    pub fn probe(letter: Option<char>, root: impl Into<PathBuf>) -> Option<Self> {
        let root = root.into();
        if !root.exists() {
            return None;
        }

        let capacity = space_or_zero(&root, "capacity", |p| fs2::total_space(p));
        let free = space_or_zero(&root, "free space", |p| fs2::free_space(p));

        Some(Self {
            letter,
            root,
            capacity,
            free,
        })
    }

    /// Short name for listings: `C:` for drives, the root path otherwise
    pub fn label(&self) -> String {
        match self.letter {
            Some(letter) => format!("{}:", letter),
            None => self.root.display().to_string(),
        }
    }

    /// Bytes a full walk is expected to cover
    pub fn progress_total(&self, basis: ProgressBasis) -> u64 {
        match basis {
            ProgressBasis::Capacity => self.capacity,
            ProgressBasis::Used => self.capacity.saturating_sub(self.free),
        }
    }
}

fn space_or_zero(
    root: &Path,
    what: &str,
    query: impl Fn(&Path) -> std::io::Result<u64>,
) -> u64 {
    query(root).unwrap_or_else(|err| {
        warn!(root = %root.display(), error = %err, "could not read volume {}", what);
        0
    })
}

/// Maps drive letters to the paths they are mounted at
pub trait DriveMap {
    fn root_for(&self, letter: char) -> PathBuf;
}

/// Single-letter roots as the host OS names them (`C:/`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterDrives;

impl DriveMap for LetterDrives {
    fn root_for(&self, letter: char) -> PathBuf {
        PathBuf::from(format!("{}:/", letter))
    }
}

/// All existing drives, `A` through `Z`
pub fn enumerate_drives(drives: &impl DriveMap) -> Vec<Volume> {
    ('A'..='Z')
        .filter_map(|letter| Volume::probe(Some(letter), drives.root_for(letter)))
        .collect()
}

/// Look up one drive by letter (case-insensitive)
pub fn find_drive(drives: &impl DriveMap, letter: char) -> Option<Volume> {
    let letter = letter.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    Volume::probe(Some(letter), drives.root_for(letter))
}
