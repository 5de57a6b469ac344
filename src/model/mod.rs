mod search;
mod volume;

pub use search::{ScanSummary, SearchOutcome};
pub use volume::{enumerate_drives, find_drive, DriveMap, LetterDrives, ProgressBasis, Volume};
