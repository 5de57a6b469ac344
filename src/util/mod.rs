mod format;

pub use format::{format_size, megabytes, percent};
