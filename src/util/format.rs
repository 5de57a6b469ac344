/// Format a byte count as a human-readable string (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Whole mebibytes, truncated (used by the drive listing)
pub fn megabytes(bytes: u64) -> u64 {
    bytes / (1024 * 1024)
}

/// Integer percentage of `value` relative to `total`, clamped to 0..=100.
///
/// A zero total yields 0 rather than dividing by zero.
pub fn percent(value: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let p = (value as u128 * 100) / total as u128;
    p.min(100) as u64
}
