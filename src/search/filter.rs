use std::ffi::OsStr;
use std::path::Path;

/// OS-reserved directories that are never descended into
pub const SPECIAL_DIRS: [&str; 3] = ["$Recycle.Bin", "$Windows.~BT", "$Windows.~WS"];

/// Predicate deciding which directories the walk skips
#[derive(Debug, Clone)]
pub struct SpecialDirFilter {
    names: Vec<String>,
}

impl Default for SpecialDirFilter {
    fn default() -> Self {
        Self {
            names: SPECIAL_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SpecialDirFilter {
    /// Add user-supplied names on top of the built-in set
    pub fn with_extra(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Exact, case-sensitive match on the final path component
    pub fn is_special(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.names.iter().any(|s| OsStr::new(s) == name))
    }
}
