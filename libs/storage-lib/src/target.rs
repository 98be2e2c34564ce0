use std::fmt;
use std::path::{Path, PathBuf};

/// The single file this process writes to. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTarget {
    path: PathBuf,
}

impl WriteTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
