use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub fn write(path: &Path, source: io::Error) -> Self {
        StorageError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Kind of the underlying system error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            StorageError::Write { source, .. } => source.kind(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            StorageError::Write { path, .. } => path,
        }
    }
}
