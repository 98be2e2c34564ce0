use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::errors::StorageError;
use crate::target::WriteTarget;
use crate::traits::StorageWriter;

/// Permission bits for files created by [`FileWriter`] (before umask).
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Writes straight to the target path: truncate, then write.
///
/// No fsync and no temp-file rename, so a failed write may leave the file
/// truncated or partially written.
#[derive(Debug, Clone)]
pub struct FileWriter {
    target: WriteTarget,
}

impl FileWriter {
    pub fn new(target: WriteTarget) -> Self {
        Self { target }
    }
}

#[async_trait]
impl StorageWriter for FileWriter {
    fn target(&self) -> &WriteTarget {
        &self.target
    }

    async fn write(&self, content: &str) -> Result<(), StorageError> {
        let path = self.target.path();

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(DEFAULT_FILE_MODE);

        let mut file = options
            .open(path)
            .await
            .map_err(|e| StorageError::write(path, e))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| StorageError::write(path, e))?;

        // tokio buffers writes on a blocking thread; flush waits for them
        file.flush()
            .await
            .map_err(|e| StorageError::write(path, e))?;

        Ok(())
    }
}
