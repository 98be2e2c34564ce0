use async_trait::async_trait;

use crate::errors::StorageError;
use crate::target::WriteTarget;

#[async_trait]
pub trait StorageWriter: Send + Sync {
    /// Target every call to `write` lands on.
    fn target(&self) -> &WriteTarget;

    /// Replaces the full content of the target with `content`.
    async fn write(&self, content: &str) -> Result<(), StorageError>;
}
