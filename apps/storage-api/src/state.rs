use std::sync::Arc;

use storage_lib::StorageWriter;

#[derive(Clone)]
pub struct AppState {
    pub writer: Arc<dyn StorageWriter>,
    pub env: String,
}

impl AppState {
    pub fn new(writer: Arc<dyn StorageWriter>, env: impl Into<String>) -> Self {
        Self {
            writer,
            env: env.into(),
        }
    }
}
