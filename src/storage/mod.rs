pub mod memory_storage;
pub mod storage_client;

pub use memory_storage::{ExecutedQuery, RecordingGraphStore};
pub use storage_client::GraphStore;

pub use crate::core::StorageError;
