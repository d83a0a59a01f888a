use crate::{domain::Order, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Storage trait for persisting the committed order as a single named record
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Overwrites the persisted order wholesale
    async fn save_order(&self, order: &Order) -> Result<()>;

    /// Loads the persisted order.
    ///
    /// Returns `Ok(None)` when no record exists and an error when the record
    /// exists but cannot be read or parsed.
    async fn load_order(&self) -> Result<Option<Order>>;

    /// Removes the persisted record if present
    async fn clear_order(&self) -> Result<()>;

    /// Checks if the backend has been initialized
    async fn is_initialized(&self) -> bool;
}
