use crate::{
    domain::Order,
    error::{ReorderError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-process storage holding the serialized record in memory.
///
/// Records are kept as JSON text so loads go through the same parsing path
/// as durable backends.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with raw record text
    pub fn with_raw_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    /// Returns the raw record text, if any
    pub fn raw_record(&self) -> Option<String> {
        self.record.lock().ok().and_then(|guard| guard.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.record
            .lock()
            .map_err(|_| ReorderError::StorageError("memory record lock poisoned".to_string()))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn save_order(&self, order: &Order) -> Result<()> {
        let json = serde_json::to_string(order)?;
        *self.lock()? = Some(json);
        Ok(())
    }

    async fn load_order(&self) -> Result<Option<Order>> {
        let raw = self.lock()?.clone();
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn clear_order(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemId};

    #[tokio::test]
    async fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load_order().await.unwrap(), None);

        let order = Order::new(vec![Item::new(ItemId::new("x").unwrap(), "X", "")]).unwrap();
        storage.save_order(&order).await.unwrap();

        assert_eq!(storage.load_order().await.unwrap(), Some(order));
        assert!(storage.raw_record().unwrap().contains("\"x\""));
    }

    #[tokio::test]
    async fn test_memory_malformed_record() {
        let storage = MemoryStorage::with_raw_record("[{\"id\": 3}]");
        assert!(storage.load_order().await.is_err());

        storage.clear_order().await.unwrap();
        assert_eq!(storage.load_order().await.unwrap(), None);
    }
}
