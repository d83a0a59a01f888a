use crate::{
    config::ReorderConfig,
    domain::Order,
    error::{ReorderError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: one pretty-printed JSON record per store
pub struct FileStorage {
    root_path: PathBuf,
    record_name: String,
}

impl FileStorage {
    const STORE_DIR: &'static str = ".reorder";
    const RECORD_NAME: &'static str = "item_order";

    /// Creates a new FileStorage under the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::STORE_DIR),
            record_name: Self::RECORD_NAME.to_string(),
        }
    }

    /// Creates a FileStorage whose directory and record name come from config
    pub fn from_config(config: &ReorderConfig) -> Self {
        Self {
            root_path: config.store_dir.clone(),
            record_name: config.record_name.clone(),
        }
    }

    /// Overrides the record name (the file stem of the persisted order)
    pub fn with_record_name(mut self, name: impl Into<String>) -> Self {
        self.record_name = name.into();
        self
    }

    fn record_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json", self.record_name))
    }

    fn staging_file(&self) -> PathBuf {
        self.root_path.join(format!(".{}.json.tmp", self.record_name))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn save_order(&self, order: &Order) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(order)?;

        // Stage then rename so readers never see a partial record
        let staging = self.staging_file();
        fs::write(&staging, json).await?;
        if let Err(err) = fs::rename(&staging, self.record_file()).await {
            let _ = fs::remove_file(&staging).await;
            return Err(ReorderError::IoError(err));
        }

        Ok(())
    }

    async fn load_order(&self) -> Result<Option<Order>> {
        let record_file = self.record_file();

        if !record_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&record_file).await?;
        let order: Order = serde_json::from_str(&contents)?;

        Ok(Some(order))
    }

    async fn clear_order(&self) -> Result<()> {
        let record_file = self.record_file();

        if record_file.exists() {
            fs::remove_file(record_file).await?;
        }
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemId};
    use tempfile::TempDir;

    fn sample_order() -> Order {
        Order::new(vec![
            Item::new(ItemId::new("b").unwrap(), "Bravo", "second"),
            Item::new(ItemId::new("a").unwrap(), "Alpha", "first"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_storage_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(!storage.is_initialized().await);

        storage.initialize().await.unwrap();

        assert!(storage.is_initialized().await);
        assert!(!storage.record_file().exists());
    }

    #[tokio::test]
    async fn test_order_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let order = sample_order();
        storage.save_order(&order).await.unwrap();

        let loaded = storage.load_order().await.unwrap();
        assert_eq!(loaded, Some(order));
        assert!(!storage.staging_file().exists());
    }

    #[tokio::test]
    async fn test_load_missing_record() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert_eq!(storage.load_order().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_malformed_record() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        std::fs::write(storage.record_file(), "{ not json").unwrap();

        let result = storage.load_order().await;
        assert!(matches!(result, Err(ReorderError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.save_order(&sample_order()).await.unwrap();

        let shorter =
            Order::new(vec![Item::new(ItemId::new("z").unwrap(), "Zulu", "")]).unwrap();
        storage.save_order(&shorter).await.unwrap();

        assert_eq!(storage.load_order().await.unwrap(), Some(shorter));
    }

    #[tokio::test]
    async fn test_record_name_override() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).with_record_name("board_a");

        storage.save_order(&sample_order()).await.unwrap();

        assert!(temp_dir.path().join(".reorder/board_a.json").exists());

        let other = FileStorage::new(temp_dir.path()).with_record_name("board_b");
        assert_eq!(other.load_order().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.save_order(&sample_order()).await.unwrap();
        storage.clear_order().await.unwrap();
        assert_eq!(storage.load_order().await.unwrap(), None);

        // Clearing an absent record is fine
        storage.clear_order().await.unwrap();
    }
}
