use super::{object_url, Error, Storage, StoredObject};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

#[derive(Clone, Debug)]
pub struct StoredRecord {
    pub object: StoredObject,
    pub url: String,
    pub stored_at: DateTime<Utc>,
}

/// Keeps every uploaded object in process memory.
#[derive(Debug)]
pub struct MemoryStorage {
    base_url: String,
    records: Mutex<Vec<StoredRecord>>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            records: Mutex::new(vec![]),
        }
    }

    pub async fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, object: StoredObject) -> Result<String, Error> {
        let url = object_url(&self.base_url, &object);

        self.records.lock().await.push(StoredRecord {
            object,
            url: url.clone(),
            stored_at: Utc::now(),
        });

        tracing::debug!("Stored {} in memory", url);
        Ok(url)
    }
}
