use super::{object_url, Error, Storage, StoredObject};
use async_trait::async_trait;

/// Hands out synthetic URLs without writing anything anywhere.
#[derive(Clone, Debug)]
pub struct MockStorage {
    base_url: String,
}

impl MockStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn put(&self, object: StoredObject) -> Result<String, Error> {
        let url = object_url(&self.base_url, &object);
        tracing::debug!("Mock upload of {}/{} -> {}", object.folder, object.key, url);
        Ok(url)
    }
}
