mod memory;
mod mock;

pub use memory::{MemoryStorage, StoredRecord};
pub use mock::MockStorage;

use async_trait::async_trait;

pub const BASE_URL: &str = "https://storage.example.com";

#[derive(Debug)]
pub enum Error {
    UploadFailed,
}

/// An object handed to a storage backend. `content` is the base64 text exactly
/// as the client sent it.
#[derive(Clone, Debug)]
pub struct StoredObject {
    pub folder: String,
    pub key: String,
    pub content: String,
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores the object and returns the URL it is reachable under.
    async fn put(&self, object: StoredObject) -> Result<String, Error>;
}

pub fn object_url(base_url: &str, object: &StoredObject) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        object.folder,
        object.key
    )
}
