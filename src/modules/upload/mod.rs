mod service;
pub mod types;

pub use service::{extension, handle, service};

/// What differs between the upload functions: naming defaults and where
/// the stored object lands.
pub trait Profile: Send + Sync {
    /// Name the gateway dispatches this function under.
    const NAME: &'static str;
    const DEFAULT_FILE_NAME: &'static str;
    const DEFAULT_EXTENSION: &'static str;

    /// Resolves the file type echoed back to the client, `None` when the
    /// function does not carry one.
    fn file_type(&self, requested: Option<String>) -> Option<String>;

    fn folder(&self, file_type: Option<&str>) -> &'static str;
}
