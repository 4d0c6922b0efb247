use crate::modules::upload::Profile;

pub const FOLDER: &str = "documents";

pub struct Document;

impl Profile for Document {
    const NAME: &'static str = "upload-document";
    const DEFAULT_FILE_NAME: &'static str = "document.pdf";
    const DEFAULT_EXTENSION: &'static str = "pdf";

    fn file_type(&self, _: Option<String>) -> Option<String> {
        None
    }

    fn folder(&self, _: Option<&str>) -> &'static str {
        FOLDER
    }
}
