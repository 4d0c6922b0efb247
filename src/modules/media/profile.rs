use crate::modules::upload::Profile;

pub const DEFAULT_FILE_TYPE: &str = "image";
pub const PHOTOS_FOLDER: &str = "photos";
pub const VIDEOS_FOLDER: &str = "videos";

/// Photos and videos. The file type is passed through as given; only the
/// exact string `image` lands in the photos folder.
pub struct Media;

impl Profile for Media {
    const NAME: &'static str = "upload-media";
    const DEFAULT_FILE_NAME: &'static str = "media.jpg";
    const DEFAULT_EXTENSION: &'static str = "jpg";

    fn file_type(&self, requested: Option<String>) -> Option<String> {
        Some(requested.unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()))
    }

    fn folder(&self, file_type: Option<&str>) -> &'static str {
        match file_type {
            Some(DEFAULT_FILE_TYPE) => PHOTOS_FOLDER,
            _ => VIDEOS_FOLDER,
        }
    }
}
