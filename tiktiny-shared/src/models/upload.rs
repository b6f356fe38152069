use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Multipart field carrying the media file.
pub const VIDEO_FIELD: &str = "video";

/// Audience classification offered by the upload form.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum AgeRating {
    #[default]
    #[serde(rename = "PG")]
    #[strum(serialize = "PG")]
    Pg,
    #[serde(rename = "12")]
    #[strum(serialize = "12")]
    Twelve,
    #[serde(rename = "15")]
    #[strum(serialize = "15")]
    Fifteen,
    #[serde(rename = "18")]
    #[strum(serialize = "18")]
    Eighteen,
}

/// Text fields of an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMetadata {
    pub title: String,
    pub publisher: String,
    pub producer: String,
    pub genre: String,
    pub age_rating: AgeRating,
}

impl UploadMetadata {
    /// Multipart text fields in wire order.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, String); 5] {
        [
            ("title", self.title.clone()),
            ("publisher", self.publisher.clone()),
            ("producer", self.producer.clone()),
            ("genre", self.genre.clone()),
            ("ageRating", self.age_rating.to_string()),
        ]
    }
}

/// File picked by the user, read into memory for the multipart body.
#[derive(Clone, PartialEq, Eq)]
pub struct VideoFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for VideoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
