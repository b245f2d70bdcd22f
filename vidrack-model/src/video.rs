use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel identifier carried by videos the store has not assigned a key to
/// yet.
pub const UNKNOWN_VIDEO_ID: &str = "unknown";

/// Strongly typed video identifier.
///
/// Holds the store-assigned key rendered as a string, or the well-known
/// [`UNKNOWN_VIDEO_ID`] sentinel for videos that have not been persisted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        VideoId(id.into())
    }

    /// The sentinel id for not-yet-persisted videos.
    pub fn unknown() -> Self {
        VideoId(UNKNOWN_VIDEO_ID.to_string())
    }

    /// True for ids that do not name a persisted row. The empty string and
    /// the sentinel both mean "not yet assigned".
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty() || self.0 == UNKNOWN_VIDEO_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        VideoId(id)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        VideoId(id.to_string())
    }
}

/// A catalog entry as clients see it.
///
/// `file_path` is relative; clients resolve it against their own playback
/// base. Exactly these three fields exist, and deserialization rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Video {
    pub video_id: VideoId,
    pub title: String,
    pub file_path: String,
}

impl Video {
    /// Builds a not-yet-persisted video carrying the sentinel id.
    pub fn new(title: impl Into<String>, file_path: impl Into<String>) -> Self {
        Video {
            video_id: VideoId::unknown(),
            title: title.into(),
            file_path: file_path.into(),
        }
    }

    pub fn with_id(
        video_id: VideoId,
        title: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Video {
            video_id,
            title: title.into(),
            file_path: file_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_video_carries_sentinel_id() {
        let video = Video::new("Big Buck Bunny", "bunny/trailer.mp4");
        assert!(video.video_id.is_unknown());
        assert_eq!(video.video_id.as_str(), UNKNOWN_VIDEO_ID);
    }

    #[test]
    fn empty_id_counts_as_unknown() {
        assert!(VideoId::new("").is_unknown());
        assert!(!VideoId::new("42").is_unknown());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let video = Video::with_id(VideoId::new("42"), "Sintel", "sintel.mp4");
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "videoId": "42",
                "title": "Sintel",
                "filePath": "sintel.mp4",
            })
        );
    }

    #[test]
    fn rejects_unknown_fields_on_deserialization() {
        let body = r#"{"videoId":"1","title":"t","filePath":"p","director":"x"}"#;
        let err = serde_json::from_str::<Video>(body).unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{err}");
    }

    #[test]
    fn rejects_missing_fields_on_deserialization() {
        let body = r#"{"videoId":"1","title":"t"}"#;
        let err = serde_json::from_str::<Video>(body).unwrap_err();
        assert!(err.to_string().contains("filePath"), "{err}");
    }
}
