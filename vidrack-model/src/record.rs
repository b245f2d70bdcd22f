use serde::{Deserialize, Serialize};

use crate::video::{UNKNOWN_VIDEO_ID, Video, VideoId};

/// Visibility marker used for soft deletion.
///
/// `Hidden` rows stay in the store but are excluded from every read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditStatus {
    Editable,
    Hidden,
}

impl EditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditStatus::Editable => "editable",
            EditStatus::Hidden => "hidden",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "editable" => Some(EditStatus::Editable),
            "hidden" => Some(EditStatus::Hidden),
            _ => None,
        }
    }
}

impl std::fmt::Display for EditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row-shaped form of a [`Video`] as the `videos` table stores it.
///
/// `edit_status` is `None` on the way into the store; the data layer supplies
/// the `editable` default on insert. Reads always carry the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_status: Option<EditStatus>,
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        // An unassigned id is carried as the well-known sentinel, never as
        // whatever empty value the caller happened to hold.
        let video_id = if video.video_id.is_unknown() {
            UNKNOWN_VIDEO_ID.to_string()
        } else {
            video.video_id.into_string()
        };

        VideoRecord {
            video_id,
            title: video.title,
            file_path: video.file_path,
            edit_status: None,
        }
    }
}

impl From<VideoRecord> for Video {
    fn from(record: VideoRecord) -> Self {
        Video {
            video_id: VideoId::new(record.video_id),
            title: record.title,
            file_path: record.file_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_to_record_leaves_edit_status_unset() {
        let video = Video::new("Tears of Steel", "tears.mp4");
        let record = VideoRecord::from(video);
        assert_eq!(record.edit_status, None);
        assert_eq!(record.video_id, "unknown");
    }

    #[test]
    fn record_to_domain_drops_edit_status() {
        let record = VideoRecord {
            video_id: "7".to_string(),
            title: "Elephants Dream".to_string(),
            file_path: "elephants.mp4".to_string(),
            edit_status: Some(EditStatus::Hidden),
        };
        let video = Video::from(record);
        assert_eq!(video.video_id.as_str(), "7");
        assert_eq!(video.title, "Elephants Dream");
        assert_eq!(video.file_path, "elephants.mp4");
    }

    #[test]
    fn round_trip_preserves_all_three_fields() {
        let original = Video::with_id(VideoId::new("19"), "Cosmos Laundromat", "cosmos.mp4");
        let round_tripped = Video::from(VideoRecord::from(original.clone()));
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn record_round_trip_preserves_the_three_columns() {
        let original = VideoRecord {
            video_id: "23".to_string(),
            title: "Spring".to_string(),
            file_path: "spring.mp4".to_string(),
            edit_status: None,
        };
        let round_tripped = VideoRecord::from(Video::from(original.clone()));
        assert_eq!(round_tripped.video_id, original.video_id);
        assert_eq!(round_tripped.title, original.title);
        assert_eq!(round_tripped.file_path, original.file_path);
    }

    #[test]
    fn empty_id_normalizes_to_sentinel() {
        let video = Video::with_id(VideoId::new(""), "Intro", "intro.mp4");
        let record = VideoRecord::from(video);
        assert_eq!(record.video_id, UNKNOWN_VIDEO_ID);
    }

    #[test]
    fn edit_status_string_codec_is_exhaustive() {
        assert_eq!(EditStatus::parse("editable"), Some(EditStatus::Editable));
        assert_eq!(EditStatus::parse("hidden"), Some(EditStatus::Hidden));
        assert_eq!(EditStatus::parse("archived"), None);
        assert_eq!(EditStatus::Editable.as_str(), "editable");
        assert_eq!(EditStatus::Hidden.as_str(), "hidden");
    }
}
