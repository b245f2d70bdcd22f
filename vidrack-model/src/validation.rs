use thiserror::Error;

use crate::video::Video;

/// Widest value the `videos` identifier columns accept, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// Why a field failed validation. Always the caller's fault, never the
/// store's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field: '{field}' is required")]
    Empty { field: &'static str },

    #[error("Field: '{field}' exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// The JSON name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field } => field,
            ValidationError::TooLong { field, .. } => field,
        }
    }
}

/// Checks one textual identifier: non-blank once trimmed, within the column
/// width untrimmed. The value itself is never altered or truncated.
pub fn validate_identifier(
    value: &str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_IDENTIFIER_LEN,
        });
    }
    Ok(())
}

/// Checks the identifiers a [`Video`] carries. The first failure wins and
/// names its field.
///
/// A not-yet-persisted id (empty or the sentinel) is exempt; an assigned id
/// is held to the same rules as the other fields.
pub fn validate_video(video: &Video) -> Result<(), ValidationError> {
    if !video.video_id.is_unknown() {
        validate_identifier(video.video_id.as_str(), "videoId")?;
    }
    validate_identifier(&video.title, "title")?;
    validate_identifier(&video.file_path, "filePath")?;
    Ok(())
}
