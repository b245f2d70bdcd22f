//! Core data model definitions shared across vidrack crates.
#![allow(missing_docs)]

pub mod record;
pub mod validation;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use record::{EditStatus, VideoRecord};
pub use validation::{
    MAX_IDENTIFIER_LEN, ValidationError, validate_identifier, validate_video,
};
pub use video::{UNKNOWN_VIDEO_ID, Video, VideoId};
