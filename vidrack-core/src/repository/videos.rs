use std::fmt;
use std::sync::Arc;

use tracing::debug;

use vidrack_model::{
    Video, VideoId, VideoRecord, validate_identifier, validate_video,
};

use crate::database::ports::VideoDao;
use crate::error::Result;

/// Validation-then-delegate facade over a [`VideoDao`].
///
/// Every operation validates its input first; input that fails never reaches
/// the DAO. DAO failures come back classified, so no error crosses this
/// boundary unclassified and nothing panics across it. Not-found is an
/// absent value, not an error.
#[derive(Clone)]
pub struct VideoRepository {
    dao: Arc<dyn VideoDao>,
}

impl fmt::Debug for VideoRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoRepository").finish_non_exhaustive()
    }
}

impl VideoRepository {
    pub fn new(dao: Arc<dyn VideoDao>) -> Self {
        Self { dao }
    }

    /// Validates and persists a new video, returning the store-assigned id.
    pub async fn create(&self, video: &Video) -> Result<VideoId> {
        validate_video(video)?;

        let record = VideoRecord::from(video.clone());
        let id = self.dao.create(&record).await?;
        debug!("Created video {}", id);

        Ok(id)
    }

    /// The visible video with this id; `Ok(None)` when nothing matches.
    pub async fn read_one_by_id(&self, id: &VideoId) -> Result<Option<Video>> {
        validate_identifier(id.as_str(), "videoId")?;

        let record = self.dao.read_one_by_id(id).await?;
        Ok(record.map(Video::from))
    }

    /// Ids of every visible video; an empty catalog reads as an empty list.
    pub async fn read_many_ids(&self) -> Result<Vec<VideoId>> {
        self.dao.read_many_ids().await
    }

    /// Paginated id listing. The signature is the contract; execution is not
    /// available yet and surfaces the DAO's unimplemented error.
    pub async fn read_limited_ids(
        &self,
        first: u32,
        count: u32,
    ) -> Result<Vec<VideoId>> {
        self.dao.read_limited_ids(first, count).await
    }

    /// Declared, not yet available. Validates, then surfaces the DAO's
    /// unimplemented error.
    pub async fn update(&self, video: &Video) -> Result<()> {
        validate_video(video)?;

        let record = VideoRecord::from(video.clone());
        self.dao.update(&record).await
    }

    /// Declared, not yet available. Validates, then surfaces the DAO's
    /// unimplemented error.
    pub async fn delete(&self, video: &Video) -> Result<()> {
        validate_video(video)?;

        let record = VideoRecord::from(video.clone());
        self.dao.delete(&record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ports::MockVideoDao;
    use crate::error::CatalogError;
    use vidrack_model::{EditStatus, UNKNOWN_VIDEO_ID, ValidationError};

    #[tokio::test]
    async fn create_validates_before_touching_the_dao() {
        let mut dao = MockVideoDao::new();
        dao.expect_create().times(0);

        let repo = VideoRepository::new(Arc::new(dao));
        let err = repo
            .create(&Video::new("", "intro.mp4"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::Empty {
                field: "title"
            })
        ));
    }

    #[tokio::test]
    async fn create_hands_the_dao_a_sentinel_record_and_returns_its_id() {
        let mut dao = MockVideoDao::new();
        dao.expect_create()
            .withf(|record| {
                record.video_id == UNKNOWN_VIDEO_ID
                    && record.edit_status.is_none()
            })
            .times(1)
            .returning(|_| Ok(VideoId::new("17")));

        let repo = VideoRepository::new(Arc::new(dao));
        let id = repo
            .create(&Video::new("Intro", "intro.mp4"))
            .await
            .unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[tokio::test]
    async fn read_one_maps_record_back_to_domain() {
        let mut dao = MockVideoDao::new();
        dao.expect_read_one_by_id()
            .withf(|id| id.as_str() == "4")
            .returning(|_| {
                Ok(Some(VideoRecord {
                    video_id: "4".to_string(),
                    title: "Intro".to_string(),
                    file_path: "intro.mp4".to_string(),
                    edit_status: Some(EditStatus::Editable),
                }))
            });

        let repo = VideoRepository::new(Arc::new(dao));
        let video = repo
            .read_one_by_id(&VideoId::new("4"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(video.video_id.as_str(), "4");
        assert_eq!(video.title, "Intro");
        assert_eq!(video.file_path, "intro.mp4");
    }

    #[tokio::test]
    async fn read_one_not_found_is_an_absent_value_not_an_error() {
        let mut dao = MockVideoDao::new();
        dao.expect_read_one_by_id().returning(|_| Ok(None));

        let repo = VideoRepository::new(Arc::new(dao));
        let found = repo.read_one_by_id(&VideoId::new("99")).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn read_one_rejects_blank_id_without_touching_the_dao() {
        let mut dao = MockVideoDao::new();
        dao.expect_read_one_by_id().times(0);

        let repo = VideoRepository::new(Arc::new(dao));
        let err = repo
            .read_one_by_id(&VideoId::new("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn read_many_ids_empty_catalog_yields_empty_vec() {
        let mut dao = MockVideoDao::new();
        dao.expect_read_many_ids().returning(|| Ok(Vec::new()));

        let repo = VideoRepository::new(Arc::new(dao));
        let ids = repo.read_many_ids().await.unwrap();
        assert_eq!(ids, Vec::<VideoId>::new());
    }

    #[tokio::test]
    async fn storage_errors_pass_through_classified() {
        let mut dao = MockVideoDao::new();
        dao.expect_read_many_ids().returning(|| {
            Err(CatalogError::Storage("connection reset".to_string()))
        });

        let repo = VideoRepository::new(Arc::new(dao));
        let err = repo.read_many_ids().await.unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }

    #[tokio::test]
    async fn unimplemented_is_distinguishable_from_validation() {
        let mut dao = MockVideoDao::new();
        dao.expect_read_limited_ids().returning(|_, _| {
            Err(CatalogError::Unimplemented("read_limited_ids"))
        });

        let repo = VideoRepository::new(Arc::new(dao));
        let err = repo.read_limited_ids(0, 10).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Unimplemented("read_limited_ids")
        ));
    }

    #[tokio::test]
    async fn update_validates_then_surfaces_the_dao_error() {
        let mut dao = MockVideoDao::new();
        dao.expect_update()
            .times(1)
            .returning(|_| Err(CatalogError::Unimplemented("update")));

        let repo = VideoRepository::new(Arc::new(dao));
        let valid = Video::with_id(VideoId::new("3"), "Intro", "intro.mp4");
        assert!(matches!(
            repo.update(&valid).await,
            Err(CatalogError::Unimplemented("update"))
        ));
    }

    #[tokio::test]
    async fn delete_rejects_invalid_video_before_the_dao_sees_it() {
        let mut dao = MockVideoDao::new();
        dao.expect_delete().times(0);

        let repo = VideoRepository::new(Arc::new(dao));
        let invalid = Video::with_id(VideoId::new("3"), "Intro", "");
        assert!(matches!(
            repo.delete(&invalid).await,
            Err(CatalogError::Validation(_))
        ));
    }
}
