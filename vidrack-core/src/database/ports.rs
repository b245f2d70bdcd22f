use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use vidrack_model::{VideoId, VideoRecord};

use crate::error::Result;

/// Port over one logical table of videos.
///
/// PostgreSQL is the only production backend; tests substitute their own.
/// Every read honors the soft-delete filter: hidden records do not exist as
/// far as this port is concerned.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VideoDao: Send + Sync {
    /// Inserts a record, defaulting the edit status to editable, and returns
    /// the store-assigned id.
    async fn create(&self, record: &VideoRecord) -> Result<VideoId>;

    /// The visible record with this id; `None` when no such row exists.
    async fn read_one_by_id(
        &self,
        id: &VideoId,
    ) -> Result<Option<VideoRecord>>;

    /// Ids of every visible record.
    async fn read_many_ids(&self) -> Result<Vec<VideoId>>;

    /// Paginated id listing. Declared for contract parity; the backing query
    /// does not exist yet and callers receive an unimplemented error.
    async fn read_limited_ids(
        &self,
        first: u32,
        count: u32,
    ) -> Result<Vec<VideoId>>;

    /// Declared, not implemented.
    async fn update(&self, record: &VideoRecord) -> Result<()>;

    /// Declared, not implemented.
    async fn delete(&self, record: &VideoRecord) -> Result<()>;
}
