use std::sync::Arc;

use vidrack_core::database::{Database, PostgresVideoDao};
use vidrack_core::repository::VideoRepository;

/// Shared handler state: the repository every route goes through, plus the
/// database handle the health check pings.
#[derive(Clone, Debug)]
pub struct AppState {
    pub repository: VideoRepository,
    pub database: Option<Database>,
}

impl AppState {
    /// Production wiring: one pool, one DAO, one repository.
    pub fn new(database: Database) -> Self {
        let dao = Arc::new(PostgresVideoDao::new(database.pool().clone()));
        Self {
            repository: VideoRepository::new(dao),
            database: Some(database),
        }
    }

    /// Wiring for tests that substitute their own DAO; no pool exists, so
    /// the health check skips the ping.
    pub fn with_repository(repository: VideoRepository) -> Self {
        Self {
            repository,
            database: None,
        }
    }
}
