pub mod ports;
pub mod postgres;
pub mod videos;

pub use ports::VideoDao;
pub use postgres::{Database, PoolStats};
pub use videos::PostgresVideoDao;
