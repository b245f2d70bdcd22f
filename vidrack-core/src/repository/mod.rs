pub mod videos;

pub use videos::VideoRepository;
