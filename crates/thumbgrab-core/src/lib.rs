pub mod config;
pub mod logging;

pub mod batch;
pub mod error;
pub mod http;
pub mod naming;
pub mod preview;
pub mod storage;
pub mod thumbnail;

pub use error::ThumbnailError;
pub use thumbnail::Downloader;
