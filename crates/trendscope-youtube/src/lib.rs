//! Client for the trending-chart and category endpoints of the YouTube Data
//! API v3.

pub mod client;
pub mod error;
pub mod normalize;
pub(crate) mod retry;
pub mod types;

pub use client::{TrendingVideos, YoutubeClient};
pub use error::YoutubeError;
pub use normalize::to_raw_row;
pub use types::{VideoCategory, VideoItem, VideoListResponse};
