//! Capability providers for tag decoding, frame capture and frame encoding.
//!
//! The organizer core depends only on the traits defined here; concrete
//! decoder/capture libraries never leak into it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub mod capture;
pub mod fixed;
pub mod lofty;
pub mod noop;
pub mod png;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("not implemented")]
    NotImplemented,
    #[error("metadata unavailable: {0}")]
    Decode(String),
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Tag fields the organizer cares about. Absent fields are not errors;
/// a file with no tag block at all is reported as [`ProviderError::Decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTags {
    pub year: Option<u32>,
    pub album: Option<String>,
}

/// Screen rectangle to capture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One captured frame: RGBA, 4 bytes per pixel, row-major.
#[derive(Debug, Clone)]
pub struct CaptureFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[async_trait::async_trait]
pub trait TagReader: Send + Sync {
    async fn read_tags(&self, path: &Path) -> Result<TrackTags, ProviderError>;
}

#[async_trait::async_trait]
pub trait FrameCapturer: Send + Sync {
    async fn capture(&self, region: Region) -> Result<CaptureFrame, ProviderError>;
}

pub trait FrameEncoder: Send + Sync {
    fn encode(&self, frame: &CaptureFrame) -> Result<Vec<u8>, ProviderError>;
}
