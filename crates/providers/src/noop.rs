use crate::{CaptureFrame, FrameCapturer, ProviderError, Region, TagReader, TrackTags};
use std::path::Path;

#[derive(Debug, Default)]
pub struct NoopTagReader;

#[async_trait::async_trait]
impl TagReader for NoopTagReader {
    async fn read_tags(&self, _path: &Path) -> Result<TrackTags, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}

#[derive(Debug, Default)]
pub struct NoopCapturer;

#[async_trait::async_trait]
impl FrameCapturer for NoopCapturer {
    async fn capture(&self, _region: Region) -> Result<CaptureFrame, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}
