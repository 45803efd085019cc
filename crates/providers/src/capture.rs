use crate::{CaptureFrame, FrameCapturer, ProviderError, Region};

/// Produces a solid-color frame of the requested size.
///
/// Stands in for a real screen grabber so the sampler path can run on
/// machines without a display server; swap in a real [`FrameCapturer`]
/// implementation to capture actual screen contents.
#[derive(Debug, Clone)]
pub struct TestPatternCapturer {
    pub color: [u8; 4],
}

impl Default for TestPatternCapturer {
    fn default() -> Self {
        Self {
            color: [32, 96, 160, 255],
        }
    }
}

#[async_trait::async_trait]
impl FrameCapturer for TestPatternCapturer {
    async fn capture(&self, region: Region) -> Result<CaptureFrame, ProviderError> {
        if region.width == 0 || region.height == 0 {
            return Err(ProviderError::Capture("empty capture region".into()));
        }
        let pixels = region.width as usize * region.height as usize;
        let mut rgba = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            rgba.extend_from_slice(&self.color);
        }
        Ok(CaptureFrame {
            width: region.width,
            height: region.height,
            rgba,
        })
    }
}
