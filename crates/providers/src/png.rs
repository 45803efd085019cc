use crate::{CaptureFrame, FrameEncoder, ProviderError};
use image::{ImageOutputFormat, RgbaImage};
use std::io::Cursor;

/// Encodes RGBA frames as PNG via the image crate.
#[derive(Debug, Default)]
pub struct PngFrameEncoder;

impl FrameEncoder for PngFrameEncoder {
    fn encode(&self, frame: &CaptureFrame) -> Result<Vec<u8>, ProviderError> {
        let image = RgbaImage::from_raw(frame.width, frame.height, frame.rgba.clone())
            .ok_or_else(|| {
                ProviderError::Encode("pixel buffer does not match frame dimensions".into())
            })?;
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageOutputFormat::Png)
            .map_err(|err| ProviderError::Encode(err.to_string()))?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_png_decodes_back_to_frame_dimensions() {
        use image::GenericImageView;

        let frame = CaptureFrame {
            width: 6,
            height: 3,
            rgba: vec![200u8; 6 * 3 * 4],
        };
        let bytes = PngFrameEncoder.encode(&frame).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (6, 3));
    }

    #[test]
    fn short_pixel_buffer_is_rejected() {
        let frame = CaptureFrame {
            width: 6,
            height: 3,
            rgba: vec![0u8; 7],
        };
        let err = PngFrameEncoder.encode(&frame).unwrap_err();
        assert!(matches!(err, ProviderError::Encode(_)));
    }
}
