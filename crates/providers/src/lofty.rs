use crate::{ProviderError, TagReader, TrackTags};
use lofty::{ItemKey, TaggedFileExt};
use std::path::Path;

/// Reads album/year from embedded audio tags via lofty.
///
/// lofty does blocking file I/O, so decoding runs on the blocking pool.
#[derive(Debug, Default)]
pub struct LoftyTagReader;

#[async_trait::async_trait]
impl TagReader for LoftyTagReader {
    async fn read_tags(&self, path: &Path) -> Result<TrackTags, ProviderError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let tagged = lofty::read_from_path(&path)
                .map_err(|err| ProviderError::Decode(err.to_string()))?;
            let tag = tagged
                .primary_tag()
                .or_else(|| tagged.first_tag())
                .ok_or_else(|| ProviderError::Decode("no tags present".into()))?;

            let album = tag
                .get_string(&ItemKey::AlbumTitle)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            let year = tag
                .get_string(&ItemKey::Year)
                .or_else(|| tag.get_string(&ItemKey::RecordingDate))
                .and_then(parse_year);

            Ok(TrackTags { year, album })
        })
        .await
        .map_err(|err| ProviderError::Decode(err.to_string()))?
    }
}

// Accepts plain years ("2001") as well as date-style values ("2001-05-17").
fn parse_year(value: &str) -> Option<u32> {
    let digits: String = value.trim().chars().take(4).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_handles_dates_and_garbage() {
        assert_eq!(parse_year("2001"), Some(2001));
        assert_eq!(parse_year("2001-05-17"), Some(2001));
        assert_eq!(parse_year(" 1999 "), Some(1999));
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year(""), None);
    }

    #[tokio::test]
    async fn read_tags_rejects_non_audio_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-audio.mp3");
        std::fs::write(&path, b"just some bytes").unwrap();

        let err = LoftyTagReader.read_tags(&path).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
