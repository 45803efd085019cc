//! Pure placement planning: tags to year/album destination segments.

use std::path::{Path, PathBuf};
use tunesort_providers::TrackTags;

pub const UNKNOWN_ALBUM: &str = "Unknown Album";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Decimal year, or empty for the unknown-year bucket.
    pub year_segment: String,
    pub album_segment: String,
}

/// Derives the destination segments from tags. Deterministic, no
/// filesystem access.
pub fn plan(tags: &TrackTags) -> Placement {
    let year_segment = tags.year.map(|y| y.to_string()).unwrap_or_default();
    let album_segment = tags
        .album
        .as_deref()
        .map(str::trim)
        .filter(|album| !album.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());
    Placement {
        year_segment,
        album_segment,
    }
}

impl Placement {
    /// Album directory under `root`. An empty year segment is collapsed,
    /// leaving the album directly under the root.
    pub fn album_dir(&self, root: &Path) -> PathBuf {
        let mut dir = root.to_path_buf();
        if !self.year_segment.is_empty() {
            dir.push(&self.year_segment);
        }
        dir.push(&self.album_segment);
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(year: Option<u32>, album: Option<&str>) -> TrackTags {
        TrackTags {
            year,
            album: album.map(str::to_string),
        }
    }

    #[test]
    fn identical_tags_yield_identical_placements() {
        let a = plan(&tags(Some(2001), Some("X")));
        let b = plan(&tags(Some(2001), Some("X")));
        assert_eq!(a, b);
        assert_eq!(a.year_segment, "2001");
        assert_eq!(a.album_segment, "X");
    }

    #[test]
    fn different_albums_diverge_under_the_same_year() {
        let a = plan(&tags(Some(2001), Some("X")));
        let b = plan(&tags(Some(2001), Some("Y")));
        assert_eq!(a.year_segment, b.year_segment);
        assert_ne!(a.album_segment, b.album_segment);
        assert_ne!(
            a.album_dir(Path::new("/dest")),
            b.album_dir(Path::new("/dest"))
        );
    }

    #[test]
    fn missing_year_collapses_to_the_root() {
        let placement = plan(&tags(None, Some("X")));
        assert_eq!(placement.year_segment, "");
        assert_eq!(placement.album_dir(Path::new("/dest")), Path::new("/dest/X"));
    }

    #[test]
    fn missing_or_blank_album_uses_the_sentinel() {
        assert_eq!(plan(&tags(Some(1999), None)).album_segment, UNKNOWN_ALBUM);
        assert_eq!(
            plan(&tags(Some(1999), Some("   "))).album_segment,
            UNKNOWN_ALBUM
        );
        assert_eq!(
            plan(&tags(Some(1999), None)).album_dir(Path::new("/dest")),
            Path::new("/dest/1999/Unknown Album")
        );
    }
}
