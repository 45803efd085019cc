use crate::{ProviderError, TagReader, TrackTags};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory tag source keyed by exact path. Any path without an entry
/// reports a decode failure, like a file with no tag block.
#[derive(Debug, Default)]
pub struct FixedTagReader {
    tags: HashMap<PathBuf, TrackTags>,
}

impl FixedTagReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, path: impl Into<PathBuf>, tags: TrackTags) -> Self {
        self.tags.insert(path.into(), tags);
        self
    }
}

#[async_trait::async_trait]
impl TagReader for FixedTagReader {
    async fn read_tags(&self, path: &Path) -> Result<TrackTags, ProviderError> {
        self.tags
            .get(path)
            .cloned()
            .ok_or_else(|| ProviderError::Decode("no tags present".into()))
    }
}
