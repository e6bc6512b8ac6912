use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
};

use shared::{domain::Episode, error::LoadError};
use tracing::info;

/// Read-only episode collection loaded once at startup.
///
/// Cloning is cheap and every clone shares the same snapshot.
#[derive(Debug, Clone)]
pub struct EpisodeStore {
    episodes: Arc<[Episode]>,
}

impl EpisodeStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::load(BufReader::new(file))?;
        info!(path = %path.display(), count = store.len(), "loaded episodes");
        Ok(store)
    }

    /// Parses the first JSON document in the stream as an array of episodes.
    /// An empty stream or a `null` document yields an empty store; anything
    /// after the first document is ignored.
    pub fn load<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        let mut documents =
            serde_json::Deserializer::from_slice(&raw).into_iter::<Option<Vec<Episode>>>();
        let episodes = match documents.next() {
            Some(document) => document?.unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self::from_episodes(episodes))
    }

    pub fn from_episodes(episodes: Vec<Episode>) -> Self {
        Self {
            episodes: episodes.into(),
        }
    }

    pub fn snapshot(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
