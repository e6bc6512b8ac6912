use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::view::WATCH_LINK_PLACEHOLDER;

/// Series name to external viewing-site URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchLinks(BTreeMap<String, String>);

impl WatchLinks {
    pub fn new(links: BTreeMap<String, String>) -> Self {
        Self(links)
    }

    /// Returns the configured URL for `series`, or `"#"` when none is set.
    pub fn resolve_watch_link(&self, series: &str) -> &str {
        self.0
            .get(series)
            .map(String::as_str)
            .unwrap_or(WATCH_LINK_PLACEHOLDER)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for WatchLinks
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(series, url)| (series.into(), url.into()))
                .collect(),
        )
    }
}
