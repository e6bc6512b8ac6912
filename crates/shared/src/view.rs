use serde::{Deserialize, Serialize};

/// Placeholder link for series without a configured viewing site.
pub const WATCH_LINK_PLACEHOLDER: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleViewModel {
    pub title: String,
    pub series_groups: Vec<SeriesGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub title: String,
    pub show_badge: bool,
    pub badge_count: usize,
    pub episode_items: Vec<EpisodeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeItem {
    pub label: String,
    pub title: String,
    pub air_date_text: String,
    pub watch_link: String,
}
