use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::{
    domain::Episode,
    view::{EpisodeItem, ScheduleViewModel, SeriesGroup},
};
use tracing::debug;

use crate::watch_links::WatchLinks;

pub const ALL_EPISODES_TITLE: &str = "TV Schedule";
pub const UPCOMING_TITLE: &str = "Upcoming Episodes";

/// Builds the schedule pages from an episode snapshot.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    pub watch_links: WatchLinks,
    /// Caps how many not-yet-aired episodes each series lists on the
    /// all-episodes page. `None` lists everything. `Some(n)` still lists
    /// every past episode, then at most `n` episodes airing today or later;
    /// the next airing episode is always shown, so `Some(0)` behaves like
    /// `Some(1)`.
    pub max_upcoming: Option<usize>,
}

impl ScheduleBuilder {
    pub fn new(watch_links: WatchLinks) -> Self {
        Self {
            watch_links,
            max_upcoming: None,
        }
    }

    pub fn with_max_upcoming(mut self, max_upcoming: Option<usize>) -> Self {
        self.max_upcoming = max_upcoming;
        self
    }

    pub fn build_all_episodes_view(
        &self,
        episodes: &[Episode],
        today: NaiveDate,
    ) -> ScheduleViewModel {
        let series_groups: Vec<SeriesGroup> = group_by_series(episodes)
            .into_iter()
            .map(|(series, grouped)| {
                let badge_count = count_overdue(grouped.iter().copied(), today);
                let upcoming_cap = self.max_upcoming.map(|limit| limit.max(1));

                let mut listed_upcoming = 0;
                let mut episode_items = Vec::with_capacity(grouped.len());
                for episode in sort_by_air_date(&grouped) {
                    if let Some(cap) = upcoming_cap {
                        if !is_overdue(episode, today) {
                            if listed_upcoming == cap {
                                break;
                            }
                            listed_upcoming += 1;
                        }
                    }
                    episode_items.push(self.episode_item(episode));
                }

                SeriesGroup {
                    title: series.to_string(),
                    show_badge: badge_count > 0,
                    badge_count,
                    episode_items,
                }
            })
            .collect();

        debug!(%today, groups = series_groups.len(), "built all-episodes view");
        ScheduleViewModel {
            title: ALL_EPISODES_TITLE.to_string(),
            series_groups,
        }
    }

    pub fn build_upcoming_view(
        &self,
        episodes: &[Episode],
        today: NaiveDate,
    ) -> ScheduleViewModel {
        let series_groups: Vec<SeriesGroup> = group_by_series(episodes)
            .into_iter()
            .map(|(series, grouped)| {
                let episode_items = sort_by_air_date(&grouped)
                    .into_iter()
                    .filter(|episode| is_upcoming(episode, today))
                    .map(|episode| self.episode_item(episode))
                    .collect();

                SeriesGroup {
                    title: series.to_string(),
                    show_badge: false,
                    badge_count: 0,
                    episode_items,
                }
            })
            .collect();

        debug!(%today, groups = series_groups.len(), "built upcoming view");
        ScheduleViewModel {
            title: UPCOMING_TITLE.to_string(),
            series_groups,
        }
    }

    fn episode_item(&self, episode: &Episode) -> EpisodeItem {
        EpisodeItem {
            label: episode.label(),
            title: episode.title.clone(),
            air_date_text: episode.air_date_text(),
            watch_link: self
                .watch_links
                .resolve_watch_link(&episode.series)
                .to_string(),
        }
    }
}

/// Partitions episodes by series. Groups iterate in series-name order and
/// keep input order within each group.
pub fn group_by_series(episodes: &[Episode]) -> BTreeMap<&str, Vec<&Episode>> {
    let mut groups: BTreeMap<&str, Vec<&Episode>> = BTreeMap::new();
    for episode in episodes {
        groups
            .entry(episode.series.as_str())
            .or_default()
            .push(episode);
    }
    groups
}

/// Stable ascending sort by air date into a new list. Unset dates come first.
pub fn sort_by_air_date<'a>(episodes: &[&'a Episode]) -> Vec<&'a Episode> {
    let mut sorted = episodes.to_vec();
    sorted.sort_by_key(|episode| episode.air_date);
    sorted
}

pub fn count_overdue<'a, I>(episodes: I, today: NaiveDate) -> usize
where
    I: IntoIterator<Item = &'a Episode>,
{
    episodes
        .into_iter()
        .filter(|episode| is_overdue(episode, today))
        .count()
}

fn is_overdue(episode: &Episode, today: NaiveDate) -> bool {
    episode.air_date.map_or(true, |aired| aired < today)
}

fn is_upcoming(episode: &Episode, today: NaiveDate) -> bool {
    episode.air_date.is_some_and(|aired| aired > today)
}

#[cfg(test)]
#[path = "tests/schedule_tests.rs"]
mod tests;
