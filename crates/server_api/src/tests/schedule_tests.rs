use super::*;

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("date")
}

fn episode(series: &str, season: u32, number: u32, aired: (i32, u32, u32)) -> Episode {
    Episode::new(series, season, number, format!("{series} {season}x{number}"))
        .aired(aired.0, aired.1, aired.2)
}

fn labels(group: &SeriesGroup) -> Vec<&str> {
    group
        .episode_items
        .iter()
        .map(|item| item.label.as_str())
        .collect()
}

#[test]
fn group_by_series_partitions_every_episode_once() {
    let episodes = vec![
        episode("Suits", 3, 1, (2013, 7, 16)),
        episode("Castle", 6, 1, (2013, 9, 23)),
        episode("Suits", 3, 2, (2013, 7, 23)),
        episode("Castle", 6, 2, (2013, 9, 30)),
        episode("White Collar", 5, 1, (2013, 10, 17)),
    ];

    let groups = group_by_series(&episodes);
    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        ["Castle", "Suits", "White Collar"]
    );
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), episodes.len());
    for (series, grouped) in &groups {
        assert!(grouped.iter().all(|episode| episode.series == *series));
    }
    assert_eq!(groups["Suits"][0].number, 1);
    assert_eq!(groups["Suits"][1].number, 2);
}

#[test]
fn sort_by_air_date_is_stable_and_leaves_input_untouched() {
    let episodes = vec![
        episode("X", 1, 3, (2014, 3, 1)),
        episode("X", 1, 1, (2014, 1, 1)),
        episode("X", 1, 2, (2014, 3, 1)),
        Episode::new("X", 1, 9, "Unscheduled"),
    ];
    let refs: Vec<&Episode> = episodes.iter().collect();

    let sorted = sort_by_air_date(&refs);
    let numbers: Vec<u32> = sorted.iter().map(|episode| episode.number).collect();
    assert_eq!(numbers, [9, 1, 3, 2]);

    let original: Vec<u32> = refs.iter().map(|episode| episode.number).collect();
    assert_eq!(original, [3, 1, 2, 9]);
}

#[test]
fn count_overdue_excludes_episodes_airing_today() {
    let today = day(2014, 3, 10);
    let episodes = vec![
        episode("X", 1, 1, (2014, 3, 9)),
        episode("X", 1, 2, (2014, 3, 10)),
        episode("X", 1, 3, (2014, 3, 11)),
    ];
    assert_eq!(count_overdue(&episodes, today), 1);
}

#[test]
fn unset_air_date_counts_as_overdue() {
    let episodes = vec![Episode::new("X", 1, 1, "Pilot")];
    assert_eq!(count_overdue(&episodes, day(1970, 1, 1)), 1);
}

#[test]
fn past_pilot_shows_badge_on_all_episodes_view() {
    let episodes = vec![Episode::new("X", 1, 1, "Pilot").aired(2020, 1, 1)];
    let view = ScheduleBuilder::default().build_all_episodes_view(&episodes, day(2020, 6, 1));

    assert_eq!(view.title, ALL_EPISODES_TITLE);
    assert_eq!(view.series_groups.len(), 1);
    let group = &view.series_groups[0];
    assert_eq!(group.title, "X");
    assert_eq!(group.badge_count, 1);
    assert!(group.show_badge);
    assert_eq!(
        group.episode_items,
        vec![EpisodeItem {
            label: "S1 : Ep. 1".to_string(),
            title: "Pilot".to_string(),
            air_date_text: "01/01/2020".to_string(),
            watch_link: "#".to_string(),
        }]
    );
}

#[test]
fn past_pilot_leaves_upcoming_group_empty() {
    let episodes = vec![Episode::new("X", 1, 1, "Pilot").aired(2020, 1, 1)];
    let view = ScheduleBuilder::default().build_upcoming_view(&episodes, day(2020, 6, 1));

    assert_eq!(view.title, UPCOMING_TITLE);
    assert_eq!(view.series_groups.len(), 1);
    assert_eq!(view.series_groups[0].title, "X");
    assert!(view.series_groups[0].episode_items.is_empty());
}

#[test]
fn upcoming_view_lists_future_episodes_in_date_order_without_badges() {
    let episodes = vec![
        Episode::new("Y", 2, 2, "Later").aired(2099, 2, 1),
        Episode::new("Y", 2, 1, "Sooner").aired(2099, 1, 1),
    ];
    let view = ScheduleBuilder::default().build_upcoming_view(&episodes, day(2026, 10, 18));

    let group = &view.series_groups[0];
    assert_eq!(labels(group), ["S2 : Ep. 1", "S2 : Ep. 2"]);
    assert_eq!(group.episode_items[0].air_date_text, "01/01/2099");
    assert_eq!(group.badge_count, 0);
    assert!(!group.show_badge);
}

#[test]
fn upcoming_view_skips_today_and_unset_dates() {
    let today = day(2014, 3, 10);
    let episodes = vec![
        episode("X", 1, 1, (2014, 3, 10)),
        episode("X", 1, 2, (2014, 3, 11)),
        Episode::new("X", 1, 3, "Unscheduled"),
    ];
    let view = ScheduleBuilder::default().build_upcoming_view(&episodes, today);
    assert_eq!(labels(&view.series_groups[0]), ["S1 : Ep. 2"]);
}

#[test]
fn empty_collection_builds_empty_views() {
    let builder = ScheduleBuilder::default();
    let store = storage::EpisodeStore::load(&b""[..]).expect("load");

    let all = builder.build_all_episodes_view(store.snapshot(), day(2020, 1, 1));
    let upcoming = builder.build_upcoming_view(store.snapshot(), day(2020, 1, 1));
    assert!(all.series_groups.is_empty());
    assert!(upcoming.series_groups.is_empty());
}

#[test]
fn unmapped_series_gets_placeholder_link() {
    let links: WatchLinks = [("Castle", "https://abc.go.com/shows/castle")]
        .into_iter()
        .collect();
    let episodes = vec![
        episode("Castle", 6, 1, (2099, 1, 1)),
        episode("Suits", 3, 1, (2099, 1, 1)),
    ];
    let builder = ScheduleBuilder::new(links);

    for view in [
        builder.build_all_episodes_view(&episodes, day(2020, 1, 1)),
        builder.build_upcoming_view(&episodes, day(2020, 1, 1)),
    ] {
        assert_eq!(
            view.series_groups[0].episode_items[0].watch_link,
            "https://abc.go.com/shows/castle"
        );
        assert_eq!(view.series_groups[1].episode_items[0].watch_link, "#");
    }
}

#[test]
fn series_groups_are_ordered_by_name() {
    let episodes = vec![
        episode("White Collar", 5, 1, (2014, 1, 1)),
        episode("Castle", 6, 1, (2014, 1, 1)),
        episode("Suits", 3, 1, (2014, 1, 1)),
    ];
    let view = ScheduleBuilder::default().build_all_episodes_view(&episodes, day(2014, 1, 1));
    let titles: Vec<&str> = view
        .series_groups
        .iter()
        .map(|group| group.title.as_str())
        .collect();
    assert_eq!(titles, ["Castle", "Suits", "White Collar"]);
}

#[test]
fn all_episodes_view_lists_everything_by_default() {
    let today = day(2014, 3, 10);
    let episodes = vec![
        episode("X", 1, 4, (2014, 3, 24)),
        episode("X", 1, 1, (2014, 3, 3)),
        episode("X", 1, 3, (2014, 3, 17)),
        episode("X", 1, 2, (2014, 3, 10)),
    ];
    let view = ScheduleBuilder::default().build_all_episodes_view(&episodes, today);

    let group = &view.series_groups[0];
    assert_eq!(
        labels(group),
        ["S1 : Ep. 1", "S1 : Ep. 2", "S1 : Ep. 3", "S1 : Ep. 4"]
    );
    assert_eq!(group.badge_count, 1);
}

#[test]
fn upcoming_cap_keeps_past_episodes_and_limits_future_ones() {
    let today = day(2014, 3, 10);
    let episodes = vec![
        episode("X", 1, 1, (2014, 2, 24)),
        episode("X", 1, 2, (2014, 3, 3)),
        episode("X", 1, 3, (2014, 3, 10)),
        episode("X", 1, 4, (2014, 3, 17)),
        episode("X", 1, 5, (2014, 3, 24)),
    ];
    let view = ScheduleBuilder::default()
        .with_max_upcoming(Some(2))
        .build_all_episodes_view(&episodes, today);

    let group = &view.series_groups[0];
    assert_eq!(
        labels(group),
        ["S1 : Ep. 1", "S1 : Ep. 2", "S1 : Ep. 3", "S1 : Ep. 4"]
    );
    assert_eq!(group.badge_count, 2);
}

#[test]
fn zero_upcoming_cap_still_shows_next_episode() {
    let today = day(2014, 3, 10);
    let episodes = vec![
        episode("X", 1, 1, (2014, 3, 3)),
        episode("X", 1, 2, (2014, 3, 17)),
        episode("X", 1, 3, (2014, 3, 24)),
    ];
    let view = ScheduleBuilder::default()
        .with_max_upcoming(Some(0))
        .build_all_episodes_view(&episodes, today);

    assert_eq!(
        labels(&view.series_groups[0]),
        ["S1 : Ep. 1", "S1 : Ep. 2"]
    );
}

#[test]
fn duplicate_episodes_pass_through() {
    let episodes = vec![
        episode("X", 1, 1, (2014, 3, 3)),
        episode("X", 1, 1, (2014, 3, 3)),
    ];
    let view = ScheduleBuilder::default().build_all_episodes_view(&episodes, day(2014, 3, 10));
    assert_eq!(view.series_groups[0].episode_items.len(), 2);
    assert_eq!(view.series_groups[0].badge_count, 2);
}
