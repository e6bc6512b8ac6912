pub mod clock;
pub mod schedule;
pub mod watch_links;

pub use clock::{Clock, FixedClock, SystemClock};
pub use schedule::{
    count_overdue, group_by_series, sort_by_air_date, ScheduleBuilder, ALL_EPISODES_TITLE,
    UPCOMING_TITLE,
};
pub use watch_links::WatchLinks;
