use chrono::{Local, NaiveDate};

/// Source of "today" for overdue and upcoming comparisons.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Calendar day in the process's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
