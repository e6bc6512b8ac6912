use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Text format used for air dates on rendered pages.
pub const AIR_DATE_TEXT_FORMAT: &str = "%m/%d/%Y";

/// One aired or scheduled broadcast of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub series: String,
    pub season: u32,
    pub number: u32,
    pub title: String,
    /// `None` when the source left the air date unset. Unset dates order
    /// before every real date.
    #[serde(
        rename = "airdate",
        default,
        deserialize_with = "deserialize_air_date",
        serialize_with = "serialize_air_date"
    )]
    pub air_date: Option<NaiveDate>,
}

impl Episode {
    pub fn new(
        series: impl Into<String>,
        season: u32,
        number: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            series: series.into(),
            season,
            number,
            title: title.into(),
            air_date: None,
        }
    }

    /// Sets the air date; an invalid calendar day leaves it unset.
    pub fn aired(mut self, year: i32, month: u32, day: u32) -> Self {
        self.air_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn label(&self) -> String {
        format!("S{} : Ep. {}", self.season, self.number)
    }

    pub fn air_date_text(&self) -> String {
        self.air_date.map(format_air_date).unwrap_or_default()
    }
}

pub fn format_air_date(date: NaiveDate) -> String {
    date.format(AIR_DATE_TEXT_FORMAT).to_string()
}

pub fn parse_air_date_text(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), AIR_DATE_TEXT_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised air date '{0}'")]
pub struct AirDateError(pub String);

/// Parses a source `airdate` value into a calendar day in `tz`.
///
/// Accepts a bare `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DDTHH:MM:SS`. Blank values and the zero timestamp
/// `0001-01-01T00:00:00Z` mean "unset".
pub fn parse_air_date<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
) -> Result<Option<NaiveDate>, AirDateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        if is_zero_timestamp(&stamp.naive_utc()) {
            return Ok(None);
        }
        return Ok(Some(stamp.with_timezone(tz).date_naive()));
    }

    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        if is_zero_timestamp(&stamp) {
            return Ok(None);
        }
        return Ok(Some(stamp.date()));
    }

    Err(AirDateError(raw.to_string()))
}

fn is_zero_timestamp(stamp: &NaiveDateTime) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .is_some_and(|zero| *stamp == zero)
}

fn deserialize_air_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(raw) => parse_air_date(&raw, &Local).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn serialize_air_date<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
