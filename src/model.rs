//! Core record types shared by the generator, the analyzer and the report.
//!
//! This module holds types only: no I/O and no randomness.

use chrono::{DateTime, NaiveDate, Timelike, Utc};

/// Human-readable sky condition attached to a record when conditions are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCondition {
    ClearSky,
    FewClouds,
    ScatteredClouds,
    LightRain,
    ModerateRain,
}

impl SkyCondition {
    /// Every label, in the order the generator indexes them.
    pub const ALL: [SkyCondition; 5] = [
        SkyCondition::ClearSky,
        SkyCondition::FewClouds,
        SkyCondition::ScatteredClouds,
        SkyCondition::LightRain,
        SkyCondition::ModerateRain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::ClearSky => "clear sky",
            SkyCondition::FewClouds => "few clouds",
            SkyCondition::ScatteredClouds => "scattered clouds",
            SkyCondition::LightRain => "light rain",
            SkyCondition::ModerateRain => "moderate rain",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One simulated hourly observation.
///
/// `date` is derived from `timestamp` at construction and kept only for
/// display, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    timestamp: i64,
    date: NaiveDate,
    temperature_c: f64,
    condition: Option<SkyCondition>,
}

impl WeatherRecord {
    pub fn new(at: DateTime<Utc>, temperature_c: f64, condition: Option<SkyCondition>) -> Self {
        Self {
            timestamp: at.timestamp(),
            date: at.date_naive(),
            temperature_c,
            condition,
        }
    }

    /// Seconds since the Unix epoch (UTC).
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The record's date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn condition(&self) -> Option<SkyCondition> {
        self.condition
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        // Records are only built from valid DateTime<Utc> values.
        DateTime::from_timestamp(self.timestamp, 0).unwrap_or_default()
    }

    /// Hour of day in UTC, 0..=23.
    pub fn hour(&self) -> u32 {
        self.datetime().hour()
    }

    /// Time of day as `HH:MM:SS` (UTC).
    pub fn time_string(&self) -> String {
        self.datetime().format("%H:%M:%S").to_string()
    }

    pub(crate) fn set_temperature_c(&mut self, temperature_c: f64) {
        self.temperature_c = temperature_c;
    }
}

/// Ordered records in generation order: oldest day first, hour 0 -> 23 within a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherDataset {
    records: Vec<WeatherRecord>,
}

impl WeatherDataset {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WeatherRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature_c).collect()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut WeatherRecord> {
        self.records.get_mut(index)
    }
}

impl<'a> IntoIterator for &'a WeatherDataset {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<WeatherRecord> for WeatherDataset {
    fn from_iter<I: IntoIterator<Item = WeatherRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
