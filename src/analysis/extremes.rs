//! Single-pass scans over a dataset: noon digest and temperature extremes.

use crate::model::{WeatherDataset, WeatherRecord};

/// Hour of day (UTC) shown in the digest.
pub const DIGEST_HOUR: u32 = 12;

/// Hottest and coldest records of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub highest: WeatherRecord,
    pub lowest: WeatherRecord,
}

/// Records whose UTC hour is [`DIGEST_HOUR`], in dataset order.
pub fn noon_digest(dataset: &WeatherDataset) -> Vec<WeatherRecord> {
    dataset
        .iter()
        .filter(|r| r.hour() == DIGEST_HOUR)
        .cloned()
        .collect()
}

/// Maximum and minimum temperature records. Ties keep the earliest record.
///
/// Returns `None` for an empty dataset.
pub fn find_extremes(dataset: &WeatherDataset) -> Option<Extremes> {
    let mut iter = dataset.iter();
    let first = iter.next()?;
    let mut highest = first;
    let mut lowest = first;

    for record in iter {
        if record.temperature_c() > highest.temperature_c() {
            highest = record;
        }
        if record.temperature_c() < lowest.temperature_c() {
            lowest = record;
        }
    }

    Some(Extremes {
        highest: highest.clone(),
        lowest: lowest.clone(),
    })
}
