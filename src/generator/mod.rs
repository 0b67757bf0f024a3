//! Synthetic hourly temperature generation.
//!
//! Temperatures follow a downward parabola peaking at noon plus uniform
//! noise, then two fixed outliers are written over the result so the
//! analyzer always has something to find.

pub mod noise;

use chrono::{DateTime, Days, Duration, NaiveTime, Utc};
use tracing::{debug, info, warn};

use crate::config::{GeneratorConfig, InjectionConfig, SimulationConfig};
use crate::model::{SkyCondition, WeatherDataset, WeatherRecord};
use noise::NoiseSource;

/// Generate a dataset for the `days` whole UTC days before `anchor`'s date.
///
/// Records run oldest day first, hour 0 upwards within a day. The last
/// record is the final hour of yesterday relative to `anchor`. `days` and
/// `hours_per_day` are capped at `MAX_DAYS` and 24, so an unvalidated config
/// still yields distinct, hourly timestamps.
pub fn generate<N>(config: &SimulationConfig, anchor: DateTime<Utc>, noise: &mut N) -> WeatherDataset
where
    N: NoiseSource + ?Sized,
{
    let loc = &config.location;
    info!(
        latitude = loc.latitude,
        longitude = loc.longitude,
        "Generating mock weather data for Latitude: {}, Longitude: {}...",
        loc.latitude,
        loc.longitude
    );

    let gen = &config.generator;
    let today = anchor.date_naive();
    let hours_per_day = gen.capped_hours_per_day();
    let mut records = Vec::with_capacity(config.record_count());

    for offset in (1..=gen.capped_days()).rev() {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            warn!(offset, "day falls outside the supported calendar, skipping");
            continue;
        };
        let midnight = day.and_time(NaiveTime::default()).and_utc();
        for hour in 0..hours_per_day {
            let at = midnight + Duration::hours(i64::from(hour));
            records.push(simulate_hour(gen, at, hour, noise));
        }
    }

    let mut dataset = WeatherDataset::new(records);
    inject_anomalies(&mut dataset, &config.injection);

    info!(records = dataset.len(), "Mock data generation complete.");
    dataset
}

/// Noise-free temperature for an hour of the day.
pub fn baseline_temperature(gen: &GeneratorConfig, hour: u32) -> f64 {
    let offset = f64::from(hour) - 12.0;
    gen.base_temp_c + offset * offset / gen.fluctuation_factor
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn simulate_hour<N>(gen: &GeneratorConfig, at: DateTime<Utc>, hour: u32, noise: &mut N) -> WeatherRecord
where
    N: NoiseSource + ?Sized,
{
    let jitter = noise.next_in_range(-gen.noise_bound_c, gen.noise_bound_c);
    let temperature = round2(baseline_temperature(gen, hour) + jitter);

    let condition = if gen.include_conditions {
        Some(pick_condition(noise))
    } else {
        None
    };

    WeatherRecord::new(at, temperature, condition)
}

fn pick_condition<N>(noise: &mut N) -> SkyCondition
where
    N: NoiseSource + ?Sized,
{
    let n = SkyCondition::ALL.len();
    let idx = noise.next_in_range(0.0, n as f64).floor() as usize;
    SkyCondition::ALL[idx.min(n - 1)]
}

/// Overwrite the configured indices with fixed outliers.
///
/// Skipped entirely unless the dataset is longer than the highest index.
fn inject_anomalies(dataset: &mut WeatherDataset, injection: &InjectionConfig) {
    if !injection.enabled {
        return;
    }
    let highest = injection.cold_index.max(injection.hot_index);
    if dataset.len() <= highest {
        debug!(
            records = dataset.len(),
            highest_index = highest,
            "dataset too short, skipping anomaly injection"
        );
        return;
    }

    for (index, temp) in [
        (injection.cold_index, injection.cold_temp_c),
        (injection.hot_index, injection.hot_temp_c),
    ] {
        if let Some(record) = dataset.get_mut(index) {
            debug!(index, temperature = temp, "injecting anomaly");
            record.set_temperature_c(temp);
        }
    }
}
