//! Dataset analysis: noon digest, extremes and standard-deviation anomalies.
//!
//! `analyze` only computes. Turning the result into text is the job of
//! `crate::report`.

pub mod extremes;

use tracing::{debug, info};

use crate::detect::anomaly::{Band, TimeSeries};
use crate::detect::{DetectError, Direction};
use crate::model::{WeatherDataset, WeatherRecord};
use extremes::{find_extremes, noon_digest, Extremes};

/// Everything the analyzer found in a non-empty dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub record_count: usize,
    pub noon_digest: Vec<WeatherRecord>,
    pub extremes: Extremes,
    /// Absent when the dataset has a single record.
    pub anomalies: Option<AnomalyScan>,
}

/// Statistics and outliers of the temperature series.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyScan {
    pub mean: f64,
    pub std_dev: f64,
    pub low_threshold: f64,
    pub high_threshold: f64,
    pub multiplier: f64,
    /// Anomalous records in dataset order.
    pub anomalies: Vec<Anomaly>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    pub record: WeatherRecord,
    pub direction: Direction,
    pub z_score: f64,
}

/// Analyze `dataset`, flagging records more than `multiplier` sample
/// standard deviations from the mean.
///
/// Returns `None` for an empty dataset.
pub fn analyze(dataset: &WeatherDataset, multiplier: f64) -> Option<AnalysisReport> {
    let Some(extremes) = find_extremes(dataset) else {
        info!("no weather data to analyze");
        return None;
    };

    let noon_digest = noon_digest(dataset);
    debug!(entries = noon_digest.len(), "built noon digest");

    let anomalies = match scan_anomalies(dataset, multiplier) {
        Ok(scan) => {
            info!(
                mean = scan.mean,
                std_dev = scan.std_dev,
                anomalies = scan.anomalies.len(),
                "anomaly scan complete"
            );
            Some(scan)
        }
        Err(e) => {
            debug!(error = %e, "skipping anomaly detection");
            None
        }
    };

    Some(AnalysisReport {
        record_count: dataset.len(),
        noon_digest,
        extremes,
        anomalies,
    })
}

/// Mean, sample standard deviation, thresholds and the records outside them.
pub fn scan_anomalies(dataset: &WeatherDataset, multiplier: f64) -> Result<AnomalyScan, DetectError> {
    let band: Band = TimeSeries::new(dataset.temperatures()).band(multiplier)?;

    let anomalies = dataset
        .iter()
        .filter_map(|record| {
            let value = record.temperature_c();
            let direction = band.classify(value)?;
            let z_score = band.z_score(value);
            debug!(
                timestamp = record.timestamp(),
                temperature = value,
                ?direction,
                z_score,
                "temperature anomaly"
            );
            Some(Anomaly {
                record: record.clone(),
                direction,
                z_score,
            })
        })
        .collect();

    Ok(AnomalyScan {
        mean: band.mean,
        std_dev: band.std_dev,
        low_threshold: band.low,
        high_threshold: band.high,
        multiplier,
        anomalies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::generator::{generate, noise::NoiseSource};
    use chrono::{Duration, TimeZone, Utc};

    struct ZeroNoise;

    impl NoiseSource for ZeroNoise {
        fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
            (low + high) / 2.0
        }
    }

    fn dataset(temps: &[f64]) -> WeatherDataset {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        temps
            .iter()
            .enumerate()
            .map(|(i, &t)| WeatherRecord::new(start + Duration::hours(i as i64), t, None))
            .collect()
    }

    #[test]
    fn test_empty_dataset_yields_nothing() {
        assert!(analyze(&WeatherDataset::default(), 2.0).is_none());
    }

    #[test]
    fn test_single_record_skips_anomaly_scan() {
        let report = analyze(&dataset(&[19.5]), 2.0).unwrap();
        assert_eq!(report.record_count, 1);
        assert!(report.anomalies.is_none());
        assert_eq!(report.extremes.highest.temperature_c(), 19.5);
        assert_eq!(report.extremes.lowest.temperature_c(), 19.5);
    }

    #[test]
    fn test_outlier_inflates_std_dev_enough_to_hide() {
        let report = analyze(&dataset(&[10.0, 20.0, 90.0]), 2.0).unwrap();
        let scan = report.anomalies.unwrap();

        assert!((scan.mean - 40.0).abs() < 1e-9);
        assert!((scan.std_dev - 43.589).abs() < 1e-3);
        assert!((scan.high_threshold - 127.18).abs() < 1e-2);
        assert!((scan.low_threshold - -47.18).abs() < 1e-2);
        assert!(scan.anomalies.is_empty());
    }

    #[test]
    fn test_flags_both_sides_in_dataset_order() {
        let mut temps = vec![20.0; 20];
        temps[3] = 35.0;
        temps[11] = 5.0;
        let scan = analyze(&dataset(&temps), 2.0).unwrap().anomalies.unwrap();

        assert_eq!(scan.anomalies.len(), 2);
        assert_eq!(scan.anomalies[0].record.temperature_c(), 35.0);
        assert_eq!(scan.anomalies[0].direction, Direction::High);
        assert!(scan.anomalies[0].z_score > 2.0);
        assert_eq!(scan.anomalies[1].record.temperature_c(), 5.0);
        assert_eq!(scan.anomalies[1].direction, Direction::Low);
        assert!(scan.anomalies[1].z_score < -2.0);
    }

    #[test]
    fn test_zero_noise_statistics_match_formulas() {
        let mut cfg = SimulationConfig::default();
        cfg.generator.include_conditions = false;
        cfg.injection.enabled = false;
        let anchor = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let ds = generate(&cfg, anchor, &mut ZeroNoise);

        let temps = ds.temperatures();
        let n = temps.len() as f64;
        let mean = temps.iter().sum::<f64>() / n;
        let var = temps.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (n - 1.0);

        let scan = scan_anomalies(&ds, 2.0).unwrap();
        assert!((scan.mean - mean).abs() < 1e-9);
        assert!((scan.std_dev - var.sqrt()).abs() < 1e-9);
        // The daily curve averages 25 - 1156 / (24 * 20).
        assert!((scan.mean - 22.591_666).abs() < 1e-5);
    }

    #[test]
    fn test_injected_records_are_flagged() {
        let cfg = SimulationConfig::default();
        let anchor = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let ds = generate(&cfg, anchor, &mut crate::generator::noise::SeededNoise::new(2024));

        let report = analyze(&ds, cfg.analysis.anomaly_std_dev_multiplier).unwrap();
        let scan = report.anomalies.unwrap();
        let flagged: Vec<i64> = scan.anomalies.iter().map(|a| a.record.timestamp()).collect();

        assert!(flagged.contains(&ds.get(20).unwrap().timestamp()));
        assert!(flagged.contains(&ds.get(80).unwrap().timestamp()));
        assert_eq!(report.extremes.highest.temperature_c(), 40.0);
        assert_eq!(report.extremes.lowest.temperature_c(), 15.0);
        assert_eq!(report.noon_digest.len(), 7);
    }

    #[test]
    fn test_multiplier_widens_band() {
        let mut temps = vec![20.0; 20];
        temps[3] = 35.0;
        let ds = dataset(&temps);

        assert_eq!(scan_anomalies(&ds, 2.0).unwrap().anomalies.len(), 1);
        assert!(scan_anomalies(&ds, 10.0).unwrap().anomalies.is_empty());
    }
}
