//! Plain-text rendering of an analysis result.

use std::fmt::Write;

use crate::analysis::{AnalysisReport, AnomalyScan};
use crate::model::WeatherRecord;

const RULE_WIDTH: usize = 50;

/// Notice printed instead of a report when there is nothing to analyze.
pub fn render_empty() -> String {
    "\nNo weather data to analyze.\n".to_string()
}

/// Render the full report. `days` only feeds the headings.
pub fn render(report: &AnalysisReport, days: u32) -> String {
    let mut out = String::new();

    section(&mut out, &format!("Weather Records for the Last {} Days (Mock Data)", days));
    for record in &report.noon_digest {
        out.push_str(&format_digest_line(record));
        out.push('\n');
    }

    section(&mut out, "Temperature Analysis");
    let ext = &report.extremes;
    let _ = writeln!(
        out,
        "Highest Temperature Recorded: {}°C on {}",
        format_temp(ext.highest.temperature_c()),
        ext.highest.date_string()
    );
    let _ = writeln!(
        out,
        "Lowest Temperature Recorded: {}°C on {}",
        format_temp(ext.lowest.temperature_c()),
        ext.lowest.date_string()
    );

    if let Some(scan) = &report.anomalies {
        render_anomalies(&mut out, scan, days);
    }

    out
}

fn render_anomalies(out: &mut String, scan: &AnomalyScan, days: u32) {
    section(out, "Anomaly Detection");
    let _ = writeln!(out, "Average temperature over the period: {:.2}°C", scan.mean);
    let _ = writeln!(out, "Standard Deviation: {:.2}°C", scan.std_dev);
    let _ = writeln!(
        out,
        "Anomaly thresholds: < {:.2}°C or > {:.2}°C",
        scan.low_threshold, scan.high_threshold
    );

    if scan.anomalies.is_empty() {
        let _ = writeln!(
            out,
            "\nNo significant temperature anomalies detected in the last {} days.",
            days
        );
        return;
    }

    out.push_str("\nFound the following temperature anomalies:\n");
    for anomaly in &scan.anomalies {
        let r = &anomaly.record;
        let _ = writeln!(
            out,
            " -> Anomaly Detected on {} at {} UTC: Temperature was {}°C",
            r.date_string(),
            r.time_string(),
            format_temp(r.temperature_c())
        );
    }
}

/// One noon digest line, with the sky condition when the record has one.
pub fn format_digest_line(record: &WeatherRecord) -> String {
    let mut line = format!(
        "Date: {}, Time: {} UTC, Temperature: {}°C",
        record.date_string(),
        record.time_string(),
        format_temp(record.temperature_c())
    );
    if let Some(condition) = record.condition() {
        let _ = write!(line, ", Weather: {}", condition);
    }
    line
}

/// Shortest form of a temperature, but always with a decimal point (`40.0`, `25.31`).
pub fn format_temp(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn section(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = write!(out, "\n{rule}\n{title}\n{rule}\n");
}
