//! Smoke tests -- drive the binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;

fn weathersim() -> Command {
    let mut cmd = Command::cargo_bin("weathersim").unwrap();
    cmd.env_remove("WEATHERSIM_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    weathersim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Synthetic hourly temperature generator"));
}

#[test]
fn test_cli_version() {
    weathersim()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("weathersim"));
}

#[test]
fn test_no_arguments_runs_full_report() {
    weathersim()
        .assert()
        .success()
        .stdout(predicates::str::contains("Weather Records for the Last 7 Days (Mock Data)"))
        .stdout(predicates::str::contains("Temperature Analysis"))
        .stdout(predicates::str::contains("Highest Temperature Recorded: 40.0°C"))
        .stdout(predicates::str::contains("Lowest Temperature Recorded: 15.0°C"))
        .stdout(predicates::str::contains("Anomaly Detection"))
        .stdout(predicates::str::contains("Temperature was 15.0°C"))
        .stdout(predicates::str::contains("Temperature was 40.0°C"))
        .stdout(predicates::str::contains(", Weather: "));
}

#[test]
fn test_logs_stay_off_stdout() {
    weathersim()
        .arg("run")
        .assert()
        .success()
        .stdout(predicates::str::contains("Generating mock weather data").not())
        .stderr(predicates::str::contains(
            "Generating mock weather data for Latitude: 17.4138, Longitude: 78.3414...",
        ));
}

#[test]
fn test_debug_log_carries_anomaly_scores() {
    weathersim()
        .env("RUST_LOG", "weathersim=debug")
        .args(["run", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicates::str::contains("temperature anomaly"))
        .stderr(predicates::str::contains("direction=High"))
        .stderr(predicates::str::contains("direction=Low"))
        .stderr(predicates::str::contains("z_score="));
}

#[test]
fn test_run_flags_override_defaults() {
    weathersim()
        .args([
            "run",
            "--days",
            "2",
            "--seed",
            "5",
            "--no-conditions",
            "--no-injection",
            "--latitude",
            "-33.87",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Weather Records for the Last 2 Days (Mock Data)"))
        .stdout(predicates::str::contains(", Weather: ").not())
        .stdout(predicates::str::contains("Temperature was 40.0°C").not())
        .stderr(predicates::str::contains("Latitude: -33.87"));
}

#[test]
fn test_config_file_is_honoured() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("weathersim.toml");
    std::fs::write(
        &path,
        r#"
[generator]
days = 3
include_conditions = false
"#,
    )
    .unwrap();

    weathersim()
        .args(["run", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Weather Records for the Last 3 Days (Mock Data)"))
        .stdout(predicates::str::contains(", Weather: ").not());
}

#[test]
fn test_config_from_env_var() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("weathersim.toml");
    std::fs::write(&path, "[generator]\ndays = 2\n").unwrap();

    weathersim()
        .env("WEATHERSIM_CONFIG", &path)
        .arg("run")
        .assert()
        .success()
        .stdout(predicates::str::contains("Weather Records for the Last 2 Days (Mock Data)"))
        .stderr(predicates::str::contains("loaded simulation configuration"));
}

#[test]
fn test_broken_env_config_is_logged_and_skipped() {
    weathersim()
        .env("WEATHERSIM_CONFIG", "/nonexistent/weathersim.toml")
        .args(["run", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Weather Records for the Last 7 Days (Mock Data)"))
        .stderr(predicates::str::contains(
            "WEATHERSIM_CONFIG set but file could not be loaded, using defaults",
        ));

    weathersim()
        .env("WEATHERSIM_CONFIG", "/nonexistent/weathersim.toml")
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicates::str::contains("days = 7"))
        .stderr(predicates::str::contains("could not be loaded"));
}

#[test]
fn test_out_of_range_days_fails_cleanly() {
    weathersim()
        .args(["run", "--days", "4000000000", "--seed", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("generator.days must be within"));
}

#[test]
fn test_invalid_config_fails() {
    weathersim()
        .args(["run", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid configuration"));
}

#[test]
fn test_missing_config_file_fails() {
    weathersim()
        .args(["run", "--config", "/nonexistent/weathersim.toml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read config file"));
}

#[test]
fn test_show_config_prints_toml() {
    weathersim()
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicates::str::contains("[generator]"))
        .stdout(predicates::str::contains("days = 7"))
        .stdout(predicates::str::contains("anomaly_std_dev_multiplier = 2.0"));
}
