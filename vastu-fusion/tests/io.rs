//! File-based report and config tests.

mod common;

use std::io::Write;

use common::*;
use tempfile::NamedTempFile;
use vastu_fusion::config::ConfigLoadError;
use vastu_fusion::io::{OutputFormat, Summary, format_report, read_report};
use vastu_fusion::matching::SearchMode;
use vastu_fusion::{Error, FusionConfig, Registrar};

#[test]
fn test_sample_report_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let readings = read_report(file.path()).unwrap();
    assert_eq!(readings.len(), 5);
    assert_eq!(readings[0].name, "0");
    assert_eq!(readings[0].beacons.len(), 25);
    assert_eq!(readings[4].name, "4");
}

#[test]
fn test_generated_report_round_trip() {
    let scene = Scene::generate(8, 3, 12);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(format_report(&scene.readings).as_bytes())
        .unwrap();

    let readings = read_report(file.path()).unwrap();
    assert_eq!(readings, scene.readings);
}

#[test]
fn test_summary_of_sample() {
    let registration = Registrar::default().register(sample_readings()).unwrap();
    let summary = Summary::from_registration(&registration);
    assert_eq!(summary.beacons, SAMPLE_BEACONS);
    assert_eq!(summary.max_distance, SAMPLE_MAX_DISTANCE);
    assert_eq!(summary.scanners.len(), 5);
    assert_eq!(summary.scanners[0].name, "0");

    let mut text = Vec::new();
    summary.write(&mut text, OutputFormat::Text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.starts_with("beacons: 79\nmax_distance: 3621\n"));
    assert!(text.contains("  1 at 68,-1246,-43\n"));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "alignment:\n  min_overlap: 6\n  search_mode: sweep\nregistration:\n  workers: 2"
    )
    .unwrap();

    let config = FusionConfig::load(file.path()).unwrap();
    assert_eq!(config.alignment.min_overlap, 6);
    assert_eq!(config.alignment.detection_range, 1000);
    assert_eq!(config.alignment.search_mode, SearchMode::Sweep);
    assert_eq!(config.registration.workers, 2);

    let registrar = Registrar::from_config(&config).unwrap();
    assert_eq!(registrar.config().workers, 2);
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "registration:\n  workers: 0").unwrap();

    let config = FusionConfig::load(file.path()).unwrap();
    assert!(matches!(
        Registrar::from_config(&config),
        Err(Error::InvalidConfig(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "alignment: {{ min_overlap: many }}").unwrap();
    assert!(matches!(
        FusionConfig::load(file.path()),
        Err(ConfigLoadError::Parse(_))
    ));
}

#[test]
fn test_shipped_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/config.yaml");
    let config = FusionConfig::load(&path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.alignment.min_overlap, 12);
    assert_eq!(config.registration.workers, 1);
}
