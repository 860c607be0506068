//! Integration tests for CLI config parsing and util helpers.

use std::path::Path;

use regsel_cli::train::input::TrainConfig;
use regsel_cli::util::{delimiter_for, validate_data_file};

// ---------------------------------------------------------------------------
// validate_data_file
// ---------------------------------------------------------------------------

#[test]
fn validate_tsv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_data_file(path.to_str().unwrap(), "Training data").is_ok());
}

#[test]
fn validate_csv_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.CSV");
    std::fs::File::create(&path).unwrap();
    assert!(validate_data_file(path.to_str().unwrap(), "Test data").is_ok());
}

#[test]
fn validate_wrong_extension_names_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::File::create(&path).unwrap();
    let err = validate_data_file(path.to_str().unwrap(), "Inference data").unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Inference data must be a .csv or .tsv table"));
}

#[test]
fn validate_nonexistent_file_names_the_table() {
    let err = validate_data_file("/nonexistent/path/data.tsv", "Test data").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Test data file does not exist: /nonexistent/path/data.tsv"
    );
}

#[test]
fn validate_rejects_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.csv");
    std::fs::create_dir(&path).unwrap();
    assert!(validate_data_file(path.to_str().unwrap(), "Training data").is_err());
}

#[test]
fn delimiter_follows_extension() {
    assert_eq!(delimiter_for(Path::new("out.tsv")), b'\t');
    assert_eq!(delimiter_for(Path::new("out.csv")), b',');
    assert_eq!(delimiter_for(Path::new("out")), b',');
}

// ---------------------------------------------------------------------------
// TrainConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn train_config_default_values() {
    let cfg = TrainConfig::default();
    assert_eq!(cfg.output_file, "artifacts/model.json");
    assert!(cfg.has_headers);
}

#[test]
fn train_config_round_trips_json() {
    let cfg = TrainConfig {
        train_data: "train.csv".to_string(),
        test_data: "test.csv".to_string(),
        output_file: "model.json".to_string(),
        has_headers: false,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: TrainConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}
