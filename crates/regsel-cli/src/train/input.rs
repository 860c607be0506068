use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use regsel_models::config::{ModelTrainerConfig, DEFAULT_MODEL_PATH};

use crate::util::validate_data_file;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TrainConfig {
    pub train_data: String,
    pub test_data: String,
    pub output_file: String,
    pub has_headers: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            train_data: String::from("artifacts/train.csv"),
            test_data: String::from("artifacts/test.csv"),
            output_file: String::from(DEFAULT_MODEL_PATH),
            has_headers: true,
        }
    }
}

impl TrainConfig {
    /// Load the JSON config at `config_path` (or start from defaults) and
    /// apply command line overrides, then check the data files exist.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                let config_json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                serde_json::from_str(&config_json)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => TrainConfig::default(),
        };

        if let Some(train_data) = matches.get_one::<String>("train_data") {
            config.train_data = train_data.clone();
        }
        if let Some(test_data) = matches.get_one::<String>("test_data") {
            config.test_data = test_data.clone();
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = output_file.clone();
        }
        if matches.get_flag("no_headers") {
            config.has_headers = false;
        }

        validate_data_file(&config.train_data, "Training data")?;
        validate_data_file(&config.test_data, "Test data")?;

        Ok(config)
    }

    pub fn trainer_config(&self) -> ModelTrainerConfig {
        ModelTrainerConfig::new(&self.output_file)
    }
}
