use anyhow::Result;
use clap::ArgMatches;
use std::path::PathBuf;

use crate::util::validate_data_file;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictConfig {
    pub model_path: PathBuf,
    pub inference_data: String,
    pub output_file: Option<PathBuf>,
    pub has_headers: bool,
    pub has_target: bool,
}

impl PredictConfig {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let model_path = match matches.get_one::<PathBuf>("model_path") {
            Some(path) => path.clone(),
            None => anyhow::bail!("A trained model is required (--model)"),
        };
        if !model_path.exists() {
            anyhow::bail!("Model file does not exist: {:?}", model_path);
        }

        let inference_data = match matches.get_one::<String>("inference_data") {
            Some(path) => path.clone(),
            None => anyhow::bail!("Input data is required (--inference_data)"),
        };
        validate_data_file(&inference_data, "Inference data")?;

        Ok(PredictConfig {
            model_path,
            inference_data,
            output_file: matches.get_one::<PathBuf>("output_file").cloned(),
            has_headers: !matches.get_flag("no_headers"),
            has_target: matches.get_flag("has_target"),
        })
    }
}
