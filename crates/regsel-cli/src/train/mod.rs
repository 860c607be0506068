pub mod input;

use anyhow::{Context, Result};

use regsel_models::io::load_array;
use regsel_models::{ModelTrainer, TrainingSummary};

use input::TrainConfig;

pub fn run_training(config: &TrainConfig) -> Result<TrainingSummary> {
    let train = load_array(&config.train_data, config.has_headers)
        .context("Failed to load training data")?;
    log::info!(
        "Loaded {} training rows with {} columns",
        train.nrows(),
        train.ncols()
    );
    let test = load_array(&config.test_data, config.has_headers)
        .context("Failed to load test data")?;
    log::info!("Loaded {} test rows", test.nrows());

    let start_time = std::time::Instant::now();
    let summary = ModelTrainer::new(config.trainer_config()).train(&train, &test)?;
    log::info!("Training completed in {:?}", start_time.elapsed());

    Ok(summary)
}
