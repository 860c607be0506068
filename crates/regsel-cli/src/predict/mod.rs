pub mod input;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use ndarray::{s, Array1};
use std::fs::File;
use std::io::{self, Write};

use regsel_models::io::{load_array, load_object};
use regsel_models::metrics::r2_score;

use crate::util::delimiter_for;
use input::PredictConfig;

/// Predict every row of the input with the stored model and write the
/// predictions. Returns them as well.
pub fn run_prediction(config: &PredictConfig) -> Result<Array1<f64>> {
    let artifact = load_object(&config.model_path)?;
    log::info!(
        "Loaded {} model trained at {} (score {})",
        artifact.model_name,
        artifact.trained_at,
        artifact.score
    );

    let data = load_array(&config.inference_data, config.has_headers)
        .context("Failed to load inference data")?;

    let (features, target) = if config.has_target {
        if data.ncols() < 2 {
            anyhow::bail!(
                "--has-target needs at least 2 columns, got {}",
                data.ncols()
            );
        }
        let last = data.ncols() - 1;
        (
            data.slice(s![.., ..last]).to_owned(),
            Some(data.column(last).to_owned()),
        )
    } else {
        (data, None)
    };

    let predictions = artifact
        .predict(&features)
        .context("Failed to predict with stored model")?;

    if let Some(target) = target {
        let score = r2_score(&target, &predictions)?;
        log::info!("R2 on supplied targets: {}", score);
    }

    match &config.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            write_predictions(file, delimiter_for(path), &predictions)?;
            log::info!("Predictions written to {:?}", path);
        }
        None => write_predictions(io::stdout().lock(), b',', &predictions)?,
    }

    Ok(predictions)
}

pub fn write_predictions<W: Write>(out: W, delimiter: u8, predictions: &Array1<f64>) -> Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(delimiter).from_writer(out);
    wtr.write_record(["prediction"])?;
    for value in predictions.iter() {
        wtr.write_record([value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
