use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::config::ModelType;
use crate::error::ModelError;
use crate::models::regressor_trait::{predict_linear, LinearFit};

/// A selected, fitted model as written to disk.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelArtifact {
    pub model_name: String,
    pub model_type: ModelType,
    pub score: f64,
    pub n_features: usize,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub version: String,
    pub trained_at: String,
}

impl ModelArtifact {
    pub fn new(model_type: ModelType, fit: &LinearFit, score: f64) -> Self {
        ModelArtifact {
            model_name: model_type.name().to_string(),
            model_type,
            score,
            n_features: fit.n_features(),
            coefficients: fit.coefficients.to_vec(),
            intercept: fit.intercept,
            version: env!("CARGO_PKG_VERSION").to_string(),
            trained_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Predict one value per row; `x` must have `n_features` columns.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        predict_linear(x, ArrayView1::from(&self.coefficients[..]), self.intercept)
    }
}

/// Serialize `artifact` as JSON at `path`, creating parent directories and
/// replacing any existing file.
pub fn save_object<P: AsRef<Path>>(path: P, artifact: &ModelArtifact) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, artifact)
        .with_context(|| format!("Failed to serialize model to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write model to {:?}", path))?;
    Ok(())
}

pub fn load_object<P: AsRef<Path>>(path: P) -> Result<ModelArtifact> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open model: {:?}", path))?;
    let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse model artifact: {:?}", path))?;
    if artifact.coefficients.len() != artifact.n_features {
        anyhow::bail!(
            "Corrupt model artifact {:?}: {} coefficients for {} features",
            path,
            artifact.coefficients.len(),
            artifact.n_features
        );
    }
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn artifact() -> ModelArtifact {
        let fit = LinearFit {
            coefficients: array![1.5, -2.0],
            intercept: 0.25,
        };
        ModelArtifact::new(ModelType::ridge(), &fit, 0.9)
    }

    #[test]
    fn new_copies_fit_and_metadata() {
        let a = artifact();
        assert_eq!(a.model_name, "Ridge");
        assert_eq!(a.n_features, 2);
        assert_eq!(a.coefficients, vec![1.5, -2.0]);
        assert!(chrono::DateTime::parse_from_rfc3339(&a.trained_at).is_ok());
    }

    #[test]
    fn save_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("artifacts").join("model.json");

        save_object(&path, &artifact()).unwrap();
        let mut second = artifact();
        second.score = 0.1;
        save_object(&path, &second).unwrap();

        let loaded = load_object(&path).unwrap();
        assert_eq!(loaded.score, 0.1);
        assert_eq!(loaded.model_type, ModelType::ridge());
    }

    #[test]
    fn loaded_artifact_predicts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        save_object(&path, &artifact()).unwrap();

        let loaded = load_object(&path).unwrap();
        let preds = loaded.predict(&array![[2.0, 1.0], [0.0, 0.0]]).unwrap();
        assert_eq!(preds, array![1.25, 0.25]);
        assert!(matches!(
            loaded.predict(&array![[1.0]]),
            Err(ModelError::FeatureMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn corrupt_artifact_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut bad = artifact();
        bad.n_features = 3;
        save_object(&path, &bad).unwrap();
        assert!(load_object(&path).is_err());
        assert!(load_object(dir.path().join("missing.json")).is_err());
    }
}
