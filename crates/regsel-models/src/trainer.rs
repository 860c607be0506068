use std::path::PathBuf;

use ndarray::Array2;

use crate::config::ModelTrainerConfig;
use crate::error::{FailureContext, ModelError, TrainingFailure};
use crate::evaluation::{Evaluator, R2Evaluator, ScoreReport};
use crate::io::{save_object, split_features_target, ModelArtifact};
use crate::logging::TrainingLogger;
use crate::models::ModelMapping;

/// Outcome of a successful training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    pub best_model: String,
    pub best_score: f64,
    pub report: ScoreReport,
    pub artifact_path: PathBuf,
}

/// Trains the candidate models, keeps the best-scoring one and writes it to
/// `config.trained_model_file_path`.
pub struct ModelTrainer<E = R2Evaluator> {
    config: ModelTrainerConfig,
    evaluator: E,
    logger: TrainingLogger,
}

impl ModelTrainer<R2Evaluator> {
    pub fn new(config: ModelTrainerConfig) -> Self {
        ModelTrainer::with_evaluator(config, R2Evaluator)
    }
}

impl Default for ModelTrainer<R2Evaluator> {
    fn default() -> Self {
        ModelTrainer::new(ModelTrainerConfig::default())
    }
}

impl<E: Evaluator> ModelTrainer<E> {
    pub fn with_evaluator(config: ModelTrainerConfig, evaluator: E) -> Self {
        ModelTrainer {
            config,
            evaluator,
            logger: TrainingLogger::default(),
        }
    }

    pub fn with_logger(mut self, logger: TrainingLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &ModelTrainerConfig {
        &self.config
    }

    /// Run one training pass over `train_array` and `test_array`.
    ///
    /// Both arrays hold one observation per row with the target in the last
    /// column. Nothing is written unless every step succeeds.
    pub fn train(
        &self,
        train_array: &Array2<f64>,
        test_array: &Array2<f64>,
    ) -> Result<TrainingSummary, TrainingFailure> {
        self.run(train_array, test_array).map_err(|failure| {
            self.logger
                .error(format_args!("Exception occurred in model trainer: {}", failure));
            failure
        })
    }

    fn run(
        &self,
        train_array: &Array2<f64>,
        test_array: &Array2<f64>,
    ) -> Result<TrainingSummary, TrainingFailure> {
        self.logger.info(format_args!(
            "Splitting dependent and independent features from train and test data"
        ));
        let (x_train, y_train) = split_features_target(train_array).or_fail()?;
        let (x_test, y_test) = split_features_target(test_array).or_fail()?;
        if x_train.ncols() != x_test.ncols() {
            return Err(ModelError::FeatureMismatch {
                expected: x_train.ncols(),
                found: x_test.ncols(),
            })
            .or_fail();
        }

        let mut models = ModelMapping::candidates();

        let report = self
            .evaluator
            .evaluate(&x_train, &y_train, &x_test, &y_test, &mut models)
            .or_fail()?;
        self.logger.info(format_args!("Model report: {}", report));

        let report = report.aligned_to(models.names()).or_fail()?;
        let (best_name, best_score) = report.best().ok_or(ModelError::NoFiniteScore).or_fail()?;
        let best_name = best_name.to_string();
        self.logger.info(format_args!(
            "Best model found, model name: {} with score: {}",
            best_name, best_score
        ));

        let best_model = models
            .take(&best_name)
            .ok_or_else(|| TrainingFailure::new(format!("model {} missing from mapping", best_name)))?;
        let fit = best_model
            .fitted()
            .ok_or_else(|| ModelError::NotFitted(best_name.clone()))
            .or_fail()?;
        let artifact = ModelArtifact::new(best_model.model_type().clone(), fit, best_score);

        let path = &self.config.trained_model_file_path;
        save_object(path, &artifact).or_fail()?;
        self.logger
            .info(format_args!("Saved {} to {:?}", best_name, path));

        Ok(TrainingSummary {
            best_model: best_name,
            best_score,
            report,
            artifact_path: path.clone(),
        })
    }
}
