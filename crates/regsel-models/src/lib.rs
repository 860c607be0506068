//! regsel-models: train linear regression variants and keep the best one.
//!
//! This crate provides the candidate models (ordinary least squares, Lasso,
//! Ridge and Elastic Net), an evaluator seam with a default R² evaluator, the
//! trainer that selects the best-scoring candidate and writes it to disk, and
//! the error type every training failure is reported through.
//!
//! Logging goes through an injected [`logging::TrainingLogger`] so callers
//! decide where training progress ends up.
pub mod config;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod trainer;

pub use error::{ModelError, TrainingFailure};
pub use trainer::{ModelTrainer, TrainingSummary};
