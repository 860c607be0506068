use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the persisted model artifact.
pub const DEFAULT_MODEL_PATH: &str = "artifacts/model.json";

/// Candidate model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    LinearRegression {
        fit_intercept: bool,
    },
    Lasso {
        alpha: f64,
        max_iterations: u32,
        tolerance: f64,
    },
    Ridge {
        alpha: f64,
        max_iterations: u32,
        tolerance: f64,
    },
    ElasticNet {
        alpha: f64,
        l1_ratio: f64,
        max_iterations: u32,
        tolerance: f64,
    },
}

impl ModelType {
    /// Stable name used as the key in model mappings and score reports.
    pub fn name(&self) -> &'static str {
        match self {
            ModelType::LinearRegression { .. } => "LinearRegression",
            ModelType::Lasso { .. } => "Lasso",
            ModelType::Ridge { .. } => "Ridge",
            ModelType::ElasticNet { .. } => "ElasticNet",
        }
    }

    pub fn linear_regression() -> Self {
        ModelType::LinearRegression {
            fit_intercept: true,
        }
    }

    pub fn lasso() -> Self {
        ModelType::Lasso {
            alpha: 1.0,
            max_iterations: 1000,
            tolerance: 1e-4,
        }
    }

    pub fn ridge() -> Self {
        ModelType::Ridge {
            alpha: 1.0,
            max_iterations: 1000,
            tolerance: 1e-4,
        }
    }

    pub fn elastic_net() -> Self {
        ModelType::ElasticNet {
            alpha: 1.0,
            l1_ratio: 0.5,
            max_iterations: 1000,
            tolerance: 1e-4,
        }
    }

    /// The fixed candidate set, in declaration order. Selection ties are
    /// broken by this order.
    pub fn candidates() -> Vec<ModelType> {
        vec![
            ModelType::linear_regression(),
            ModelType::lasso(),
            ModelType::ridge(),
            ModelType::elastic_net(),
        ]
    }
}

/// Trainer configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelTrainerConfig {
    pub trained_model_file_path: PathBuf,
}

impl ModelTrainerConfig {
    pub fn new<P: Into<PathBuf>>(trained_model_file_path: P) -> Self {
        Self {
            trained_model_file_path: trained_model_file_path.into(),
        }
    }
}

impl Default for ModelTrainerConfig {
    fn default() -> Self {
        Self {
            trained_model_file_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}
