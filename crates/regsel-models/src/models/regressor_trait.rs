use ndarray::{Array1, Array2, ArrayView1};

use crate::config::ModelType;
use crate::error::ModelError;

/// Common contract of the candidate regressors. Every candidate is linear, so
/// a fitted model reduces to a [`LinearFit`].
pub trait RegressorModel {
    /// Fit on features `x` (rows are samples) and target `y`.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError>;

    /// Predict one value per row of `x`.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        self.fitted()
            .ok_or_else(|| ModelError::NotFitted(self.name().to_string()))?
            .predict(x)
    }

    /// Coefficients and intercept, once fitted.
    fn fitted(&self) -> Option<&LinearFit>;

    fn model_type(&self) -> &ModelType;

    fn name(&self) -> &str {
        self.model_type().name()
    }
}

/// Fitted linear hyperplane: `y = x · coefficients + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

impl LinearFit {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        predict_linear(x, self.coefficients.view(), self.intercept)
    }
}

pub(crate) fn predict_linear(
    x: &Array2<f64>,
    coefficients: ArrayView1<'_, f64>,
    intercept: f64,
) -> Result<Array1<f64>, ModelError> {
    if x.ncols() != coefficients.len() {
        return Err(ModelError::FeatureMismatch {
            expected: coefficients.len(),
            found: x.ncols(),
        });
    }
    let mut y = x.dot(&coefficients);
    y += intercept;
    Ok(y)
}

/// Shape checks shared by the `fit` implementations.
pub(crate) fn check_training_shapes(x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
    if x.nrows() == 0 {
        return Err(ModelError::EmptyInput);
    }
    if x.nrows() != y.len() {
        return Err(ModelError::LengthMismatch {
            expected: x.nrows(),
            found: y.len(),
        });
    }
    Ok(())
}
