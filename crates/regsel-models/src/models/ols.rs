use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use crate::config::ModelType;
use crate::error::ModelError;
use crate::models::regressor_trait::{check_training_shapes, LinearFit, RegressorModel};

/// Ordinary least squares.
pub struct OlsRegressor {
    model_type: ModelType,
    fit_intercept: bool,
    fitted: Option<LinearFit>,
}

impl OlsRegressor {
    pub fn new(fit_intercept: bool) -> Self {
        OlsRegressor {
            model_type: ModelType::LinearRegression { fit_intercept },
            fit_intercept,
            fitted: None,
        }
    }
}

impl RegressorModel for OlsRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        check_training_shapes(x, y)?;
        let dataset = DatasetBase::new(x.to_owned(), y.to_owned());

        let model = LinearRegression::new()
            .with_intercept(self.fit_intercept)
            .fit(&dataset)?;

        self.fitted = Some(LinearFit {
            coefficients: model.params().to_owned(),
            intercept: model.intercept(),
        });
        Ok(())
    }

    fn fitted(&self) -> Option<&LinearFit> {
        self.fitted.as_ref()
    }

    fn model_type(&self) -> &ModelType {
        &self.model_type
    }
}
