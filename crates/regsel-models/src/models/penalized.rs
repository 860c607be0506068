use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_elasticnet::ElasticNet;
use ndarray::{Array1, Array2, Axis};

use crate::config::ModelType;
use crate::error::ModelError;
use crate::models::regressor_trait::{check_training_shapes, LinearFit, RegressorModel};

/// Lasso, Ridge and Elastic Net, all fitted by coordinate descent.
///
/// The coordinate descent objective is
/// `1/(2n) ‖y − Xw‖² + penalty · (l1_ratio ‖w‖₁ + (1 − l1_ratio)/2 ‖w‖²)`.
/// Lasso and Elastic Net pass `alpha` straight through as the penalty. Ridge
/// divides it by the sample count so `alpha` weighs `‖w‖²` against the
/// unnormalised residual sum of squares.
///
/// Features and target are centred before the fit and the intercept is
/// recovered afterwards as `ȳ − x̄ · w`, so the penalty never touches the
/// intercept.
pub struct PenalizedRegressor {
    model_type: ModelType,
    alpha: f64,
    l1_ratio: f64,
    per_sample_alpha: bool,
    max_iterations: u32,
    tolerance: f64,
    fitted: Option<LinearFit>,
}

impl PenalizedRegressor {
    pub fn lasso(alpha: f64, max_iterations: u32, tolerance: f64) -> Self {
        PenalizedRegressor {
            model_type: ModelType::Lasso {
                alpha,
                max_iterations,
                tolerance,
            },
            alpha,
            l1_ratio: 1.0,
            per_sample_alpha: false,
            max_iterations,
            tolerance,
            fitted: None,
        }
    }

    pub fn ridge(alpha: f64, max_iterations: u32, tolerance: f64) -> Self {
        PenalizedRegressor {
            model_type: ModelType::Ridge {
                alpha,
                max_iterations,
                tolerance,
            },
            alpha,
            l1_ratio: 0.0,
            per_sample_alpha: true,
            max_iterations,
            tolerance,
            fitted: None,
        }
    }

    pub fn elastic_net(alpha: f64, l1_ratio: f64, max_iterations: u32, tolerance: f64) -> Self {
        PenalizedRegressor {
            model_type: ModelType::ElasticNet {
                alpha,
                l1_ratio,
                max_iterations,
                tolerance,
            },
            alpha,
            l1_ratio,
            per_sample_alpha: false,
            max_iterations,
            tolerance,
            fitted: None,
        }
    }

    fn penalty(&self, n_samples: usize) -> f64 {
        if self.per_sample_alpha {
            self.alpha / n_samples as f64
        } else {
            self.alpha
        }
    }
}

impl RegressorModel for PenalizedRegressor {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        check_training_shapes(x, y)?;

        let penalty = self.penalty(x.nrows());
        log::trace!(
            "Fitting {} with penalty {} and l1_ratio {}",
            self.name(),
            penalty,
            self.l1_ratio
        );

        let x_mean = x.mean_axis(Axis(0)).ok_or(ModelError::EmptyInput)?;
        let y_mean = y.mean().ok_or(ModelError::EmptyInput)?;
        let x_centred = x - &x_mean;
        let y_centred = y - y_mean;

        let dataset = DatasetBase::new(x_centred, y_centred);
        let model = ElasticNet::<f64>::params()
            .penalty(penalty)
            .l1_ratio(self.l1_ratio)
            .with_intercept(false)
            .max_iterations(self.max_iterations)
            .tolerance(self.tolerance)
            .fit(&dataset)?;

        let coefficients = model.hyperplane().to_owned();
        let intercept = y_mean - x_mean.dot(&coefficients);
        self.fitted = Some(LinearFit {
            coefficients,
            intercept,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::r2_score;
    use ndarray::array;

    fn dataset() -> (Array2<f64>, Array1<f64>) {
        let x = array![
            [0.0, 1.0],
            [1.0, 0.5],
            [2.0, 2.0],
            [3.0, 1.5],
            [4.0, 3.0],
            [5.0, 2.5],
            [6.0, 4.0],
            [7.0, 3.5]
        ];
        let y = x.map_axis(Axis(1), |r| 2.0 * r[0] + 0.5 * r[1] + 1.0);
        (x, y)
    }

    #[test]
    fn small_penalties_approach_least_squares() {
        let (x, y) = dataset();
        for mut model in [
            PenalizedRegressor::lasso(1e-6, 10_000, 1e-10),
            PenalizedRegressor::ridge(1e-6, 10_000, 1e-10),
            PenalizedRegressor::elastic_net(1e-6, 0.5, 10_000, 1e-10),
        ] {
            model.fit(&x, &y).unwrap();
            let preds = model.predict(&x).unwrap();
            for (p, t) in preds.iter().zip(y.iter()) {
                assert!((p - t).abs() < 1e-2, "{}: {} vs {}", model.name(), p, t);
            }
        }
    }

    #[test]
    fn strong_lasso_zeroes_coefficients() {
        let (x, y) = dataset();
        let mut model = PenalizedRegressor::lasso(1e6, 1000, 1e-4);
        model.fit(&x, &y).unwrap();
        let fit = model.fitted().unwrap();
        assert!(fit.coefficients.iter().all(|c| *c == 0.0));
        let x_mean = x.mean_axis(Axis(0)).unwrap();
        let expected = y.mean().unwrap() - x_mean.dot(&fit.coefficients);
        assert!((fit.intercept - expected).abs() < 1e-6);
    }

    /// Two features far from zero: x0 around 100, x1 around 50.
    fn shifted_dataset() -> (Array2<f64>, Array1<f64>) {
        let rows = 20;
        let mut data = Vec::with_capacity(rows * 2);
        for i in 0..rows {
            let t = i as f64;
            data.push(100.0 + t);
            data.push(50.0 + ((i * 7) % 5) as f64 + 0.1 * t);
        }
        let x = Array2::from_shape_vec((rows, 2), data).unwrap();
        let y = x.map_axis(Axis(1), |r| 3.0 * r[0] - 2.0 * r[1] + 5.0);
        (x, y)
    }

    #[test]
    fn ridge_matches_closed_form_on_uncentred_features() {
        let (x, y) = shifted_dataset();
        let alpha = 1.0;
        let mut model = PenalizedRegressor::ridge(alpha, 10_000, 1e-12);
        model.fit(&x, &y).unwrap();
        let fit = model.fitted().unwrap();

        // w = (XcᵀXc + αI)⁻¹ Xcᵀ yc, b = ȳ − x̄·w
        let x_mean = x.mean_axis(Axis(0)).unwrap();
        let y_mean = y.mean().unwrap();
        let xc = &x - &x_mean;
        let yc = &y - y_mean;
        let mut a = xc.t().dot(&xc);
        a[[0, 0]] += alpha;
        a[[1, 1]] += alpha;
        let b = xc.t().dot(&yc);
        let det = a[[0, 0]] * a[[1, 1]] - a[[0, 1]] * a[[1, 0]];
        let w0 = (a[[1, 1]] * b[0] - a[[0, 1]] * b[1]) / det;
        let w1 = (a[[0, 0]] * b[1] - a[[1, 0]] * b[0]) / det;
        let intercept = y_mean - x_mean[0] * w0 - x_mean[1] * w1;

        assert!((fit.coefficients[0] - w0).abs() < 1e-6, "{} vs {}", fit.coefficients[0], w0);
        assert!((fit.coefficients[1] - w1).abs() < 1e-6, "{} vs {}", fit.coefficients[1], w1);
        assert!((fit.intercept - intercept).abs() < 1e-4, "{} vs {}", fit.intercept, intercept);
    }

    #[test]
    fn default_ridge_fits_a_far_from_origin_line() {
        // y = 2x + 1 on x = 100..119
        let x = Array2::from_shape_fn((20, 1), |(i, _)| 100.0 + i as f64);
        let y = x.column(0).mapv(|v| 2.0 * v + 1.0);
        let mut model = PenalizedRegressor::ridge(1.0, 1000, 1e-4);
        model.fit(&x, &y).unwrap();
        let score = r2_score(&y, &model.predict(&x).unwrap()).unwrap();
        assert!(score > 0.99, "R2 = {}", score);
    }

    #[test]
    fn lasso_and_elastic_net_fit_shifted_linear_data() {
        let (x, y) = shifted_dataset();
        for mut model in [
            PenalizedRegressor::lasso(1e-3, 10_000, 1e-10),
            PenalizedRegressor::elastic_net(1e-3, 0.5, 10_000, 1e-10),
        ] {
            model.fit(&x, &y).unwrap();
            let score = r2_score(&y, &model.predict(&x).unwrap()).unwrap();
            assert!(score > 0.999, "{}: R2 = {}", model.name(), score);
        }
    }

    #[test]
    fn ridge_penalty_is_scaled_by_sample_count() {
        let model = PenalizedRegressor::ridge(1.0, 1000, 1e-4);
        assert!((model.penalty(4) - 0.25).abs() < 1e-12);
        assert_eq!(model.l1_ratio, 0.0);
        assert_eq!(model.model_type(), &ModelType::ridge());
    }
}
