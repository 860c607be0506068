use std::fmt;

use anyhow::{Context, Result};
use ndarray::{Array1, Array2};

use crate::error::ModelError;
use crate::metrics::r2_score;
use crate::models::ModelMapping;

/// Scores every model in a mapping.
///
/// Implementations are expected to fit the models in place and return exactly
/// one score per model name; higher is better.
pub trait Evaluator {
    fn evaluate(
        &self,
        x_train: &Array2<f64>,
        y_train: &Array1<f64>,
        x_test: &Array2<f64>,
        y_test: &Array1<f64>,
        models: &mut ModelMapping,
    ) -> Result<ScoreReport>;
}

/// Fits each model on the training split and reports R² on the test split.
#[derive(Debug, Default, Clone, Copy)]
pub struct R2Evaluator;

impl Evaluator for R2Evaluator {
    fn evaluate(
        &self,
        x_train: &Array2<f64>,
        y_train: &Array1<f64>,
        x_test: &Array2<f64>,
        y_test: &Array1<f64>,
        models: &mut ModelMapping,
    ) -> Result<ScoreReport> {
        let mut report = ScoreReport::new();
        for model in models.iter_mut() {
            model
                .fit(x_train, y_train)
                .with_context(|| format!("Failed to fit {}", model.name()))?;
            let y_pred = model
                .predict(x_test)
                .with_context(|| format!("Failed to predict with {}", model.name()))?;
            let score = r2_score(y_test, &y_pred)?;
            log::debug!("{} scored R2 = {}", model.name(), score);
            report.insert(model.name(), score);
        }
        Ok(report)
    }
}

/// Model name to score, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreReport {
    entries: Vec<(String, f64)>,
}

impl ScoreReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the score for `name`. Overwriting keeps the
    /// original position.
    pub fn insert<S: Into<String>>(&mut self, name: S, score: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((name, score)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    /// Return a copy ordered like `names`, failing unless the report holds
    /// exactly those names.
    pub fn aligned_to<'a, I>(&self, names: I) -> Result<ScoreReport, ModelError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let expected: Vec<String> = names.into_iter().map(str::to_string).collect();
        let mismatch = || ModelError::ReportMismatch {
            expected: expected.clone(),
            found: self.names().map(str::to_string).collect(),
        };

        if expected.len() != self.len() {
            return Err(mismatch());
        }
        let mut aligned = ScoreReport::new();
        for name in &expected {
            match self.get(name) {
                Some(score) => aligned.insert(name.clone(), score),
                None => return Err(mismatch()),
            }
        }
        Ok(aligned)
    }

    /// The first entry holding the maximum score. NaN scores are skipped.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, score) in self.iter() {
            if score.is_nan() {
                continue;
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((name, score)),
            }
        }
        best
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (name, score)) in self.entries.iter().enumerate() {
            write!(f, "{}: {}", name, score)?;
            if idx + 1 != self.entries.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ScoreReport {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut report = ScoreReport::new();
        for (name, score) in iter {
            report.insert(name, score);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn report(pairs: &[(&str, f64)]) -> ScoreReport {
        pairs.iter().map(|(n, s)| (*n, *s)).collect()
    }

    #[test]
    fn best_picks_unique_maximum() {
        let r = report(&[("A", 0.1), ("B", 0.7), ("C", 0.3)]);
        assert_eq!(r.best(), Some(("B", 0.7)));
    }

    #[test]
    fn best_breaks_ties_by_first_occurrence() {
        let r = report(&[("A", 0.80), ("B", 0.92), ("C", 0.77), ("D", 0.92)]);
        assert_eq!(r.best(), Some(("B", 0.92)));
    }

    #[test]
    fn best_skips_nan() {
        let r = report(&[("A", f64::NAN), ("B", -3.0)]);
        assert_eq!(r.best(), Some(("B", -3.0)));
        assert_eq!(report(&[("A", f64::NAN)]).best(), None);
        assert_eq!(ScoreReport::new().best(), None);
    }

    #[test]
    fn aligned_to_reorders_and_checks_keys() {
        let r = report(&[("B", 0.2), ("A", 0.1)]);
        let aligned = r.aligned_to(["A", "B"]).unwrap();
        assert_eq!(aligned.names().collect::<Vec<_>>(), vec!["A", "B"]);

        assert!(matches!(
            r.aligned_to(["A"]),
            Err(ModelError::ReportMismatch { .. })
        ));
        assert!(matches!(
            r.aligned_to(["A", "C"]),
            Err(ModelError::ReportMismatch { .. })
        ));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut r = report(&[("A", 0.1), ("B", 0.2)]);
        r.insert("A", 0.5);
        assert_eq!(r.len(), 2);
        assert_eq!(r.iter().next(), Some(("A", 0.5)));
    }

    #[test]
    fn display_lists_entries() {
        let r = report(&[("Lasso", 0.5), ("Ridge", 0.25)]);
        assert_eq!(r.to_string(), "{Lasso: 0.5, Ridge: 0.25}");
    }

    #[test]
    fn r2_evaluator_reports_every_candidate() {
        let x_train = array![[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]];
        let y_train = array![1.0, 3.0, 5.0, 7.0, 9.0, 11.0];
        let x_test = array![[6.0], [7.0], [8.0]];
        let y_test = array![13.0, 15.0, 17.0];

        let mut models = ModelMapping::candidates();
        let report = R2Evaluator
            .evaluate(&x_train, &y_train, &x_test, &y_test, &mut models)
            .unwrap();

        assert_eq!(
            report.names().collect::<Vec<_>>(),
            vec!["LinearRegression", "Lasso", "Ridge", "ElasticNet"]
        );
        assert!((report.get("LinearRegression").unwrap() - 1.0).abs() < 1e-8);
        assert!(models.iter().all(|m| m.fitted().is_some()));
    }
}
