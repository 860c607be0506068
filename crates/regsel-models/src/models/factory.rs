use crate::config::ModelType;
use crate::models::ols::OlsRegressor;
use crate::models::penalized::PenalizedRegressor;
use crate::models::regressor_trait::RegressorModel;

/// Build a boxed, unfitted regressor from a `ModelType`.
pub fn build_model(model_type: ModelType) -> Box<dyn RegressorModel> {
    match model_type {
        ModelType::LinearRegression { fit_intercept } => Box::new(OlsRegressor::new(fit_intercept)),
        ModelType::Lasso {
            alpha,
            max_iterations,
            tolerance,
        } => Box::new(PenalizedRegressor::lasso(alpha, max_iterations, tolerance)),
        ModelType::Ridge {
            alpha,
            max_iterations,
            tolerance,
        } => Box::new(PenalizedRegressor::ridge(alpha, max_iterations, tolerance)),
        ModelType::ElasticNet {
            alpha,
            l1_ratio,
            max_iterations,
            tolerance,
        } => Box::new(PenalizedRegressor::elastic_net(
            alpha,
            l1_ratio,
            max_iterations,
            tolerance,
        )),
    }
}

/// Named models in a fixed order. Names are unique.
pub struct ModelMapping {
    entries: Vec<Box<dyn RegressorModel>>,
}

impl ModelMapping {
    /// The four default candidates: LinearRegression, Lasso, Ridge, ElasticNet.
    pub fn candidates() -> Self {
        ModelType::candidates().into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|m| m.name())
    }

    pub fn get(&self, name: &str) -> Option<&dyn RegressorModel> {
        self.entries
            .iter()
            .find(|m| m.name() == name)
            .map(|m| m.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RegressorModel> + '_ {
        self.entries.iter().map(|m| m.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn RegressorModel>> + '_ {
        self.entries.iter_mut()
    }

    /// Remove and return the model stored under `name`.
    pub fn take(&mut self, name: &str) -> Option<Box<dyn RegressorModel>> {
        let idx = self.entries.iter().position(|m| m.name() == name)?;
        Some(self.entries.remove(idx))
    }
}

impl FromIterator<ModelType> for ModelMapping {
    /// Later duplicates of a name are dropped.
    fn from_iter<I: IntoIterator<Item = ModelType>>(iter: I) -> Self {
        let mut entries: Vec<Box<dyn RegressorModel>> = Vec::new();
        for model_type in iter {
            if entries.iter().any(|m| m.name() == model_type.name()) {
                continue;
            }
            entries.push(build_model(model_type));
        }
        ModelMapping { entries }
    }
}
