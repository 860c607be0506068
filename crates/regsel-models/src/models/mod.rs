pub mod factory;
pub mod ols;
pub mod penalized;
pub mod regressor_trait;

pub use factory::{build_model, ModelMapping};
pub use regressor_trait::{LinearFit, RegressorModel};
