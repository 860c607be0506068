//! File formats: numeric CSV/TSV tables in, JSON model artifacts out.
pub mod artifact;
pub mod dataset;

pub use artifact::{load_object, save_object, ModelArtifact};
pub use dataset::{load_array, split_features_target};
