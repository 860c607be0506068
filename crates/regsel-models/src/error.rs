use std::error::Error;
use std::fmt;
use std::panic::Location;

use linfa_elasticnet::ElasticNetError;
use linfa_linear::LinearError;

/// Failures raised by the models, metrics and score reports before they are
/// wrapped into a [`TrainingFailure`].
#[derive(Debug)]
pub enum ModelError {
    EmptyInput,
    TooFewColumns(usize),
    FeatureMismatch { expected: usize, found: usize },
    LengthMismatch { expected: usize, found: usize },
    NotFitted(String),
    Ols(LinearError<f64>),
    Penalized(ElasticNetError),
    ReportMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    NoFiniteScore,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::EmptyInput => write!(f, "input array has no rows"),
            ModelError::TooFewColumns(cols) => write!(
                f,
                "input array needs at least 2 columns (features + target), got {}",
                cols
            ),
            ModelError::FeatureMismatch { expected, found } => write!(
                f,
                "expected {} feature columns, got {}",
                expected, found
            ),
            ModelError::LengthMismatch { expected, found } => {
                write!(f, "expected {} values, got {}", expected, found)
            }
            ModelError::NotFitted(name) => write!(f, "model {} has not been fitted", name),
            ModelError::Ols(e) => write!(f, "linear regression fit failed: {}", e),
            ModelError::Penalized(e) => write!(f, "penalized regression fit failed: {}", e),
            ModelError::ReportMismatch { expected, found } => write!(
                f,
                "score report keys {:?} do not match candidate models {:?}",
                found, expected
            ),
            ModelError::NoFiniteScore => write!(f, "no candidate produced a finite score"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelError::Ols(e) => Some(e),
            ModelError::Penalized(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LinearError<f64>> for ModelError {
    fn from(e: LinearError<f64>) -> Self {
        ModelError::Ols(e)
    }
}

impl From<ElasticNetError> for ModelError {
    fn from(e: ElasticNetError) -> Self {
        ModelError::Penalized(e)
    }
}

/// The single error type returned by training.
///
/// Carries the source file and line where the underlying failure surfaced
/// together with its message. Every cause is wrapped the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingFailure {
    file: &'static str,
    line: u32,
    message: String,
}

impl TrainingFailure {
    /// Build a failure located at the caller.
    #[track_caller]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::at(Location::caller(), message.into())
    }

    fn at(location: &'static Location<'static>, message: String) -> Self {
        TrainingFailure {
            file: location.file(),
            line: location.line(),
            message,
        }
    }

    pub fn file(&self) -> &str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TrainingFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error occurred in source file [{}] line number [{}] error message [{}]",
            self.file, self.line, self.message
        )
    }
}

impl Error for TrainingFailure {}

/// Converts any displayable error into a [`TrainingFailure`] located at the
/// call site of `or_fail`.
pub trait FailureContext<T> {
    fn or_fail(self) -> Result<T, TrainingFailure>;
}

impl<T, E: fmt::Display> FailureContext<T> for Result<T, E> {
    #[track_caller]
    fn or_fail(self) -> Result<T, TrainingFailure> {
        match self {
            Ok(value) => Ok(value),
            // alternate form keeps the whole anyhow context chain
            Err(e) => Err(TrainingFailure::at(Location::caller(), format!("{:#}", e))),
        }
    }
}
