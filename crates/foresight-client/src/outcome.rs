use foresight_api::Forecast;

use crate::error::PredictError;

/// Result of one prediction attempt.
///
/// Exactly one arm, created once per attempt and never mutated; a new
/// attempt produces a fresh value that replaces the old one wherever the
/// presentation layer keeps it.
#[derive(Debug)]
pub enum PredictionOutcome {
    Success(Forecast),
    Failure(PredictError),
}

impl PredictionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn forecast(&self) -> Option<&Forecast> {
        match self {
            Self::Success(forecast) => Some(forecast),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&PredictError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}
