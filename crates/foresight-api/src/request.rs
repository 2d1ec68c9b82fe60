use serde::{Deserialize, Serialize};

use crate::horizon::ProjectionHorizon;
use crate::profile::UserProfile;

/// The envelope posted to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub user_data: UserProfile,
    pub projection_months: ProjectionHorizon,
}

impl PredictionRequest {
    #[must_use]
    pub fn new(user_data: UserProfile, projection_months: ProjectionHorizon) -> Self {
        Self {
            user_data,
            projection_months,
        }
    }
}
