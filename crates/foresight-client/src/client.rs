use std::time::Duration;

use foresight_api::{Forecast, PredictionRequest, ProjectionHorizon, UserProfile};
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{PredictError, Result};
use crate::outcome::PredictionOutcome;

const GENERIC_SERVER_ERROR: &str = "Unknown server error";

/// Blocking client for the prediction endpoint.
///
/// One [`predict`](Self::predict) call is exactly one POST. There are no
/// retries and no cancellation; timeouts are the transport defaults set
/// at construction.
#[derive(Debug)]
pub struct PredictClient {
    http: Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the single round trip and fold the result into an outcome.
    ///
    /// Never returns `Err` and never panics: transport failures, error
    /// bodies, unexpected statuses, and undecodable bodies all come back
    /// as the failure arm.
    #[must_use]
    pub fn predict(&self, profile: &UserProfile, horizon: ProjectionHorizon) -> PredictionOutcome {
        match self.round_trip(profile, horizon) {
            Ok(forecast) => {
                tracing::debug!(
                    target: "foresight.client",
                    endpoint = %self.endpoint,
                    "prediction succeeded"
                );
                PredictionOutcome::Success(forecast)
            }
            Err(error) => {
                tracing::warn!(
                    target: "foresight.client",
                    endpoint = %self.endpoint,
                    error = %error,
                    "prediction failed"
                );
                PredictionOutcome::Failure(error)
            }
        }
    }

    fn round_trip(&self, profile: &UserProfile, horizon: ProjectionHorizon) -> Result<Forecast> {
        let payload = PredictionRequest::new(profile.clone(), horizon);

        tracing::debug!(
            target: "foresight.client",
            endpoint = %self.endpoint,
            projection_months = horizon.months(),
            "sending prediction request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|source| PredictError::transport(&self.endpoint, source))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|source| PredictError::transport(&self.endpoint, source))?;

        if !status.is_success() {
            return Err(PredictError::status(
                status.as_u16(),
                server_error_message(&body).unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
            ));
        }

        // The service reports application errors in the body, sometimes
        // under a 200 status, so the error field wins over the status.
        if let Some(message) = server_error_message(&body) {
            return Err(PredictError::rejected(message));
        }

        serde_json::from_str::<Forecast>(&body)
            .map_err(|error| PredictError::malformed(error.to_string()))
    }
}

/// The `"error"` field of a JSON body, if there is one. Non-JSON bodies
/// and non-string error values count as no message.
fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(ToOwned::to_owned)
}
