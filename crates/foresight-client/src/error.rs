use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictError>;

/// Every way a prediction attempt can fail.
///
/// `Display` yields the message the presentation layer renders, so each
/// variant carries what that message needs: `Status` keeps the numeric
/// code next to the server's words, `Transport` keeps the endpoint that
/// was attempted.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Invalid(#[from] foresight_api::ApiError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("server rejected prediction request: {message}")]
    Rejected { message: String },

    #[error("server error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("malformed prediction response: {detail}")]
    MalformedResponse { detail: String },
}

impl PredictError {
    #[must_use]
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }
}
