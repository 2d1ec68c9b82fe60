#![forbid(unsafe_code)]

//! Wire contract and request builder for the Foresight prediction service.
//!
//! The service accepts a user profile plus a projection horizon over HTTP
//! POST and answers with a forecast. This crate owns the typed shapes on
//! both sides of that exchange and the form-to-profile builder; it performs
//! no I/O. The HTTP client lives in `foresight-client`.

pub mod error;
pub mod forecast;
pub mod form;
pub mod horizon;
pub mod profile;
pub mod request;

pub use error::{ApiError, Result};
pub use forecast::{Forecast, SalaryProjection};
pub use form::ProfileForm;
pub use horizon::ProjectionHorizon;
pub use profile::UserProfile;
pub use request::PredictionRequest;
