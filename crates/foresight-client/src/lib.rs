#![forbid(unsafe_code)]

//! Blocking client and session state machine for the Foresight prediction
//! service.
//!
//! One prediction is one HTTP POST: [`PredictClient::predict`] performs the
//! round trip and folds every way it can go wrong into a
//! [`PredictionOutcome`], so nothing escapes the call as a panic or a stray
//! `Err`. [`PredictionSession`] coordinates a submission end to end
//! (`Idle → Sending → Success | Failure`) and is the surface a
//! presentation layer polls or subscribes to.

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;
pub mod session;

pub use client::PredictClient;
pub use config::ApiConfig;
pub use error::{PredictError, Result};
pub use outcome::PredictionOutcome;
pub use session::{PredictionSession, SessionBusy, SessionState};
