use std::fmt;

use foresight_api::{Forecast, ProfileForm, ProjectionHorizon};
use thiserror::Error;

use crate::client::PredictClient;
use crate::error::PredictError;
use crate::outcome::PredictionOutcome;

/// Rejection for a submission attempted while one is already in flight.
#[derive(Debug, Error)]
#[error("a prediction attempt is already in flight")]
pub struct SessionBusy;

/// Where one prediction flow currently stands.
///
/// `Sending` is entered when the attempt starts and always settles into
/// exactly one of the terminal arms; there is no automatic path back.
#[derive(Debug)]
pub enum SessionState {
    Idle,
    Sending,
    Success(Forecast),
    Failure(PredictError),
}

impl SessionState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }
}

type Observer = Box<dyn Fn(&SessionState) + Send>;

/// Explicit state store for the prediction flow.
///
/// State only moves through [`begin`](Self::begin) and
/// [`resolve`](Self::resolve); every transition bumps
/// [`version`](Self::version) and hands each registered observer a
/// snapshot, so the presentation layer can either subscribe or poll.
/// The re-submission guard lives here, with the coordinating caller,
/// not inside [`PredictClient`].
pub struct PredictionSession {
    state: SessionState,
    version: u64,
    observers: Vec<Observer>,
}

impl fmt::Debug for PredictionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionSession")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for PredictionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            version: 0,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Monotonically increasing transition counter, for pollers that
    /// want to detect change without comparing states.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.state, SessionState::Sending)
    }

    /// Register a callback invoked with a snapshot after every
    /// transition. Observers are never unregistered; they live as long
    /// as the session.
    pub fn observe(&mut self, observer: impl Fn(&SessionState) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Enter `Sending`. A prior terminal state is replaced; an attempt
    /// already in flight is rejected.
    pub fn begin(&mut self) -> std::result::Result<(), SessionBusy> {
        if self.is_sending() {
            return Err(SessionBusy);
        }
        self.transition(SessionState::Sending);
        Ok(())
    }

    /// Settle the in-flight attempt into its terminal state.
    ///
    /// Without an attempt in flight there is no transition to perform;
    /// the outcome is dropped and the miswired caller shows up in logs.
    pub fn resolve(&mut self, outcome: PredictionOutcome) {
        if !self.is_sending() {
            tracing::warn!(
                target: "foresight.session",
                state = self.state.name(),
                "resolve without an attempt in flight; outcome dropped"
            );
            return;
        }

        let next = match outcome {
            PredictionOutcome::Success(forecast) => SessionState::Success(forecast),
            PredictionOutcome::Failure(error) => SessionState::Failure(error),
        };
        self.transition(next);
    }

    /// One full submission: build the profile, run the single network
    /// call, settle. A builder failure settles the session immediately
    /// and no request goes out.
    pub fn submit(
        &mut self,
        client: &PredictClient,
        form: &ProfileForm,
        horizon: ProjectionHorizon,
    ) -> std::result::Result<&SessionState, SessionBusy> {
        if self.is_sending() {
            return Err(SessionBusy);
        }

        let profile = match form.build() {
            Ok(profile) => profile,
            Err(error) => {
                self.transition(SessionState::Failure(PredictError::from(error)));
                return Ok(&self.state);
            }
        };

        self.begin()?;
        let outcome = client.predict(&profile, horizon);
        self.resolve(outcome);
        Ok(&self.state)
    }

    fn transition(&mut self, next: SessionState) {
        self.state = next;
        self.version = self.version.saturating_add(1);

        tracing::debug!(
            target: "foresight.session",
            state = self.state.name(),
            version = self.version,
            "session transition"
        );

        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use foresight_api::{Forecast, SalaryProjection};

    use crate::error::PredictError;
    use crate::outcome::PredictionOutcome;

    use super::{PredictionSession, SessionState};

    fn sample_forecast() -> Forecast {
        Forecast {
            projected_age: 45,
            health_increase_percent: 4.0,
            predicted_salary: SalaryProjection::NotApplicable,
            recommended_jobs: vec!["Director".to_string()],
            time_projection_months: 60,
        }
    }

    #[test]
    fn fresh_session_is_idle_at_version_zero() {
        let session = PredictionSession::new();
        assert!(matches!(session.state(), SessionState::Idle));
        assert_eq!(session.version(), 0);
        assert!(!session.is_sending());
    }

    #[test]
    fn begin_enters_sending_and_rejects_a_second_attempt() {
        let mut session = PredictionSession::new();

        session.begin().expect("first begin");
        assert!(session.is_sending());
        assert_eq!(session.version(), 1);

        session.begin().expect_err("second begin while sending");
        assert_eq!(session.version(), 1, "rejected begin must not transition");
    }

    #[test]
    fn resolve_settles_into_exactly_one_terminal_state() {
        let mut session = PredictionSession::new();
        session.begin().expect("begin");

        session.resolve(PredictionOutcome::Success(sample_forecast()));
        match session.state() {
            SessionState::Success(forecast) => assert_eq!(forecast.time_projection_months, 60),
            other => panic!("expected Success, got {}", other.name()),
        }
        assert!(session.state().is_terminal());
        assert_eq!(session.version(), 2);
    }

    #[test]
    fn resolve_without_begin_is_dropped() {
        let mut session = PredictionSession::new();
        session.resolve(PredictionOutcome::Failure(PredictError::rejected("late")));

        assert!(matches!(session.state(), SessionState::Idle));
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn terminal_state_is_replaced_by_the_next_attempt() {
        let mut session = PredictionSession::new();

        session.begin().expect("begin");
        session.resolve(PredictionOutcome::Failure(PredictError::rejected("first")));
        assert!(matches!(session.state(), SessionState::Failure(_)));

        session.begin().expect("begin after terminal state");
        assert!(session.is_sending());
        session.resolve(PredictionOutcome::Success(sample_forecast()));
        assert!(matches!(session.state(), SessionState::Success(_)));
        assert_eq!(session.version(), 4);
    }

    #[test]
    fn observers_see_every_transition_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut session = PredictionSession::new();
        session.observe(move |state| sink.lock().expect("seen lock").push(state.name()));

        session.begin().expect("begin");
        session.resolve(PredictionOutcome::Failure(PredictError::rejected("nope")));

        assert_eq!(*seen.lock().expect("seen lock"), ["sending", "failure"]);
    }
}
