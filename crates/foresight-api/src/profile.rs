use serde::{Deserialize, Serialize};

/// A user's current state, the sole payload of a prediction request.
///
/// Field names are the wire names. Built fresh from form state for each
/// request and not touched afterwards; `remote_flag` is the 0/1 integer
/// the service expects, not a JSON bool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub tenure_months: u32,
    pub remote_flag: u8,
    pub education: String,
    pub location: String,
    pub title: String,
    pub industry: String,
    pub avg_sleep_hours: f64,
}

impl UserProfile {
    #[must_use]
    pub fn works_remotely(&self) -> bool {
        self.remote_flag != 0
    }
}
