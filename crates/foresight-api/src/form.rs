use std::str::FromStr;

use crate::error::{ApiError, Result};
use crate::profile::UserProfile;

/// Raw form state as the user entered it.
///
/// Numeric fields stay text until [`ProfileForm::build`] parses them; the
/// remote toggle is already a bool and becomes the 0/1 wire flag. Building
/// is a pure transformation: the only way it fails is a numeric field that
/// does not parse, and no range or vocabulary checks are applied.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub age: String,
    pub tenure_months: String,
    pub remote: bool,
    pub education: String,
    pub location: String,
    pub title: String,
    pub industry: String,
    pub avg_sleep_hours: String,
}

impl ProfileForm {
    pub fn build(&self) -> Result<UserProfile> {
        Ok(UserProfile {
            age: parse_number("age", &self.age)?,
            tenure_months: parse_number("tenure_months", &self.tenure_months)?,
            remote_flag: u8::from(self.remote),
            education: self.education.clone(),
            location: self.location.clone(),
            title: self.title.clone(),
            industry: self.industry.clone(),
            avg_sleep_hours: parse_number("avg_sleep_hours", &self.avg_sleep_hours)?,
        })
    }
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ApiError::invalid_number(field, raw))
}
