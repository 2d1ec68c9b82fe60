use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Marker string the service sends when the salary model produced nothing
/// usable for this profile.
const NOT_APPLICABLE: &str = "N/A";

/// Salary figure the service projected, or its marker for "no usable
/// model output".
///
/// The wire carries either a JSON number or the exact string `"N/A"`; any
/// other string is a decode error, so consumers only ever see these two
/// arms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryProjection {
    Amount(f64),
    NotApplicable,
}

impl SalaryProjection {
    #[must_use]
    pub fn amount(self) -> Option<f64> {
        match self {
            Self::Amount(value) => Some(value),
            Self::NotApplicable => None,
        }
    }
}

impl Serialize for SalaryProjection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Amount(value) => serializer.serialize_f64(*value),
            Self::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for SalaryProjection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Amount(f64),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Amount(value) => Ok(Self::Amount(value)),
            Raw::Marker(marker) if marker == NOT_APPLICABLE => Ok(Self::NotApplicable),
            Raw::Marker(marker) => Err(de::Error::invalid_value(
                Unexpected::Str(&marker),
                &"a salary number or \"N/A\"",
            )),
        }
    }
}

/// Success body of a prediction call.
///
/// Every field is required; a body missing one of them (or carrying a
/// wrong type) fails to decode, and the client surfaces that as a failure
/// outcome rather than a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub projected_age: u32,
    pub health_increase_percent: f64,
    pub predicted_salary: SalaryProjection,
    /// Most likely next roles, best match first. Order is the server's.
    pub recommended_jobs: Vec<String>,
    pub time_projection_months: u32,
}
