use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// How far ahead the prediction targets.
///
/// The service accepts exactly three horizons and rejects anything else,
/// so the set is closed here rather than carried as a bare integer. On
/// the wire a horizon is the bare month count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionHorizon {
    SixMonths,
    TwoYears,
    FiveYears,
}

impl ProjectionHorizon {
    /// Every horizon the service accepts, in ascending order. Useful for
    /// form selectors.
    pub const ALL: [Self; 3] = [Self::SixMonths, Self::TwoYears, Self::FiveYears];

    #[must_use]
    pub fn months(self) -> u32 {
        match self {
            Self::SixMonths => 6,
            Self::TwoYears => 24,
            Self::FiveYears => 60,
        }
    }

    pub fn from_months(months: u32) -> Result<Self> {
        match months {
            6 => Ok(Self::SixMonths),
            24 => Ok(Self::TwoYears),
            60 => Ok(Self::FiveYears),
            other => Err(ApiError::UnsupportedHorizon { months: other }),
        }
    }
}

impl Serialize for ProjectionHorizon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.months())
    }
}

impl<'de> Deserialize<'de> for ProjectionHorizon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let months = u32::deserialize(deserializer)?;
        Self::from_months(months).map_err(de::Error::custom)
    }
}
