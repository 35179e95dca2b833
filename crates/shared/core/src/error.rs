use thiserror::Error;

/// Errors returned by the analytics functions.
///
/// Validation of calibration bands is reported inside `QbResult` instead;
/// these variants cover inputs for which no meaningful number exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A ratio would have a zero (or otherwise unusable) denominator
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Venue comparison requires at least one quote")]
    EmptyVenueSet,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl AnalyticsError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput(reason.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }
}

pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;
