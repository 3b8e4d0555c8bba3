use crate::domain::{AttendanceCheckResult, InvalidInputError};
use crate::positioning::LocationUnavailableError;
use std::fmt::{Display, Formatter};

/// Observable state of a location check, as published by an attendance session.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum CheckState {
    #[default]
    Idle,
    Pending,
    Inside { distance_meters: f64 },
    Outside { distance_meters: f64 },
    /// Eligibility could not be determined; the user may retry.
    Unavailable(LocationUnavailableError),
    Invalid(InvalidInputError),
}

impl CheckState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, CheckState::Idle | CheckState::Pending)
    }
}

impl From<AttendanceCheckResult> for CheckState {
    fn from(result: AttendanceCheckResult) -> Self {
        match result {
            AttendanceCheckResult::Inside { distance_meters } => CheckState::Inside { distance_meters },
            AttendanceCheckResult::Outside { distance_meters } => CheckState::Outside { distance_meters },
        }
    }
}

impl Display for CheckState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckState::Idle => write!(f, "idle"),
            CheckState::Pending => write!(f, "pending"),
            CheckState::Inside { distance_meters } => write!(f, "inside ({:.1} m)", distance_meters),
            CheckState::Outside { distance_meters } => write!(f, "outside ({:.1} m)", distance_meters),
            CheckState::Unavailable(e) => write!(f, "location unavailable: {}", e),
            CheckState::Invalid(e) => write!(f, "invalid input: {}", e),
        }
    }
}
