mod attendance_check;
pub mod attendance_code;
pub mod attendance_stats;
mod boundary_policy;
mod check_state;
mod geo_point;
mod geo_zone;
mod invalid_input;
pub mod od_request;

pub use attendance_check::AttendanceCheckResult;
pub use attendance_code::{AttendanceCode, CodeError};
pub use attendance_stats::{AttendanceSummary, Standing, StandingThresholds, SubjectAttendance};
pub use boundary_policy::BoundaryPolicy;
pub use check_state::CheckState;
pub use geo_point::GeoPoint;
pub use geo_zone::GeoZone;
pub use invalid_input::InvalidInputError;
pub use od_request::{OdKind, OdRequest, OdRequestDraft, OdStatus};
