use crate::domain::{AttendanceCheckResult, BoundaryPolicy, GeoPoint, GeoZone, InvalidInputError};
use crate::geofence::haversine::distance_meters;
use tracing::debug;

/// Checks whether `current` lies within `zone`, counting the boundary as inside.
pub fn check_attendance(current: &GeoPoint, zone: &GeoZone) -> Result<AttendanceCheckResult, InvalidInputError> {
    check_attendance_with(current, zone, BoundaryPolicy::Inclusive)
}

pub fn check_attendance_with(current: &GeoPoint, zone: &GeoZone, policy: BoundaryPolicy) -> Result<AttendanceCheckResult, InvalidInputError> {
    current.validate()?;
    zone.validate()?;

    let distance = distance_meters(current, &zone.center);
    let result = if policy.contains(distance, zone.radius_meters) {
        AttendanceCheckResult::Inside { distance_meters: distance }
    } else {
        AttendanceCheckResult::Outside { distance_meters: distance }
    };

    debug!(%policy, radius = zone.radius_meters, "📍 {} is {}", current, result);
    Ok(result)
}
