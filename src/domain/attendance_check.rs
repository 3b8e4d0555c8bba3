use std::fmt::{Display, Formatter};

/// Outcome of a geofence check. Both variants carry the computed distance so
/// the caller can audit the decision.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AttendanceCheckResult {
    Inside { distance_meters: f64 },
    Outside { distance_meters: f64 },
}

impl AttendanceCheckResult {
    pub fn distance_meters(&self) -> f64 {
        match self {
            AttendanceCheckResult::Inside { distance_meters } | AttendanceCheckResult::Outside { distance_meters } => *distance_meters,
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, AttendanceCheckResult::Inside { .. })
    }
}

impl Display for AttendanceCheckResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceCheckResult::Inside { distance_meters } => write!(f, "inside, {:.1} m from center", distance_meters),
            AttendanceCheckResult::Outside { distance_meters } => write!(f, "outside, {:.1} m from center", distance_meters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::inside(AttendanceCheckResult::Inside { distance_meters: 12.34 }, "inside, 12.3 m from center")]
    #[case::outside(AttendanceCheckResult::Outside { distance_meters: 1048.0 }, "outside, 1048.0 m from center")]
    fn test_display(#[case] result: AttendanceCheckResult, #[case] expected: &str) {
        assert_eq!(format!("{}", result), expected);
    }

    #[test]
    fn distance_is_available_for_both_variants() {
        assert_eq!(AttendanceCheckResult::Inside { distance_meters: 3.0 }.distance_meters(), 3.0);
        assert_eq!(AttendanceCheckResult::Outside { distance_meters: 7.0 }.distance_meters(), 7.0);
    }
}
