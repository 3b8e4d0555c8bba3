use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Decides whether a point at exactly the zone radius counts as inside.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// `distance <= radius`
    #[default]
    Inclusive,
    /// `distance < radius`
    Strict,
}

impl BoundaryPolicy {
    pub fn contains(&self, distance_meters: f64, radius_meters: f64) -> bool {
        match self {
            BoundaryPolicy::Inclusive => distance_meters <= radius_meters,
            BoundaryPolicy::Strict => distance_meters < radius_meters,
        }
    }
}

impl Display for BoundaryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryPolicy::Inclusive => write!(f, "inclusive"),
            BoundaryPolicy::Strict => write!(f, "strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::inclusive_below(BoundaryPolicy::Inclusive, 99.9, true)]
    #[case::inclusive_at(BoundaryPolicy::Inclusive, 100.0, true)]
    #[case::inclusive_above(BoundaryPolicy::Inclusive, 100.1, false)]
    #[case::strict_below(BoundaryPolicy::Strict, 99.9, true)]
    #[case::strict_at(BoundaryPolicy::Strict, 100.0, false)]
    #[case::strict_above(BoundaryPolicy::Strict, 100.1, false)]
    fn contains(#[case] policy: BoundaryPolicy, #[case] distance: f64, #[case] expected: bool) {
        assert_eq!(policy.contains(distance, 100.0), expected);
    }

    #[test]
    fn defaults_to_inclusive() {
        assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Inclusive);
    }

    #[rstest]
    #[case("inclusive", BoundaryPolicy::Inclusive)]
    #[case("strict", BoundaryPolicy::Strict)]
    fn deserializes_lowercase_names(#[case] name: &str, #[case] expected: BoundaryPolicy) {
        assert_eq!(serde_json::from_value::<BoundaryPolicy>(json!(name)).unwrap(), expected);
    }

    #[test]
    fn fails_for_an_unknown_policy() {
        assert!(serde_json::from_value::<BoundaryPolicy>(json!("lenient")).is_err());
    }
}
