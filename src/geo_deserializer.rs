use crate::domain::{GeoPoint, GeoZone};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoPoint::new(inner.latitude, inner.longitude).map_err(Error::custom)
    }
}

impl<'de> Deserialize<'de> for GeoZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            radius_m: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let center = GeoPoint::new(inner.latitude, inner.longitude).map_err(|e| Error::custom(format!("invalid zone center, {}", e)))?;
        GeoZone::new(center, inner.radius_m).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_valid_point() {
        let result = serde_json::from_value::<GeoPoint>(json!({ "latitude": 51.8615899, "longitude": 4.3580323 })).unwrap();
        assert_eq!(result, GeoPoint { latitude: 51.8615899, longitude: 4.3580323 });
    }

    #[rstest]
    #[case::latitude_too_large(json!({ "latitude": 91.0, "longitude": 0.0 }))]
    #[case::longitude_too_small(json!({ "latitude": 0.0, "longitude": -180.5 }))]
    #[case::missing_longitude(json!({ "latitude": 0.0 }))]
    #[case::not_a_number(json!({ "latitude": "north", "longitude": 0.0 }))]
    fn fails_for_an_invalid_point(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<GeoPoint>(value).is_err());
    }

    #[test]
    fn deserializes_a_valid_zone() {
        let result = serde_json::from_value::<GeoZone>(json!({ "latitude": 12.9716, "longitude": 77.5946, "radius_m": 100.0 })).unwrap();
        assert_eq!(
            result,
            GeoZone {
                center: GeoPoint { latitude: 12.9716, longitude: 77.5946 },
                radius_meters: 100.0
            }
        );
    }

    #[rstest]
    #[case::zero_radius(json!({ "latitude": 12.9716, "longitude": 77.5946, "radius_m": 0.0 }))]
    #[case::negative_radius(json!({ "latitude": 12.9716, "longitude": 77.5946, "radius_m": -5.0 }))]
    #[case::missing_radius(json!({ "latitude": 12.9716, "longitude": 77.5946 }))]
    #[case::invalid_center(json!({ "latitude": 95.0, "longitude": 77.5946, "radius_m": 100.0 }))]
    fn fails_for_an_invalid_zone(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<GeoZone>(value).is_err());
    }

    #[test]
    fn reports_why_a_zone_is_invalid() {
        let error = serde_json::from_value::<GeoZone>(json!({ "latitude": 0.0, "longitude": 0.0, "radius_m": 0.0 })).unwrap_err();
        assert_eq!(error.to_string(), "invalid zone radius: 0, must be a positive number of meters");
    }
}
