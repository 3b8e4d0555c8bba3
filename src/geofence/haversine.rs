use crate::domain::GeoPoint;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters, using the haversine formula.
/// Inputs are assumed to be valid coordinates.
pub fn distance_meters(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    // Rounding can push `a` just outside [0, 1] for (near-)antipodal points
    let a = ((delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2)).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint { latitude, longitude }
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let distance = distance_meters(&point(0.0, 0.0), &point(0.0, 1.0));
        assert!((distance - 111_195.0).abs() <= 50.0, "unexpected distance {}", distance);
    }

    #[rstest]
    #[case::origin(point(0.0, 0.0))]
    #[case::bengaluru(point(12.9716, 77.5946))]
    #[case::north_pole(point(90.0, 0.0))]
    #[case::antimeridian(point(-33.8688, 180.0))]
    fn distance_to_itself_is_zero(#[case] p: GeoPoint) {
        assert_eq!(distance_meters(&p, &p), 0.0);
    }

    #[rstest]
    #[case::nearby(point(12.9716, 77.5946), point(12.9800, 77.6000))]
    #[case::across_hemispheres(point(51.8615899, 4.3580323), point(-33.8688, 151.2093))]
    #[case::across_antimeridian(point(0.0, 179.5), point(0.0, -179.5))]
    #[case::poles(point(90.0, 0.0), point(-90.0, 0.0))]
    fn distance_is_symmetric_and_non_negative(#[case] a: GeoPoint, #[case] b: GeoPoint) {
        let ab = distance_meters(&a, &b);
        let ba = distance_meters(&b, &a);

        assert!(ab >= 0.0);
        assert!((ab - ba).abs() <= 1e-6, "{} != {}", ab, ba);
    }

    #[test]
    fn antipodal_points_are_half_a_circumference_apart() {
        let distance = distance_meters(&point(0.0, 0.0), &point(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() <= 1e-3);
    }

    #[test]
    fn crossing_the_antimeridian_takes_the_short_way() {
        let distance = distance_meters(&point(0.0, 179.5), &point(0.0, -179.5));
        assert!((distance - 111_195.0).abs() <= 50.0, "unexpected distance {}", distance);
    }
}
