use crate::domain::{GeoPoint, InvalidInputError};

/// A circular zone around `center` with a radius in meters.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeoZone {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl GeoZone {
    pub fn new(center: GeoPoint, radius_meters: f64) -> Result<Self, InvalidInputError> {
        let zone = GeoZone { center, radius_meters };
        zone.validate()?;
        Ok(zone)
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        self.center.validate()?;

        if !(self.radius_meters > 0.0 && self.radius_meters.is_finite()) {
            return Err(InvalidInputError::NonPositiveRadius(self.radius_meters));
        }

        Ok(())
    }
}
