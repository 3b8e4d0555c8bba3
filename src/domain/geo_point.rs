use crate::domain::InvalidInputError;
use std::fmt::{Display, Formatter};

/// A position on the Earth's surface in decimal degrees.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidInputError> {
        let point = GeoPoint { latitude, longitude };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        // NaN fails both comparisons
        if !(self.latitude >= -90.0 && self.latitude <= 90.0) {
            return Err(InvalidInputError::LatitudeOutOfRange(self.latitude));
        }

        if !(self.longitude >= -180.0 && self.longitude <= 180.0) {
            return Err(InvalidInputError::LongitudeOutOfRange(self.longitude));
        }

        Ok(())
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
