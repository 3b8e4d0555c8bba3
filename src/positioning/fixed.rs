use crate::domain::GeoPoint;
use crate::positioning::{LocationUnavailableError, PositionSource};
use async_trait::async_trait;

/// Always reports the same, configured position. Used for kiosks mounted in a classroom.
#[derive(Clone, Debug)]
pub struct FixedPositionSource {
    location: GeoPoint,
}

impl FixedPositionSource {
    pub fn new(location: GeoPoint) -> Self {
        FixedPositionSource { location }
    }
}

#[async_trait]
impl PositionSource for FixedPositionSource {
    async fn current_position(&self) -> Result<GeoPoint, LocationUnavailableError> {
        Ok(self.location)
    }
}
