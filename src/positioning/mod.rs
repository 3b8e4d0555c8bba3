use crate::app_config::Positioning;
use crate::domain::GeoPoint;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub mod fixed;
pub mod http;

pub use fixed::FixedPositionSource;
pub use http::{HttpPositionSource, PositionClientError};

/// Anything that can tell where the reporter currently is.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<GeoPoint, LocationUnavailableError>;
}

/// The position could not be determined. This never means "outside the zone".
#[derive(Error, Clone, PartialEq, Debug)]
pub enum LocationUnavailableError {
    #[error("permission to read the location was denied")]
    PermissionDenied,
    #[error("no position received within {0:?}")]
    Timeout(Duration),
    #[error("the position source does not support location requests")]
    Unsupported,
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

pub fn from_config(config: &Positioning) -> Result<Arc<dyn PositionSource>, PositionClientError> {
    let source: Arc<dyn PositionSource> = match config {
        Positioning::Fixed { location } => Arc::new(FixedPositionSource::new(*location)),
        Positioning::Http(http) => Arc::new(HttpPositionSource::new(http)?),
    };
    Ok(source)
}
