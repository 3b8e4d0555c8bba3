use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum InvalidInputError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
    #[error("invalid zone radius: {0}, must be a positive number of meters")]
    NonPositiveRadius(f64),
}
