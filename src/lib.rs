pub mod app_config;
pub mod domain;
mod geo_deserializer;
pub mod geofence;
pub mod positioning;
pub mod session;
