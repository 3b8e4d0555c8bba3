pub mod haversine;
mod validator;

pub use validator::{check_attendance, check_attendance_with};
