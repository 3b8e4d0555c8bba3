use crate::domain::{BoundaryPolicy, GeoPoint, GeoZone, StandingThresholds};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    zone: GeoZone,
    #[serde(default)]
    boundary_policy: BoundaryPolicy,
    positioning: Positioning,
    #[serde(default)]
    attendance: Attendance,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("ROLLCALL").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn zone(&self) -> &GeoZone {
        &self.zone
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary_policy
    }

    pub fn positioning(&self) -> &Positioning {
        &self.positioning
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Positioning {
    Fixed { location: GeoPoint },
    Http(HttpPositioning),
}

impl Positioning {
    pub fn source_name(&self) -> &'static str {
        match self {
            Positioning::Fixed { .. } => "fixed",
            Positioning::Http(_) => "http",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct HttpPositioning {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

const DEFAULT_CODE_LENGTH: NonZeroUsize = NonZeroUsize::new(6).unwrap();
const DEFAULT_CODE_VALIDITY: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Attendance {
    code_length: NonZeroUsize,
    #[serde(with = "humantime_serde")]
    code_validity: Duration,
    standing: StandingThresholds,
}

impl Default for Attendance {
    fn default() -> Self {
        Attendance {
            code_length: DEFAULT_CODE_LENGTH,
            code_validity: DEFAULT_CODE_VALIDITY,
            standing: StandingThresholds::default(),
        }
    }
}

impl Attendance {
    pub fn code_length(&self) -> NonZeroUsize {
        self.code_length
    }

    pub fn code_validity(&self) -> Duration {
        self.code_validity
    }

    pub fn standing(&self) -> &StandingThresholds {
        &self.standing
    }
}
