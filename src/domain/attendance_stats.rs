use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Clone, PartialEq, Debug)]
pub struct SubjectAttendance {
    subject: String,
    present: u32,
    total: u32,
}

impl SubjectAttendance {
    pub fn new(subject: impl Into<String>, present: u32, total: u32) -> Result<Self, AttendanceError> {
        let subject = subject.into();
        if present > total {
            return Err(AttendanceError::PresentExceedsTotal { subject, present, total });
        }

        Ok(SubjectAttendance { subject, present, total })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn present(&self) -> u32 {
        self.present
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn absent(&self) -> u32 {
        self.total - self.present
    }

    /// Attendance rounded to the nearest whole percent, `None` if no classes were held.
    pub fn percentage(&self) -> Option<u8> {
        percentage_of(self.present as u64, self.total as u64)
    }
}

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct AttendanceSummary {
    total: u64,
    present: u64,
    absent: u64,
}

impl AttendanceSummary {
    pub fn from_subjects(subjects: &[SubjectAttendance]) -> Self {
        subjects.iter().fold(AttendanceSummary::default(), |summary, subject| AttendanceSummary {
            total: summary.total + subject.total() as u64,
            present: summary.present + subject.present() as u64,
            absent: summary.absent + subject.absent() as u64,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn present(&self) -> u64 {
        self.present
    }

    pub fn absent(&self) -> u64 {
        self.absent
    }

    pub fn percentage(&self) -> Option<u8> {
        percentage_of(self.present, self.total)
    }
}

fn percentage_of(present: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }

    Some((present as f64 * 100.0 / total as f64).round() as u8)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Standing {
    Good,
    Warning,
    AtRisk,
}

impl Standing {
    pub fn classify(percentage: u8, thresholds: &StandingThresholds) -> Standing {
        if percentage >= thresholds.good() {
            Standing::Good
        } else if percentage >= thresholds.warning() {
            Standing::Warning
        } else {
            Standing::AtRisk
        }
    }
}

impl Display for Standing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Standing::Good => write!(f, "good"),
            Standing::Warning => write!(f, "warning"),
            Standing::AtRisk => write!(f, "at risk"),
        }
    }
}

/// Minimum percentages for a good standing and for a warning, `warning <= good <= 100`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StandingThresholds {
    good: u8,
    warning: u8,
}

impl StandingThresholds {
    pub fn new(good: u8, warning: u8) -> Result<Self, AttendanceError> {
        if good > 100 || warning > good {
            return Err(AttendanceError::InvalidThresholds { good, warning });
        }

        Ok(StandingThresholds { good, warning })
    }

    pub fn good(&self) -> u8 {
        self.good
    }

    pub fn warning(&self) -> u8 {
        self.warning
    }
}

impl<'de> Deserialize<'de> for StandingThresholds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            good: u8,
            warning: u8,
        }

        let inner = Inner::deserialize(deserializer)?;
        StandingThresholds::new(inner.good, inner.warning).map_err(Error::custom)
    }
}

impl Default for StandingThresholds {
    fn default() -> Self {
        StandingThresholds { good: 90, warning: 75 }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum AttendanceError {
    #[error("'{subject}' has {present} classes attended out of {total} held")]
    PresentExceedsTotal { subject: String, present: u32, total: u32 },
    #[error("invalid standing thresholds: warning {warning}% must not exceed good {good}%, which must not exceed 100%")]
    InvalidThresholds { good: u8, warning: u8 },
}
