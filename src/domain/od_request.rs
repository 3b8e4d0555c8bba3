use chrono::NaiveDate;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::info;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OdKind {
    SportsCompetition,
    TechnicalFest,
    CulturalEvent,
    InternshipInterview,
    MedicalEmergency,
    FamilyFunction,
    ConferenceOrSeminar,
    Other,
}

impl Display for OdKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OdKind::SportsCompetition => "Sports Competition",
            OdKind::TechnicalFest => "Technical Fest",
            OdKind::CulturalEvent => "Cultural Event",
            OdKind::InternshipInterview => "Internship Interview",
            OdKind::MedicalEmergency => "Medical Emergency",
            OdKind::FamilyFunction => "Family Function",
            OdKind::ConferenceOrSeminar => "Conference/Seminar",
            OdKind::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OdStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for OdStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OdStatus::Pending => write!(f, "pending"),
            OdStatus::Approved => write!(f, "approved"),
            OdStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An on-duty request as it is being filled in. Nothing is validated until [`OdRequestDraft::submit`].
#[derive(Clone, Default, Debug)]
pub struct OdRequestDraft {
    pub student: String,
    pub subject: Option<String>,
    pub kind: Option<OdKind>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    supporting_documents: Vec<String>,
}

impl OdRequestDraft {
    pub fn new(student: impl Into<String>) -> Self {
        OdRequestDraft {
            student: student.into(),
            ..Default::default()
        }
    }

    pub fn attach(&mut self, document: impl Into<String>) {
        self.supporting_documents.push(document.into());
    }

    pub fn remove_document(&mut self, index: usize) -> Option<String> {
        if index < self.supporting_documents.len() {
            Some(self.supporting_documents.remove(index))
        } else {
            None
        }
    }

    pub fn supporting_documents(&self) -> &[String] {
        &self.supporting_documents
    }

    pub fn submit(self) -> Result<OdRequest, OdError> {
        let subject = non_blank(self.subject);
        let description = non_blank(self.description);

        let mut missing = Vec::new();
        if subject.is_none() {
            missing.push("subject");
        }
        if self.kind.is_none() {
            missing.push("reason");
        }
        if description.is_none() {
            missing.push("description");
        }
        if self.start_date.is_none() {
            missing.push("start date");
        }
        if self.end_date.is_none() {
            missing.push("end date");
        }

        let (Some(subject), Some(kind), Some(description), Some(start_date), Some(end_date)) =
            (subject, self.kind, description, self.start_date, self.end_date)
        else {
            return Err(OdError::MissingFields(missing));
        };

        if start_date > end_date {
            return Err(OdError::InvalidDateRange { start_date, end_date });
        }

        info!("📝 OD request from '{}' for '{}' submitted", self.student, subject);
        Ok(OdRequest {
            student: self.student,
            subject,
            kind,
            description,
            start_date,
            end_date,
            supporting_documents: self.supporting_documents,
            status: OdStatus::Pending,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Clone, PartialEq, Debug)]
pub struct OdRequest {
    student: String,
    subject: String,
    kind: OdKind,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    supporting_documents: Vec<String>,
    status: OdStatus,
}

impl OdRequest {
    pub fn student(&self) -> &str {
        &self.student
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn kind(&self) -> OdKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn supporting_documents(&self) -> &[String] {
        &self.supporting_documents
    }

    pub fn status(&self) -> OdStatus {
        self.status
    }

    /// Number of days covered, both ends included.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn approve(&mut self) -> Result<(), OdError> {
        self.review(OdStatus::Approved)
    }

    pub fn reject(&mut self) -> Result<(), OdError> {
        self.review(OdStatus::Rejected)
    }

    fn review(&mut self, status: OdStatus) -> Result<(), OdError> {
        if self.status != OdStatus::Pending {
            return Err(OdError::AlreadyReviewed(self.status));
        }

        self.status = status;
        info!("📝 OD request from '{}' {}", self.student, status);
        Ok(())
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum OdError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("start date {start_date} is after end date {end_date}")]
    InvalidDateRange { start_date: NaiveDate, end_date: NaiveDate },
    #[error("request was already {0}")]
    AlreadyReviewed(OdStatus),
}
