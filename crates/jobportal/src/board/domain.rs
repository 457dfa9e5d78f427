use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for job listings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for companies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employment category advertised on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    pub const fn ordered() -> [Self; 3] {
        [Self::FullTime, Self::PartTime, Self::Contract]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::PartTime => "Part-Time",
            Self::Contract => "Contract",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|job_type| job_type.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// Account role determining which screens and commands are permitted.
///
/// `user` is accepted on the wire as a legacy spelling of the applicant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "user")]
    Applicant,
    Company,
    Admin,
}

impl Role {
    pub const fn ordered() -> [Self; 3] {
        [Self::Applicant, Self::Company, Self::Admin]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }
}

/// The currently authenticated profile. Fabricated client-side; there is no
/// backing account store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl Identity {
    pub fn is_company(&self) -> bool {
        self.role == Role::Company
    }

    pub fn is_applicant(&self) -> bool {
        self.role == Role::Applicant
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A published job listing. Immutable once created; listings are never removed
/// within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company_id: CompanyId,
    pub location: String,
    pub salary_range: String,
    pub job_type: JobType,
    pub posted_at: String,
    pub description: String,
    pub requirements: Vec<String>,
}

/// Company profile from the static seed catalog. No create or update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub logo_url: String,
    pub location: String,
    pub industry: String,
    pub tagline: String,
    pub description: String,
}

/// A submitted job application. Immutable; surfaced only through the owning
/// company's dashboard queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub applied_at: DateTime<Utc>,
}

/// Fields supplied when a company posts a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub company_id: CompanyId,
    pub location: String,
    pub salary_range: String,
    pub job_type: JobType,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Fields supplied when an applicant applies to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub job_id: JobId,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_url: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}
