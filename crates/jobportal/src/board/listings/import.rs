use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::board::domain::{CompanyId, JobType, NewJob};

/// Errors raised while hydrating the catalog from a listings CSV export.
#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingField { row: usize, field: &'static str },
    UnknownJobType { row: usize, value: String },
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listings export: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listings CSV data: {}", err),
            ListingImportError::MissingField { row, field } => {
                write!(f, "row {} is missing required field '{}'", row, field)
            }
            ListingImportError::UnknownJobType { row, value } => {
                write!(f, "row {} has unknown job type '{}'", row, value)
            }
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::MissingField { .. } | ListingImportError::UnknownJobType { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads listing rows from a CSV export
/// (`Title,Company,Location,Salary Range,Job Type,Description,Requirements`,
/// requirements `|`-separated) into catalog-ready [`NewJob`] values.
pub struct ListingCsvImporter;

impl ListingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NewJob>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NewJob>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (index, record) in csv_reader.deserialize::<ListingRow>().enumerate() {
            let row_number = index + 1;
            rows.push(record?.into_new_job(row_number)?);
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Salary Range")]
    salary_range: String,
    #[serde(rename = "Job Type")]
    job_type: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Requirements", default)]
    requirements: String,
}

impl ListingRow {
    fn into_new_job(self, row: usize) -> Result<NewJob, ListingImportError> {
        let required = [
            ("Title", &self.title),
            ("Company", &self.company),
            ("Location", &self.location),
            ("Salary Range", &self.salary_range),
            ("Description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ListingImportError::MissingField { row, field });
            }
        }

        let job_type = JobType::from_label(&self.job_type).ok_or_else(|| {
            ListingImportError::UnknownJobType {
                row,
                value: self.job_type.clone(),
            }
        })?;

        let requirements = self
            .requirements
            .split('|')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        Ok(NewJob {
            title: self.title,
            company_id: CompanyId(self.company),
            location: self.location,
            salary_range: self.salary_range,
            job_type,
            description: self.description,
            requirements,
        })
    }
}
