use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::board::domain::{
    Application, ApplicationId, Company, CompanyId, Job, JobId, NewApplication, NewJob,
};

use super::store::{ListingStore, StoreError};

/// Display timestamp stamped onto freshly posted listings.
pub const JUST_POSTED: &str = "Just now";

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

/// Facade over the listing store: id assignment, timestamps, and the
/// company-scoped dashboard queries.
pub struct CatalogService<S> {
    store: Arc<S>,
}

impl<S> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> CatalogService<S>
where
    S: ListingStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Publish a new listing. The job receives a fresh sequential id and the
    /// "just posted" display stamp, and lands at the head of the collection.
    pub fn create_job(&self, fields: NewJob) -> Result<Job, CatalogError> {
        let job = Job {
            id: next_job_id(),
            title: fields.title,
            company_id: fields.company_id,
            location: fields.location,
            salary_range: fields.salary_range,
            job_type: fields.job_type,
            posted_at: JUST_POSTED.to_string(),
            description: fields.description,
            requirements: fields.requirements,
        };

        let stored = self.store.insert_job(job)?;
        tracing::info!(job = %stored.id, company = %stored.company_id, "listing published");
        Ok(stored)
    }

    /// Record an application against an existing listing.
    pub fn apply_to_job(&self, fields: NewApplication) -> Result<Application, CatalogError> {
        if self.store.job(&fields.job_id)?.is_none() {
            return Err(CatalogError::UnknownJob(fields.job_id));
        }

        let application = Application {
            id: next_application_id(),
            job_id: fields.job_id,
            applicant_name: fields.applicant_name,
            applicant_email: fields.applicant_email,
            resume_url: fields.resume_url,
            cover_letter: fields.cover_letter,
            applied_at: Utc::now(),
        };

        let stored = self.store.insert_application(application)?;
        tracing::info!(application = %stored.id, job = %stored.job_id, "application received");
        Ok(stored)
    }

    /// Hydrate the catalog from imported rows, preserving file order at the
    /// head of the collection. Rows are inserted back-to-front so the first
    /// row ends up newest.
    pub fn import_jobs(&self, rows: Vec<NewJob>) -> Result<Vec<Job>, CatalogError> {
        let mut created = Vec::with_capacity(rows.len());
        for row in rows.into_iter().rev() {
            created.push(self.create_job(row)?);
        }
        created.reverse();
        Ok(created)
    }

    pub fn jobs(&self) -> Result<Vec<Job>, CatalogError> {
        Ok(self.store.jobs()?)
    }

    pub fn job(&self, id: &JobId) -> Result<Job, CatalogError> {
        self.store
            .job(id)?
            .ok_or_else(|| CatalogError::UnknownJob(id.clone()))
    }

    pub fn companies(&self) -> Result<Vec<Company>, CatalogError> {
        Ok(self.store.companies()?)
    }

    pub fn company(&self, id: &CompanyId) -> Result<Company, CatalogError> {
        self.store
            .company(id)?
            .ok_or_else(|| CatalogError::UnknownCompany(id.clone()))
    }

    pub fn applications(&self) -> Result<Vec<Application>, CatalogError> {
        Ok(self.store.applications()?)
    }

    pub fn applications_for_job(&self, job_id: &JobId) -> Result<Vec<Application>, CatalogError> {
        let mut applications = self.store.applications()?;
        applications.retain(|application| application.job_id == *job_id);
        Ok(applications)
    }

    pub fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>, CatalogError> {
        let mut jobs = self.store.jobs()?;
        jobs.retain(|job| job.company_id == *company_id);
        Ok(jobs)
    }

    /// Applications visible on a company dashboard: only those whose job
    /// resolves to the given company.
    pub fn applications_for_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Application>, CatalogError> {
        let owned: HashSet<JobId> = self
            .jobs_for_company(company_id)?
            .into_iter()
            .map(|job| job.id)
            .collect();

        let mut applications = self.store.applications()?;
        applications.retain(|application| owned.contains(&application.job_id));
        Ok(applications)
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no job with id {0}")]
    UnknownJob(JobId),
    #[error("no company with id {0}")]
    UnknownCompany(CompanyId),
}
