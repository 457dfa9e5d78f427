use std::sync::{Arc, Mutex};

use crate::board::domain::{
    Application, Company, CompanyId, Job, JobId, JobType, NewApplication, NewJob,
};
use crate::board::listings::seed::{seed_companies, seed_jobs};
use crate::board::listings::service::CatalogService;
use crate::board::listings::store::{ListingStore, StoreError};

/// In-memory store double mirroring the production implementation's
/// prepend-on-insert ordering.
#[derive(Default)]
pub(super) struct MemoryStore {
    jobs: Mutex<Vec<Job>>,
    applications: Mutex<Vec<Application>>,
    companies: Vec<Company>,
}

impl MemoryStore {
    pub(super) fn seeded() -> Self {
        Self {
            jobs: Mutex::new(seed_jobs()),
            applications: Mutex::new(Vec::new()),
            companies: seed_companies(),
        }
    }
}

impl ListingStore for MemoryStore {
    fn insert_job(&self, job: Job) -> Result<Job, StoreError> {
        let mut jobs = self.jobs.lock().expect("job mutex poisoned");
        if jobs.iter().any(|existing| existing.id == job.id) {
            return Err(StoreError::Conflict);
        }
        jobs.insert(0, job.clone());
        Ok(job)
    }

    fn insert_application(&self, application: Application) -> Result<Application, StoreError> {
        let mut applications = self.applications.lock().expect("application mutex poisoned");
        applications.insert(0, application.clone());
        Ok(application)
    }

    fn jobs(&self) -> Result<Vec<Job>, StoreError> {
        Ok(self.jobs.lock().expect("job mutex poisoned").clone())
    }

    fn job(&self, id: &JobId) -> Result<Option<Job>, StoreError> {
        let jobs = self.jobs.lock().expect("job mutex poisoned");
        Ok(jobs.iter().find(|job| job.id == *id).cloned())
    }

    fn applications(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self
            .applications
            .lock()
            .expect("application mutex poisoned")
            .clone())
    }

    fn companies(&self) -> Result<Vec<Company>, StoreError> {
        Ok(self.companies.clone())
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, StoreError> {
        Ok(self
            .companies
            .iter()
            .find(|company| company.id == *id)
            .cloned())
    }
}

pub(super) fn seeded_catalog() -> (CatalogService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded());
    (CatalogService::new(store.clone()), store)
}

pub(super) fn empty_catalog() -> CatalogService<MemoryStore> {
    CatalogService::new(Arc::new(MemoryStore::default()))
}

pub(super) fn new_job(title: &str, company: &str, location: &str, job_type: JobType) -> NewJob {
    NewJob {
        title: title.to_string(),
        company_id: CompanyId(company.to_string()),
        location: location.to_string(),
        salary_range: "$100k - $120k / year".to_string(),
        job_type,
        description: "Help the team ship.".to_string(),
        requirements: vec!["Relevant experience".to_string()],
    }
}

pub(super) fn application_for(job_id: &JobId, applicant: &str) -> NewApplication {
    NewApplication {
        job_id: job_id.clone(),
        applicant_name: applicant.to_string(),
        applicant_email: format!("{}@example.com", applicant.to_lowercase()),
        resume_url: "https://example.com/resume.pdf".to_string(),
        cover_letter: None,
    }
}
