use jobportal::board::domain::{Application, Company, CompanyId, Job, JobId};
use jobportal::board::listings::seed::{seed_companies, seed_jobs};
use jobportal::board::listings::{ListingStore, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime listing store. Jobs and applications are prepended so the
/// newest record is always first; companies are the static seed catalog.
#[derive(Default)]
pub(crate) struct InMemoryListingStore {
    jobs: Mutex<Vec<Job>>,
    applications: Mutex<Vec<Application>>,
    companies: Vec<Company>,
}

impl InMemoryListingStore {
    pub(crate) fn seeded() -> Self {
        Self {
            jobs: Mutex::new(seed_jobs()),
            applications: Mutex::new(Vec::new()),
            companies: seed_companies(),
        }
    }
}

impl ListingStore for InMemoryListingStore {
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
