use crate::board::domain::{Application, Company, CompanyId, Job, JobId};

/// Storage abstraction over the listing collections so the catalog service can
/// be exercised in isolation.
///
/// Implementations must keep most-recent-first ordering: `insert_job` and
/// `insert_application` place the new record at the head of its collection,
/// and the read accessors return records in that order. Companies are seed
/// data with no write path.
pub trait ListingStore: Send + Sync {
    fn insert_job(&self, job: Job) -> Result<Job, StoreError>;
    fn insert_application(&self, application: Application) -> Result<Application, StoreError>;
    fn jobs(&self) -> Result<Vec<Job>, StoreError>;
    fn job(&self, id: &JobId) -> Result<Option<Job>, StoreError>;
    fn applications(&self) -> Result<Vec<Application>, StoreError>;
    fn companies(&self) -> Result<Vec<Company>, StoreError>;
    fn company(&self, id: &CompanyId) -> Result<Option<Company>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
