use crate::board::domain::{Job, JobType};

/// Sentinel used by the selection controls to mean "no restriction".
pub const ALL: &str = "All";

/// Location criterion; [`LocationFilter::All`] matches every listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Only(String),
}

impl LocationFilter {
    /// Interpret a raw selection value. The `All` sentinel and blank input
    /// both mean no restriction.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }
}

/// Job-type criterion; [`JobTypeFilter::All`] matches every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobTypeFilter {
    #[default]
    All,
    Only(JobType),
}

impl JobTypeFilter {
    /// Interpret a raw selection value; `None` when the value is neither the
    /// `All` sentinel nor a known job type.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL {
            return Some(Self::All);
        }
        JobType::from_label(trimmed).map(Self::Only)
    }
}

/// The three independent criteria composed conjunctively over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFilter {
    pub keyword: String,
    pub location: LocationFilter,
    pub job_type: JobTypeFilter,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let needle = self.keyword.trim().to_lowercase();

        let matches_keyword = needle.is_empty()
            || job.title.to_lowercase().contains(&needle)
            || job.company_id.0.to_lowercase().contains(&needle);

        let matches_location = match &self.location {
            LocationFilter::All => true,
            LocationFilter::Only(location) => job.location == *location,
        };

        let matches_job_type = match self.job_type {
            JobTypeFilter::All => true,
            JobTypeFilter::Only(job_type) => job.job_type == job_type,
        };

        matches_keyword && matches_location && matches_job_type
    }
}

/// Derive the filtered view of the catalog. Deterministic and side-effect
/// free; cheap enough to recompute on every input change.
pub fn filter_jobs(jobs: &[Job], filter: &JobFilter) -> Vec<Job> {
    jobs.iter()
        .filter(|job| filter.matches(job))
        .cloned()
        .collect()
}

/// Distinct locations across the catalog, first-seen order preserved, used to
/// populate the location selection control.
pub fn distinct_locations(jobs: &[Job]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut locations = Vec::new();
    for job in jobs {
        if seen.insert(job.location.clone()) {
            locations.push(job.location.clone());
        }
    }
    locations
}
