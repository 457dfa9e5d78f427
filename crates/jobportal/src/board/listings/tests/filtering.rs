use crate::board::domain::{CompanyId, Job, JobId, JobType};
use crate::board::listings::filter::{
    distinct_locations, filter_jobs, JobFilter, JobTypeFilter, LocationFilter,
};

fn job(id: &str, title: &str, company: &str, location: &str, job_type: JobType) -> Job {
    Job {
        id: JobId(id.to_string()),
        title: title.to_string(),
        company_id: CompanyId(company.to_string()),
        location: location.to_string(),
        salary_range: "$100k - $120k / year".to_string(),
        job_type,
        posted_at: "1 day ago".to_string(),
        description: "Ship features.".to_string(),
        requirements: Vec::new(),
    }
}

fn sample() -> Vec<Job> {
    vec![
        job("j1", "Frontend Developer", "techcorp", "NY", JobType::FullTime),
        job("j2", "Backend Engineer", "techcorp", "NY", JobType::FullTime),
        job("j3", "Product Designer", "innova", "SF", JobType::Contract),
        job("j4", "Support Specialist", "innova", "Remote", JobType::PartTime),
    ]
}

#[test]
fn keyword_matches_title_case_insensitively() {
    let jobs = sample();
    let filter = JobFilter {
        keyword: "front".to_string(),
        ..JobFilter::default()
    };

    let filtered = filter_jobs(&jobs, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Frontend Developer");
}

#[test]
fn keyword_also_matches_company_id() {
    let jobs = sample();
    let filter = JobFilter {
        keyword: "INNOVA".to_string(),
        ..JobFilter::default()
    };

    let filtered = filter_jobs(&jobs, &filter);
    assert_eq!(filtered.len(), 2);
    assert!(filtered
        .iter()
        .all(|job| job.company_id == CompanyId("innova".to_string())));
}

#[test]
fn blank_keyword_matches_everything() {
    let jobs = sample();
    let filter = JobFilter {
        keyword: "   ".to_string(),
        ..JobFilter::default()
    };

    assert_eq!(filter_jobs(&jobs, &filter).len(), jobs.len());
}

#[test]
fn criteria_compose_conjunctively() {
    let jobs = sample();
    let filter = JobFilter {
        keyword: "e".to_string(),
        location: LocationFilter::Only("NY".to_string()),
        job_type: JobTypeFilter::Only(JobType::FullTime),
    };

    let filtered = filter_jobs(&jobs, &filter);
    assert_eq!(filtered.len(), 2);

    let strict = JobFilter {
        location: LocationFilter::Only("SF".to_string()),
        job_type: JobTypeFilter::Only(JobType::FullTime),
        ..JobFilter::default()
    };
    assert!(filter_jobs(&jobs, &strict).is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let jobs = sample();
    let filter = JobFilter {
        keyword: "engineer".to_string(),
        location: LocationFilter::Only("NY".to_string()),
        job_type: JobTypeFilter::All,
    };

    let once = filter_jobs(&jobs, &filter);
    let twice = filter_jobs(&once, &filter);
    assert_eq!(once, twice);
}

#[test]
fn sentinel_values_parse_to_all() {
    assert_eq!(LocationFilter::parse("All"), LocationFilter::All);
    assert_eq!(LocationFilter::parse("  "), LocationFilter::All);
    assert_eq!(
        LocationFilter::parse("Remote"),
        LocationFilter::Only("Remote".to_string())
    );

    assert_eq!(JobTypeFilter::parse("All"), Some(JobTypeFilter::All));
    assert_eq!(
        JobTypeFilter::parse("Part-Time"),
        Some(JobTypeFilter::Only(JobType::PartTime))
    );
    assert_eq!(JobTypeFilter::parse("Gig"), None);
}

#[test]
fn distinct_locations_deduplicate_in_first_seen_order() {
    let jobs = sample();
    assert_eq!(distinct_locations(&jobs), vec!["NY", "SF", "Remote"]);
    assert!(distinct_locations(&[]).is_empty());
}
