use crate::infra::InMemoryListingStore;
use chrono::Local;
use clap::Args;
use jobportal::board::domain::{JobType, NewApplication, NewJob, Role};
use jobportal::board::listings::{
    distinct_locations, filter_jobs, CatalogService, JobFilter, ListingCsvImporter,
};
use jobportal::board::session::{SessionManager, SignUpRequest};
use jobportal::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Hydrate the catalog from a listings CSV export before the walkthrough
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
    /// Skip the application and dashboard portion of the demo
    #[arg(long)]
    pub(crate) skip_applications: bool,
}

#[derive(Args, Debug)]
pub(crate) struct JobsImportArgs {
    /// Path to the listings CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_jobs_import(args: JobsImportArgs) -> Result<(), AppError> {
    let rows = ListingCsvImporter::from_path(&args.csv)?;

    println!(
        "Parsed {} listing row(s) from {}",
        rows.len(),
        args.csv.display()
    );
    for row in &rows {
        println!(
            "- {} @ {} | {} | {} | {}",
            row.title,
            row.company_id,
            row.location,
            row.job_type.label(),
            row.salary_range
        );
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Job board demo");

    let store = Arc::new(InMemoryListingStore::seeded());
    let catalog = CatalogService::new(store);

    if let Some(path) = args.jobs_csv {
        let rows = ListingCsvImporter::from_path(&path)?;
        let imported = catalog.import_jobs(rows)?;
        println!(
            "Hydrated {} listing(s) from {}",
            imported.len(),
            path.display()
        );
    }

    let jobs = catalog.jobs()?;
    println!("\nBrowse");
    println!(
        "- {} listings across {} locations",
        jobs.len(),
        distinct_locations(&jobs).len()
    );

    let filter = JobFilter {
        keyword: "engineer".to_string(),
        ..JobFilter::default()
    };
    let matches = filter_jobs(&jobs, &filter);
    println!("- keyword 'engineer' matches {} listing(s):", matches.len());
    for job in &matches {
        println!(
            "  - {} @ {} ({}, {})",
            job.title,
            job.company_id,
            job.location,
            job.job_type.label()
        );
    }

    let sessions = SessionManager::immediate();

    println!("\nCompany flow");
    let company = match sessions
        .sign_up(SignUpRequest {
            name: "Carol".to_string(),
            email: "carol@acme.example.com".to_string(),
            role: Role::Company,
            company_name: Some("Acme Talent".to_string()),
        })
        .await
    {
        Ok(identity) => identity,
        Err(err) => {
            println!("  Sign-up rejected: {err}");
            return Ok(());
        }
    };
    let company_label = company.company_name.clone().unwrap_or_default();
    let Some(company_id) = company.company_id.clone() else {
        println!("  Company sign-up produced no company id");
        return Ok(());
    };
    println!(
        "- Signed up {} for {} (company id {})",
        company.name, company_label, company_id
    );

    let posted = catalog.create_job(NewJob {
        title: "Talent Partner".to_string(),
        company_id: company_id.clone(),
        location: "Remote".to_string(),
        salary_range: "$80k - $95k / year".to_string(),
        job_type: JobType::FullTime,
        description: "Own the hiring pipeline for our client pods.".to_string(),
        requirements: vec!["2+ years in-house recruiting".to_string()],
    })?;
    println!("- Posted '{}' ({}) -> {}", posted.title, posted.id, posted.posted_at);

    if args.skip_applications {
        return Ok(());
    }

    println!("\nApplicant flow");
    sessions.sign_out();
    let applicant = sessions.sign_in("dev@example.com", "secret1").await;
    println!(
        "- Signed in {} <{}> as {}",
        applicant.name,
        applicant.email,
        applicant.role.label()
    );

    match sessions.toggle_saved_job(&posted.id) {
        Ok(saved) => println!("- Saved-job toggle -> saved: {saved}"),
        Err(err) => println!("  Could not save job: {err}"),
    }

    let application = catalog.apply_to_job(NewApplication {
        job_id: posted.id.clone(),
        applicant_name: applicant.name.clone(),
        applicant_email: applicant.email.clone(),
        resume_url: "https://example.com/resume.pdf".to_string(),
        cover_letter: Some("I keep pipelines tidy.".to_string()),
    })?;
    println!(
        "- Applied {} -> {} at {}",
        application.applicant_name,
        application.id,
        application
            .applied_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );

    println!("\nCompany dashboard");
    let dashboard_jobs = catalog.jobs_for_company(&company_id)?;
    let applications = catalog.applications_for_company(&company_id)?;
    println!(
        "- {}: {} listing(s), {} applicant(s)",
        company_label,
        dashboard_jobs.len(),
        applications.len()
    );
    for job in &dashboard_jobs {
        let count = applications
            .iter()
            .filter(|application| application.job_id == job.id)
            .count();
        println!("  - {} | {} applicant(s)", job.title, count);
    }

    sessions.sign_out();
    println!(
        "\nSigned out; session cleared (saved jobs: {})",
        sessions.saved_jobs().len()
    );

    Ok(())
}
