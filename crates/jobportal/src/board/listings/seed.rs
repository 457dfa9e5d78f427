use crate::board::domain::{Company, CompanyId, Job, JobId, JobType};

/// Static company catalog. There is no create/update path for companies, so
/// these are the only profiles the board ever shows.
pub fn seed_companies() -> Vec<Company> {
    vec![
        Company {
            id: CompanyId("techcorp".to_string()),
            name: "TechCorp".to_string(),
            logo_url: "/logos/techcorp.png".to_string(),
            location: "New York, NY".to_string(),
            industry: "Technology".to_string(),
            tagline: "Innovative Tech Solutions".to_string(),
            description: "TechCorp is a leading technology company focused on building scalable \
                          enterprise software and cloud-native solutions for global clients."
                .to_string(),
        },
        Company {
            id: CompanyId("innova".to_string()),
            name: "InnovaTech".to_string(),
            logo_url: "/logos/innovatech.png".to_string(),
            location: "San Francisco, CA".to_string(),
            industry: "Technology".to_string(),
            tagline: "Leading the Future".to_string(),
            description: "InnovaTech specializes in modern web and mobile products, helping \
                          startups and enterprises design and launch innovative digital \
                          experiences."
                .to_string(),
        },
    ]
}

/// Starter listings shown before any company posts through the dashboard.
/// Ids are stable slugs so they can never collide with the sequential ids the
/// catalog assigns at runtime.
pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: JobId("frontend-developer".to_string()),
            title: "Frontend Developer".to_string(),
            company_id: CompanyId("techcorp".to_string()),
            location: "New York, NY".to_string(),
            salary_range: "$90k - $110k / year".to_string(),
            job_type: JobType::FullTime,
            posted_at: "2 days ago".to_string(),
            description: "Build and maintain customer-facing dashboards with a modern \
                          component stack."
                .to_string(),
            requirements: vec![
                "3+ years building production web interfaces".to_string(),
                "Solid grasp of accessibility fundamentals".to_string(),
            ],
        },
        Job {
            id: JobId("backend-engineer".to_string()),
            title: "Backend Engineer".to_string(),
            company_id: CompanyId("techcorp".to_string()),
            location: "New York, NY".to_string(),
            salary_range: "$110k - $135k / year".to_string(),
            job_type: JobType::FullTime,
            posted_at: "4 days ago".to_string(),
            description: "Design and operate the APIs powering our enterprise integrations."
                .to_string(),
            requirements: vec![
                "Experience running services in production".to_string(),
                "Comfort with relational data modeling".to_string(),
            ],
        },
        Job {
            id: JobId("product-designer".to_string()),
            title: "Product Designer".to_string(),
            company_id: CompanyId("innova".to_string()),
            location: "San Francisco, CA".to_string(),
            salary_range: "$95k - $120k / year".to_string(),
            job_type: JobType::FullTime,
            posted_at: "1 week ago".to_string(),
            description: "Own discovery-to-delivery design for our mobile product line."
                .to_string(),
            requirements: vec!["Portfolio of shipped mobile work".to_string()],
        },
        Job {
            id: JobId("devops-contractor".to_string()),
            title: "DevOps Engineer".to_string(),
            company_id: CompanyId("innova".to_string()),
            location: "Remote".to_string(),
            salary_range: "$70 - $90 / hour".to_string(),
            job_type: JobType::Contract,
            posted_at: "1 week ago".to_string(),
            description: "Six-month engagement hardening our deployment pipeline.".to_string(),
            requirements: vec![
                "Infrastructure-as-code experience".to_string(),
                "On-call rotation familiarity".to_string(),
            ],
        },
        Job {
            id: JobId("support-specialist".to_string()),
            title: "Customer Support Specialist".to_string(),
            company_id: CompanyId("techcorp".to_string()),
            location: "Remote".to_string(),
            salary_range: "$25 - $30 / hour".to_string(),
            job_type: JobType::PartTime,
            posted_at: "2 weeks ago".to_string(),
            description: "Front-line support for our enterprise accounts, afternoons only."
                .to_string(),
            requirements: vec!["Excellent written communication".to_string()],
        },
    ]
}
