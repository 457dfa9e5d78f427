use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Application, Company, CompanyId, Identity, Job, JobId, NewApplication, NewJob};
use super::listings::{
    distinct_locations, filter_jobs, CatalogError, CatalogService, JobFilter, JobTypeFilter,
    ListingStore, LocationFilter,
};
use super::session::{
    evaluate, ApplicationForm, FormError, GateDecision, JobPostForm, ProfileUpdate, RoutePolicy,
    SessionError, SessionManager, SignInForm, SignUpForm, SignUpRequest, LANDING_ROUTE,
    SIGN_IN_ROUTE,
};

/// Shared state behind the board routes: the single session and the catalog.
pub struct BoardState<S> {
    pub sessions: Arc<SessionManager>,
    pub catalog: CatalogService<S>,
}

impl<S> Clone for BoardState<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            catalog: self.catalog.clone(),
        }
    }
}

/// Router builder exposing the board's session and listing endpoints.
pub fn board_router<S>(state: BoardState<S>) -> Router
where
    S: ListingStore + 'static,
{
    Router::new()
        .route("/api/v1/session/sign-in", post(sign_in_handler::<S>))
        .route("/api/v1/session/sign-up", post(sign_up_handler::<S>))
        .route(
            "/api/v1/session",
            get(session_handler::<S>).delete(sign_out_handler::<S>),
        )
        .route("/api/v1/session/profile", patch(update_profile_handler::<S>))
        .route("/api/v1/session/saved-jobs", get(saved_jobs_handler::<S>))
        .route(
            "/api/v1/session/saved-jobs/:job_id",
            put(toggle_saved_job_handler::<S>),
        )
        .route(
            "/api/v1/jobs",
            get(list_jobs_handler::<S>).post(create_job_handler::<S>),
        )
        .route("/api/v1/jobs/:job_id", get(job_details_handler::<S>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(apply_handler::<S>),
        )
        .route("/api/v1/companies", get(list_companies_handler::<S>))
        .route(
            "/api/v1/companies/:company_id",
            get(company_details_handler::<S>),
        )
        .route("/api/v1/company/dashboard", get(dashboard_handler::<S>))
        .with_state(state)
}

/// Snapshot of the session the navigation bar renders from.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub is_authenticated: bool,
    pub is_company: bool,
    pub is_applicant: bool,
    pub is_admin: bool,
    pub saved_job_ids: Vec<JobId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remembered_email: Option<String>,
}

impl SessionView {
    fn snapshot(sessions: &SessionManager) -> Self {
        let identity = sessions.identity();
        Self {
            is_authenticated: identity.is_some(),
            is_company: identity.as_ref().is_some_and(Identity::is_company),
            is_applicant: identity.as_ref().is_some_and(Identity::is_applicant),
            is_admin: identity.as_ref().is_some_and(Identity::is_admin),
            saved_job_ids: sessions.saved_jobs(),
            remembered_email: sessions.remembered_email(),
            identity,
        }
    }
}

/// Filtered listing page: the matching jobs plus the location facet feeding
/// the selection control.
#[derive(Debug, Clone, Serialize)]
pub struct JobListView {
    pub total: usize,
    pub jobs: Vec<Job>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetailsView {
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// One listing on the company dashboard with its applicant pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardJobView {
    pub job: Job,
    pub applicant_count: usize,
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub company_id: CompanyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub jobs: Vec<DashboardJobView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobsQuery {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    job_type: Option<String>,
}

fn form_error_response(error: FormError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

fn catalog_error_response(error: CatalogError) -> Response {
    match error {
        CatalogError::UnknownJob(_) | CatalogError::UnknownCompany(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        CatalogError::Store(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn sign_in_redirect(from: &str) -> Response {
    let payload = json!({
        "error": "sign in required",
        "redirect": SIGN_IN_ROUTE,
        "from": from,
    });
    (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
}

fn landing_redirect() -> Response {
    let payload = json!({
        "error": "company account required",
        "redirect": LANDING_ROUTE,
    });
    (StatusCode::FORBIDDEN, Json(payload)).into_response()
}

fn missing_company_info() -> Response {
    let payload = json!({ "error": "Missing company information on your account." });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

/// Run the access gate for a protected route, yielding the identity on
/// success and the redirect response otherwise.
fn gate(
    sessions: &SessionManager,
    policy: RoutePolicy,
    attempted: &str,
) -> Result<Identity, Response> {
    let Some(identity) = sessions.identity() else {
        return Err(sign_in_redirect(attempted));
    };

    match evaluate(policy, Some(&identity), attempted) {
        GateDecision::Authorized => Ok(identity),
        GateDecision::RedirectToSignIn { from } => Err(sign_in_redirect(&from)),
        GateDecision::RedirectToLanding => Err(landing_redirect()),
    }
}

pub(crate) async fn sign_in_handler<S>(
    State(state): State<BoardState<S>>,
    Json(form): Json<SignInForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    if let Err(error) = form.validate() {
        return form_error_response(error);
    }

    let identity = state.sessions.sign_in(&form.email, &form.password).await;
    if form.remember {
        state.sessions.remember_email(&form.email);
    }

    let payload = json!({ "identity": identity, "redirect": LANDING_ROUTE });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn sign_up_handler<S>(
    State(state): State<BoardState<S>>,
    Json(form): Json<SignUpForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    if let Err(error) = form.validate() {
        return form_error_response(error);
    }

    let request = SignUpRequest {
        name: form.name,
        email: form.email,
        role: form.role,
        company_name: form.company_name,
    };

    match state.sessions.sign_up(request).await {
        Ok(identity) => {
            let payload = json!({ "identity": identity, "redirect": LANDING_ROUTE });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(SessionError::MissingCompanyName) => {
            form_error_response(FormError::MissingCompanyName)
        }
        Err(SessionError::NotAuthenticated) => sign_in_redirect(SIGN_IN_ROUTE),
    }
}

pub(crate) async fn sign_out_handler<S>(State(state): State<BoardState<S>>) -> StatusCode
where
    S: ListingStore + 'static,
{
    state.sessions.sign_out();
    StatusCode::NO_CONTENT
}

pub(crate) async fn session_handler<S>(State(state): State<BoardState<S>>) -> Json<SessionView>
where
    S: ListingStore + 'static,
{
    Json(SessionView::snapshot(&state.sessions))
}

pub(crate) async fn update_profile_handler<S>(
    State(state): State<BoardState<S>>,
    Json(update): Json<ProfileUpdate>,
) -> Response
where
    S: ListingStore + 'static,
{
    if let Err(response) = gate(&state.sessions, RoutePolicy::RequiresAuth, "/profile") {
        return response;
    }

    match state.sessions.update_profile(update) {
        Some(identity) => (StatusCode::OK, Json(identity)).into_response(),
        None => sign_in_redirect("/profile"),
    }
}

pub(crate) async fn toggle_saved_job_handler<S>(
    State(state): State<BoardState<S>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: ListingStore + 'static,
{
    if let Err(response) = gate(&state.sessions, RoutePolicy::RequiresAuth, "/saved-jobs") {
        return response;
    }

    let job_id = JobId(job_id);
    if let Err(error) = state.catalog.job(&job_id) {
        return catalog_error_response(error);
    }

    match state.sessions.toggle_saved_job(&job_id) {
        Ok(saved) => {
            let payload = json!({ "job_id": job_id, "saved": saved });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(SessionError::NotAuthenticated) => sign_in_redirect("/saved-jobs"),
        Err(SessionError::MissingCompanyName) => missing_company_info(),
    }
}

pub(crate) async fn saved_jobs_handler<S>(State(state): State<BoardState<S>>) -> Response
where
    S: ListingStore + 'static,
{
    if let Err(response) = gate(&state.sessions, RoutePolicy::RequiresAuth, "/saved-jobs") {
        return response;
    }

    let mut jobs = Vec::new();
    for job_id in state.sessions.saved_jobs() {
        match state.catalog.job(&job_id) {
            Ok(job) => jobs.push(job),
            Err(CatalogError::UnknownJob(_)) => continue,
            Err(error) => return catalog_error_response(error),
        }
    }

    let payload = json!({ "jobs": jobs });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn list_jobs_handler<S>(
    State(state): State<BoardState<S>>,
    Query(query): Query<JobsQuery>,
) -> Response
where
    S: ListingStore + 'static,
{
    let job_type = match query.job_type.as_deref() {
        None => JobTypeFilter::All,
        Some(raw) => match JobTypeFilter::parse(raw) {
            Some(filter) => filter,
            None => {
                let payload = json!({ "error": format!("unknown job type filter '{raw}'") });
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
            }
        },
    };

    let filter = JobFilter {
        keyword: query.keyword.unwrap_or_default(),
        location: query
            .location
            .as_deref()
            .map(LocationFilter::parse)
            .unwrap_or_default(),
        job_type,
    };

    let jobs = match state.catalog.jobs() {
        Ok(jobs) => jobs,
        Err(error) => return catalog_error_response(error),
    };

    let locations = distinct_locations(&jobs);
    let filtered = filter_jobs(&jobs, &filter);

    let view = JobListView {
        total: filtered.len(),
        jobs: filtered,
        locations,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn create_job_handler<S>(
    State(state): State<BoardState<S>>,
    Json(form): Json<JobPostForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    let identity = match gate(
        &state.sessions,
        RoutePolicy::RequiresCompany,
        "/company/dashboard",
    ) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    if let Err(error) = form.validate() {
        return form_error_response(error);
    }

    let Some(company_id) = identity.company_id else {
        return missing_company_info();
    };

    let fields = NewJob {
        title: form.title,
        company_id,
        location: form.location,
        salary_range: form.salary_range,
        job_type: form.job_type,
        description: form.description,
        requirements: form.requirements,
    };

    match state.catalog.create_job(fields) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(error) => catalog_error_response(error),
    }
}

pub(crate) async fn job_details_handler<S>(
    State(state): State<BoardState<S>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: ListingStore + 'static,
{
    match state.catalog.job(&JobId(job_id)) {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(error) => catalog_error_response(error),
    }
}

pub(crate) async fn apply_handler<S>(
    State(state): State<BoardState<S>>,
    Path(job_id): Path<String>,
    Json(form): Json<ApplicationForm>,
) -> Response
where
    S: ListingStore + 'static,
{
    let attempted = format!("/jobs/{job_id}/apply");
    if let Err(response) = gate(&state.sessions, RoutePolicy::RequiresAuth, &attempted) {
        return response;
    }

    if let Err(error) = form.validate() {
        return form_error_response(error);
    }

    let fields = NewApplication {
        job_id: JobId(job_id),
        applicant_name: form.full_name,
        applicant_email: form.email,
        resume_url: form.resume_url,
        cover_letter: form.cover_letter,
    };

    match state.catalog.apply_to_job(fields) {
        Ok(application) => (StatusCode::CREATED, Json(application)).into_response(),
        Err(error) => catalog_error_response(error),
    }
}

pub(crate) async fn list_companies_handler<S>(State(state): State<BoardState<S>>) -> Response
where
    S: ListingStore + 'static,
{
    match state.catalog.companies() {
        Ok(companies) => {
            let payload = json!({ "companies": companies });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => catalog_error_response(error),
    }
}

pub(crate) async fn company_details_handler<S>(
    State(state): State<BoardState<S>>,
    Path(company_id): Path<String>,
) -> Response
where
    S: ListingStore + 'static,
{
    let company_id = CompanyId(company_id);
    let company = match state.catalog.company(&company_id) {
        Ok(company) => company,
        Err(error) => return catalog_error_response(error),
    };

    let jobs = match state.catalog.jobs_for_company(&company_id) {
        Ok(jobs) => jobs,
        Err(error) => return catalog_error_response(error),
    };

    (StatusCode::OK, Json(CompanyDetailsView { company, jobs })).into_response()
}

pub(crate) async fn dashboard_handler<S>(State(state): State<BoardState<S>>) -> Response
where
    S: ListingStore + 'static,
{
    let identity = match gate(
        &state.sessions,
        RoutePolicy::RequiresCompany,
        "/company/dashboard",
    ) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let Some(company_id) = identity.company_id else {
        return missing_company_info();
    };

    let jobs = match state.catalog.jobs_for_company(&company_id) {
        Ok(jobs) => jobs,
        Err(error) => return catalog_error_response(error),
    };
    let applications = match state.catalog.applications_for_company(&company_id) {
        Ok(applications) => applications,
        Err(error) => return catalog_error_response(error),
    };

    let mut by_job: HashMap<JobId, Vec<Application>> = HashMap::new();
    for application in applications {
        by_job
            .entry(application.job_id.clone())
            .or_default()
            .push(application);
    }

    let jobs = jobs
        .into_iter()
        .map(|job| {
            let applications = by_job.remove(&job.id).unwrap_or_default();
            DashboardJobView {
                applicant_count: applications.len(),
                applications,
                job,
            }
        })
        .collect();

    let view = DashboardView {
        company_id,
        company_name: identity.company_name,
        jobs,
    };
    (StatusCode::OK, Json(view)).into_response()
}
