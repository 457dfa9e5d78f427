use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::domain::{CompanyId, Identity, JobId, Role};

/// Display name fabricated for mock sign-ins; there is no account store to
/// look a real one up from.
pub const PLACEHOLDER_DISPLAY_NAME: &str = "John Doe";

/// Latency stamped onto the mock backend boundary when none is configured.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(300);

static COMPANY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_company_id() -> CompanyId {
    let id = COMPANY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CompanyId(format!("company-{id:06}"))
}

/// Fields supplied by the sign-up screen after form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_name: Option<String>,
}

/// Permitted profile mutations; anything absent is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Debug, Default)]
struct SessionState {
    identity: Option<Identity>,
    saved_jobs: BTreeSet<JobId>,
    remembered_email: Option<String>,
}

/// Owns the single active session: the authenticated identity (or none), the
/// saved-job set scoped to it, and the remembered sign-in e-mail.
///
/// Sign-in and sign-up await a simulated latency standing in for the backend
/// round-trip they would otherwise make; swapping in a real backend later
/// replaces the sleep without changing caller contracts. Everything else is
/// synchronous.
pub struct SessionManager {
    state: Mutex<SessionState>,
    latency: Duration,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_LATENCY)
    }
}

impl SessionManager {
    pub fn new(latency: Duration) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            latency,
        }
    }

    /// Zero-latency manager for tests and the CLI demo.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn backend_boundary(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Mock sign-in: always succeeds after the simulated delay, fabricating an
    /// applicant identity bound to the supplied e-mail. The password is not
    /// verified against anything.
    pub async fn sign_in(&self, email: &str, _password: &str) -> Identity {
        self.backend_boundary().await;

        let identity = Identity {
            name: PLACEHOLDER_DISPLAY_NAME.to_string(),
            email: email.to_string(),
            role: Role::Applicant,
            company_id: None,
            company_name: None,
        };

        let mut state = self.state.lock().expect("session mutex poisoned");
        state.identity = Some(identity.clone());
        tracing::info!(email = %identity.email, "session established");
        identity
    }

    /// Mock sign-up. A company sign-up must carry a company name and receives
    /// a freshly synthesized company id; other roles carry no company fields.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<Identity, SessionError> {
        self.backend_boundary().await;

        let (company_id, company_name) = match request.role {
            Role::Company => {
                let name = request
                    .company_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .ok_or(SessionError::MissingCompanyName)?;
                (Some(next_company_id()), Some(name))
            }
            Role::Applicant | Role::Admin => (None, None),
        };

        let identity = Identity {
            name: request.name,
            email: request.email,
            role: request.role,
            company_id,
            company_name,
        };

        let mut state = self.state.lock().expect("session mutex poisoned");
        state.identity = Some(identity.clone());
        tracing::info!(
            email = %identity.email,
            role = identity.role.label(),
            "account registered"
        );
        Ok(identity)
    }

    /// Clears the identity and its saved jobs in one step. The remembered
    /// e-mail survives sign-out; it exists for the next sign-in screen.
    pub fn sign_out(&self) {
        let mut state = self.state.lock().expect("session mutex poisoned");
        state.identity = None;
        state.saved_jobs.clear();
        tracing::debug!("session cleared");
    }

    /// Idempotent bookmark toggle. Returns whether the job is saved after the
    /// call. Saving requires an active session.
    pub fn toggle_saved_job(&self, job_id: &JobId) -> Result<bool, SessionError> {
        let mut state = self.state.lock().expect("session mutex poisoned");
        if state.identity.is_none() {
            return Err(SessionError::NotAuthenticated);
        }

        if state.saved_jobs.remove(job_id) {
            Ok(false)
        } else {
            state.saved_jobs.insert(job_id.clone());
            Ok(true)
        }
    }

    pub fn saved_jobs(&self) -> Vec<JobId> {
        let state = self.state.lock().expect("session mutex poisoned");
        state.saved_jobs.iter().cloned().collect()
    }

    /// Merge permitted fields into the active identity; no-op when nobody is
    /// signed in. Company names only stick to company accounts.
    pub fn update_profile(&self, update: ProfileUpdate) -> Option<Identity> {
        let mut state = self.state.lock().expect("session mutex poisoned");
        let identity = state.identity.as_mut()?;

        if let Some(name) = update.name {
            identity.name = name;
        }
        if identity.role == Role::Company {
            if let Some(company_name) = update.company_name {
                identity.company_name = Some(company_name);
            }
        }

        Some(identity.clone())
    }

    pub fn identity(&self) -> Option<Identity> {
        let state = self.state.lock().expect("session mutex poisoned");
        state.identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn is_company(&self) -> bool {
        self.identity().is_some_and(|identity| identity.is_company())
    }

    pub fn is_applicant(&self) -> bool {
        self.identity()
            .is_some_and(|identity| identity.is_applicant())
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|identity| identity.is_admin())
    }

    /// Keep the last-used sign-in e-mail for the next visit.
    pub fn remember_email(&self, email: &str) {
        let mut state = self.state.lock().expect("session mutex poisoned");
        state.remembered_email = Some(email.to_string());
    }

    pub fn remembered_email(&self) -> Option<String> {
        let state = self.state.lock().expect("session mutex poisoned");
        state.remembered_email.clone()
    }
}

/// Error raised by session commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no active session")]
    NotAuthenticated,
    #[error("company sign-up requires a company name")]
    MissingCompanyName,
}
