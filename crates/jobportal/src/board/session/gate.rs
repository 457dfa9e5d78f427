use crate::board::domain::{Identity, Role};

/// Where unauthenticated visitors are sent.
pub const SIGN_IN_ROUTE: &str = "/signin";

/// Default authenticated landing screen, also the wrong-role fallback.
pub const LANDING_ROUTE: &str = "/home";

/// Access requirement attached to a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    RequiresAuth,
    RequiresCompany,
}

/// Outcome of evaluating a navigation attempt against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Authorized,
    /// Send the visitor to the sign-in screen, remembering where they were
    /// headed.
    RedirectToSignIn { from: String },
    /// Signed in, wrong role: back to the landing screen.
    RedirectToLanding,
}

/// Stateless guard re-evaluated on every navigation. Holds no memory between
/// evaluations beyond the session state passed in.
pub fn evaluate(policy: RoutePolicy, identity: Option<&Identity>, attempted: &str) -> GateDecision {
    let Some(identity) = identity else {
        return GateDecision::RedirectToSignIn {
            from: attempted.to_string(),
        };
    };

    match policy {
        RoutePolicy::RequiresAuth => GateDecision::Authorized,
        RoutePolicy::RequiresCompany => match identity.role {
            Role::Company => GateDecision::Authorized,
            Role::Applicant | Role::Admin => GateDecision::RedirectToLanding,
        },
    }
}
