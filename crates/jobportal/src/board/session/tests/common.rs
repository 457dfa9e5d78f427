use crate::board::domain::{CompanyId, Identity, Role};
use crate::board::session::manager::{SessionManager, SignUpRequest};

pub(super) fn manager() -> SessionManager {
    SessionManager::immediate()
}

pub(super) fn applicant_identity() -> Identity {
    Identity {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        role: Role::Applicant,
        company_id: None,
        company_name: None,
    }
}

pub(super) fn company_identity() -> Identity {
    Identity {
        name: "Carol".to_string(),
        email: "c@acme.com".to_string(),
        role: Role::Company,
        company_id: Some(CompanyId("company-000042".to_string())),
        company_name: Some("Acme".to_string()),
    }
}

pub(super) fn admin_identity() -> Identity {
    Identity {
        name: "Root".to_string(),
        email: "root@x.com".to_string(),
        role: Role::Admin,
        company_id: None,
        company_name: None,
    }
}

pub(super) fn company_sign_up(company_name: Option<&str>) -> SignUpRequest {
    SignUpRequest {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        role: Role::Company,
        company_name: company_name.map(str::to_string),
    }
}

pub(super) fn applicant_sign_up() -> SignUpRequest {
    SignUpRequest {
        name: "Bob".to_string(),
        email: "b@x.com".to_string(),
        role: Role::Applicant,
        company_name: None,
    }
}
