use serde::{Deserialize, Serialize};

use crate::board::domain::{JobType, Role};

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Structural validation failures surfaced directly to the invoking screen.
/// Messages are the displayable copy; nothing is retried and nothing is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("All fields are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Company name is required for a company account.")]
    MissingCompanyName,
    #[error("Please fill in your name, email, and resume link.")]
    IncompleteApplication,
    #[error("Please fill in all required job fields.")]
    IncompleteJobPost,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Sign-in screen payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(())
    }
}

/// Sign-up screen payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.name)
            || blank(&self.email)
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.role == Role::Company
            && self
                .company_name
                .as_deref()
                .map_or(true, blank)
        {
            return Err(FormError::MissingCompanyName);
        }
        Ok(())
    }
}

/// Job application screen payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub resume_url: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.full_name) || blank(&self.email) || blank(&self.resume_url) {
            return Err(FormError::IncompleteApplication);
        }
        Ok(())
    }
}

/// Job posting screen payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostForm {
    pub title: String,
    pub location: String,
    pub salary_range: String,
    pub job_type: JobType,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl JobPostForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.title)
            || blank(&self.location)
            || blank(&self.salary_range)
            || blank(&self.description)
        {
            return Err(FormError::IncompleteJobPost);
        }
        Ok(())
    }
}
