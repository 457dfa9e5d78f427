use crate::board::domain::{JobType, Role};
use crate::board::session::forms::{
    ApplicationForm, FormError, JobPostForm, SignInForm, SignUpForm,
};

fn sign_up_form() -> SignUpForm {
    SignUpForm {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        role: Role::Applicant,
        company_name: None,
    }
}

#[test]
fn sign_in_requires_email_and_password() {
    let form = SignInForm {
        email: String::new(),
        password: "secret1".to_string(),
        remember: false,
    };
    assert_eq!(form.validate(), Err(FormError::MissingCredentials));

    let form = SignInForm {
        email: "a@x.com".to_string(),
        password: String::new(),
        remember: false,
    };
    assert_eq!(form.validate(), Err(FormError::MissingCredentials));

    let form = SignInForm {
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
        remember: true,
    };
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn sign_up_checks_fields_in_screen_order() {
    let mut form = sign_up_form();
    form.name = "  ".to_string();
    assert_eq!(form.validate(), Err(FormError::MissingFields));

    let mut form = sign_up_form();
    form.confirm_password = "secret2".to_string();
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

    let mut form = sign_up_form();
    form.password = "abc".to_string();
    form.confirm_password = "abc".to_string();
    assert_eq!(form.validate(), Err(FormError::PasswordTooShort));

    assert_eq!(sign_up_form().validate(), Ok(()));
}

#[test]
fn company_sign_up_requires_a_company_name() {
    let mut form = sign_up_form();
    form.role = Role::Company;
    assert_eq!(form.validate(), Err(FormError::MissingCompanyName));

    form.company_name = Some("Acme".to_string());
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn validation_messages_are_displayable_copy() {
    assert_eq!(
        FormError::PasswordTooShort.to_string(),
        "Password must be at least 6 characters."
    );
    assert_eq!(
        FormError::MissingCredentials.to_string(),
        "Email and password are required."
    );
    assert_eq!(
        FormError::IncompleteApplication.to_string(),
        "Please fill in your name, email, and resume link."
    );
}

#[test]
fn application_form_requires_name_email_and_resume() {
    let form = ApplicationForm {
        full_name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        resume_url: String::new(),
        cover_letter: Some("I would be a great fit.".to_string()),
    };
    assert_eq!(form.validate(), Err(FormError::IncompleteApplication));

    let form = ApplicationForm {
        full_name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        resume_url: "https://example.com/cv.pdf".to_string(),
        cover_letter: None,
    };
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn job_post_form_requires_the_core_fields() {
    let form = JobPostForm {
        title: "Platform Engineer".to_string(),
        location: String::new(),
        salary_range: "$100k - $120k / year".to_string(),
        job_type: JobType::FullTime,
        description: "Ship the platform.".to_string(),
        requirements: Vec::new(),
    };
    assert_eq!(form.validate(), Err(FormError::IncompleteJobPost));

    let form = JobPostForm {
        location: "Remote".to_string(),
        ..form
    };
    assert_eq!(form.validate(), Ok(()));
}
