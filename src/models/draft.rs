use serde::Deserialize;
use validator::Validate;

use crate::models::employee::{CompanyRef, EmployeeRecord};
use crate::utils::validation::{validate_email_shape, validate_phone, validate_present};

// Payload of the "Add New Employee" dialog.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    #[validate(custom(function = "validate_present", message = "First Name is required."))]
    pub first_name: String,
    #[validate(custom(function = "validate_present", message = "Last Name is required."))]
    pub last_name: String,
    #[validate(custom = "validate_email_shape")]
    pub email: String,
    #[validate(custom(function = "validate_present", message = "Department is required."))]
    pub department: String,
    #[validate(
        required(message = "Age is required."),
        range(min = 18, max = 99, message = "Age must be a number between 18 and 99.")
    )]
    pub age: Option<u32>,
    #[validate(custom = "validate_phone")]
    pub phone: String,
}

impl EmployeeDraft {
    pub(crate) fn into_record(self, id: u64) -> EmployeeRecord {
        EmployeeRecord {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            age: self.age.unwrap_or_default(),
            company: CompanyRef {
                department: self.department.trim().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            department: "Engineering".into(),
            age: Some(45),
            phone: "+1 (555) 010-2000".into(),
        }
    }

    #[test]
    fn accepts_complete_draft() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let draft = EmployeeDraft {
            first_name: "  ".into(),
            age: Some(17),
            phone: "12".into(),
            email: "not-an-email".into(),
            ..valid_draft()
        };
        let err = AppError::from(draft.validate().unwrap_err());
        match err {
            AppError::Validation(fields) => {
                assert_eq!(fields["firstName"], vec!["First Name is required.".to_string()]);
                assert_eq!(fields["age"], vec!["Age must be a number between 18 and 99.".to_string()]);
                assert!(fields.contains_key("phone"));
                assert!(fields.contains_key("email"));
                assert!(!fields.contains_key("lastName"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    fn email_errors(email: &str) -> Vec<String> {
        let draft = EmployeeDraft { email: email.into(), ..valid_draft() };
        match AppError::from(draft.validate().unwrap_err()) {
            AppError::Validation(mut fields) => fields.remove("email").unwrap_or_default(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn email_without_dotted_domain_is_rejected() {
        assert_eq!(email_errors("a@localhost"), vec!["Please enter a valid email address.".to_string()]);
    }

    #[test]
    fn blank_email_reports_required() {
        assert_eq!(email_errors(""), vec!["Email is required.".to_string()]);
        assert_eq!(email_errors("   "), vec!["Email is required.".to_string()]);
    }

    #[test]
    fn missing_age_is_required() {
        let draft = EmployeeDraft { age: None, ..valid_draft() };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn into_record_trims_and_nests_department() {
        let draft = EmployeeDraft { first_name: " Grace ".into(), ..valid_draft() };
        let record = draft.into_record(9);
        assert_eq!(record.id, 9);
        assert_eq!(record.first_name, "Grace");
        assert_eq!(record.department(), "Engineering");
        assert_eq!(record.age, 45);
    }
}
