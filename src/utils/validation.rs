use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::errors::AppError;
use crate::models::filter::FilterState;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{7,20}$").unwrap_or_else(|err| panic!("phone pattern: {err}"))
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap_or_else(|err| panic!("email pattern: {err}")));

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}

pub fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(field_error("required", "Email is required."));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(field_error("email", "Please enter a valid email address."));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(field_error("required", "Phone Number is required."));
    }
    if !PHONE_RE.is_match(phone) {
        return Err(field_error("phone", "Please enter a valid phone number."));
    }
    Ok(())
}

fn parse_rating(raw: &str) -> Result<u8, AppError> {
    match raw.trim().parse::<u8>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(rating),
        _ => Err(AppError::BadRequest(format!("rating must be between 1 and 5, got '{}'", raw))),
    }
}

/// Builds the listing filter from raw query pairs.
///
/// `departments` may repeat and each value is taken verbatim, so names
/// containing commas stay selectable. `ratings` may repeat or carry a comma
/// separated list. The search term is used as typed; the last `search` wins.
pub fn parse_filter_query(pairs: &[(String, String)]) -> Result<FilterState, AppError> {
    let mut filter = FilterState::default();
    for (key, value) in pairs {
        match key.as_str() {
            "search" => filter.search = value.clone(),
            "departments" if !value.is_empty() => {
                filter.departments.insert(value.clone());
            }
            "ratings" => {
                for item in value.split(',').filter(|item| !item.trim().is_empty()) {
                    filter.ratings.insert(parse_rating(item)?);
                }
            }
            _ => {}
        }
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_matches_dialog_rules() {
        assert!(validate_phone("+61 260-824-4986").is_ok());
        assert!(validate_phone("(555) 0100").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("555-CALL-NOW").is_err());
        assert!(validate_phone("+1 234 567 890 123 456 789").is_err());
        assert_eq!(validate_phone("").unwrap_err().message.as_deref(), Some("Phone Number is required."));
    }

    #[test]
    fn blank_is_not_present() {
        assert!(validate_present("   ").is_err());
        assert!(validate_present("x").is_ok());
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(validate_email_shape("grace@example.com").is_ok());
        let err = validate_email_shape("a@localhost").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Please enter a valid email address."));
        assert!(validate_email_shape("grace @example.com").is_err());
    }

    #[test]
    fn blank_email_is_required() {
        let err = validate_email_shape("  ").unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message.as_deref(), Some("Email is required."));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn repeated_departments_keep_commas() {
        let filter = parse_filter_query(&pairs(&[
            ("departments", "Research, Development"),
            ("departments", "Sales"),
            ("departments", ""),
        ]))
        .unwrap();
        assert_eq!(filter.departments.len(), 2);
        assert!(filter.departments.contains("Research, Development"));
        assert!(filter.departments.contains("Sales"));
    }

    #[test]
    fn search_term_is_kept_as_typed() {
        let filter = parse_filter_query(&pairs(&[("search", " smith"), ("page", "2")])).unwrap();
        assert_eq!(filter.search, " smith");
        assert!(filter.departments.is_empty());
    }

    #[test]
    fn ratings_accept_lists_and_repeats_within_one_to_five() {
        let filter = parse_filter_query(&pairs(&[("ratings", "1,5"), ("ratings", "3")])).unwrap();
        assert_eq!(filter.ratings.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert!(matches!(
            parse_filter_query(&pairs(&[("ratings", "0")])),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_filter_query(&pairs(&[("ratings", "two")])),
            Err(AppError::BadRequest(_))
        ));
    }
}
