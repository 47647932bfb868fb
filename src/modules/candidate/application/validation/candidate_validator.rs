use serde_json::Value as JsonValue;

use super::rules::{is_valid_address, is_valid_date, is_valid_email, is_valid_name, is_valid_phone};
use super::validation_error::{ValidationError, ValidationErrorKind};
use crate::candidate::domain::{CandidateInput, CvEntry, Presence};

/// Checks a candidate payload and returns the first violation found.
///
/// Order matters: callers rely on which error surfaces for a payload with
/// several problems, so checks run top to bottom and stop at the first
/// failure:
///
/// 1. `firstName`, then `lastName` (`InvalidName`)
/// 2. `email` (`InvalidEmail`)
/// 3. `address` if provided (`InvalidAddress`)
/// 4. `phone` if provided (`InvalidPhone`)
/// 5. every education's start/end date (`InvalidDate`)
/// 6. every work experience's start date (`InvalidDate`) and end date (`InvalidEndDate`)
/// 7. `cv` keys, when present (`InvalidCv`)
///
/// A payload carrying an `id` is on the update path and is accepted as is.
pub fn validate_candidate(input: &CandidateInput) -> Result<(), ValidationError> {
    if input.id.is_provided() {
        return Ok(());
    }

    check_name("firstName", &input.first_name)?;
    check_name("lastName", &input.last_name)?;

    match input.email.provided() {
        Some(email) if is_valid_email(email) => {}
        _ => return Err(ValidationError::new(ValidationErrorKind::InvalidEmail, "email")),
    }

    if let Some(address) = input.address.provided() {
        if !is_valid_address(address) {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidAddress,
                "address",
            ));
        }
    }

    if let Some(phone) = input.phone.provided() {
        if !is_valid_phone(phone) {
            return Err(ValidationError::new(ValidationErrorKind::InvalidPhone, "phone"));
        }
    }

    for (i, education) in input.educations.provided().into_iter().flatten().enumerate() {
        check_date(
            format!("educations[{i}].startDate"),
            &education.start_date,
            ValidationErrorKind::InvalidDate,
        )?;
        if let Some(end_date) = education.end_date.provided() {
            check_date(
                format!("educations[{i}].endDate"),
                end_date,
                ValidationErrorKind::InvalidDate,
            )?;
        }
    }

    for (i, experience) in input
        .work_experiences
        .provided()
        .into_iter()
        .flatten()
        .enumerate()
    {
        check_date(
            format!("workExperiences[{i}].startDate"),
            &experience.start_date,
            ValidationErrorKind::InvalidDate,
        )?;
        if let Some(end_date) = experience.end_date.provided() {
            check_date(
                format!("workExperiences[{i}].endDate"),
                end_date,
                ValidationErrorKind::InvalidEndDate,
            )?;
        }
    }

    if let Some(cv) = input.cv.provided() {
        check_cv(cv)?;
    }

    Ok(())
}

fn check_name(field: &str, name: &Presence<String>) -> Result<(), ValidationError> {
    match name.provided() {
        Some(name) if is_valid_name(name) => Ok(()),
        _ => Err(ValidationError::new(ValidationErrorKind::InvalidName, field)),
    }
}

fn check_date(
    field: String,
    date: &str,
    kind: ValidationErrorKind,
) -> Result<(), ValidationError> {
    if is_valid_date(date) {
        Ok(())
    } else {
        Err(ValidationError::new(kind, field))
    }
}

fn check_cv(cv: &CvEntry) -> Result<(), ValidationError> {
    check_cv_key("cv.filePath", &cv.file_path)?;
    check_cv_key("cv.fileType", &cv.file_type)
}

// A missing key is fine; a key that is there must hold a string.
fn check_cv_key(field: &str, value: &Presence<JsonValue>) -> Result<(), ValidationError> {
    match value {
        Presence::Absent | Presence::Value(JsonValue::String(_)) => Ok(()),
        Presence::Null | Presence::Value(_) => {
            Err(ValidationError::new(ValidationErrorKind::InvalidCv, field))
        }
    }
}
