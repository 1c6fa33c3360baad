//! Request validation.
//!
//! Pure checks run by the handlers before any upstream call. The first
//! violation wins; checks run in a fixed order so callers always see the
//! same message for the same input.

use uuid::Uuid;

use crate::employee::error::ValidationError;
use crate::employee::types::{CreateEmployeeInput, NewEmployee};

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 75;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Employee ids must be non-blank UUIDs in the hyphenated 8-4-4-4-12 form.
/// Simple, braced and URN spellings are rejected.
pub fn validate_employee_id(id: &str) -> Result<Uuid, ValidationError> {
    if is_blank(id) {
        return Err(ValidationError::EmptyId);
    }
    let invalid = || ValidationError::InvalidId(id.to_string());
    let uuid = Uuid::parse_str(id).map_err(|_| invalid())?;
    if !uuid.hyphenated().to_string().eq_ignore_ascii_case(id) {
        return Err(invalid());
    }
    Ok(uuid)
}

/// Check a create request and turn it into the upstream payload.
///
/// Order: input present, name, salary, age, title.
pub fn validate_create_employee_input(
    input: Option<&CreateEmployeeInput>,
) -> Result<NewEmployee, ValidationError> {
    let input = input.ok_or(ValidationError::MissingInput)?;

    let name = match input.name.as_deref() {
        Some(name) if !is_blank(name) => name.to_string(),
        _ => return Err(ValidationError::EmptyName),
    };

    let salary = match input.salary {
        Some(salary) if salary >= 0 => salary as u64,
        _ => return Err(ValidationError::InvalidSalary),
    };

    let age = match input.age {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => age as u32,
        other => return Err(ValidationError::InvalidAge(other)),
    };

    let title = match input.title.as_deref() {
        Some(title) if !is_blank(title) => title.to_string(),
        _ => return Err(ValidationError::EmptyTitle),
    };

    Ok(NewEmployee {
        name,
        salary,
        age,
        title,
    })
}

/// Search strings must contain something other than whitespace.
pub fn validate_search_request(name: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}
