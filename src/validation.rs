//! Input validation for rostering problems.
//!
//! Checks structural integrity of the employee pool before search begins.
//! Detects:
//! - Duplicate employee names
//! - Incomplete preference maps (a day with no stated preference)
//! - An empty employee pool
//!
//! Unknown day or shift names cannot survive parsing — the `Day`/`Shift`
//! enums reject them at the serde boundary — so they need no check here.
//! Feasibility is *not* checked here; an unsatisfiable but well-formed input
//! is a normal search outcome, not a validation error.

use std::collections::HashSet;

use crate::models::{Day, Employee};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same name.
    DuplicateName,
    /// An employee states no preference for some day.
    IncompletePreferences,
    /// The employee pool is empty.
    NoEmployees,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the employee pool for a rostering problem.
///
/// Checks:
/// 1. At least one employee
/// 2. No duplicate employee names
/// 3. Every employee states a preference for all seven days
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_employees(employees: &[Employee]) -> ValidationResult {
    let mut errors = Vec::new();

    if employees.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoEmployees,
            "No employees provided",
        ));
    }

    let mut names = HashSet::new();
    for emp in employees {
        if !names.insert(emp.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", emp.name),
            ));
        }

        for day in Day::ALL {
            if emp.preference_for(day).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompletePreferences,
                    format!("Employee '{}' has no preference for {day}", emp.name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
