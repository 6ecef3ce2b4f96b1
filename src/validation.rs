//! Input validation for conflict checks.
//!
//! The conflict checks never fail: a malformed exam simply never
//! overlaps. Callers that want to reject bad input before saving run
//! these checks first. Detects:
//! - Duplicate exam ids and teacher names
//! - Unparsable exam dates and start times
//! - Non-positive or non-finite durations
//! - Empty identifiers on a slot assignment

use crate::error::ExamTimeError;
use crate::models::{Exam, SlotAssignment, Teacher};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same id or name.
    DuplicateId,
    /// Date is not `YYYY-MM-DD`.
    InvalidDate,
    /// Start time is not `HH:MM[:SS]`.
    InvalidTime,
    /// Duration is zero, negative, or not a number.
    InvalidDuration,
    /// A required field is empty.
    MissingField,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_exam(exam: &Exam, errors: &mut Vec<ValidationError>) {
    let label: &str = if exam.id.is_empty() { "<new>" } else { &exam.id };

    if let Err(ExamTimeError::InvalidDate(raw)) = exam.parsed_date() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDate,
            format!("Exam '{label}' has invalid date '{raw}'"),
        ));
    }
    if let Err(ExamTimeError::InvalidStartTime(raw)) = exam.parsed_start_time() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTime,
            format!("Exam '{label}' has invalid start time '{raw}'"),
        ));
    }
    if !(exam.duration.is_finite() && exam.duration > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            format!(
                "Exam '{label}' has non-positive duration {} hours",
                exam.duration
            ),
        ));
    }

    for (field, value) in [
        ("room", &exam.room),
        ("invigilator", &exam.invigilator),
        ("class", &exam.class),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Exam '{label}' has no {field}"),
            ));
        }
    }
}

/// Validates a single exam (e.g., a form submission).
pub fn validate_exam(exam: &Exam) -> ValidationResult {
    let mut errors = Vec::new();
    check_exam(exam, &mut errors);
    into_result(errors)
}

/// Validates a collection of exams.
///
/// Checks every exam as [`validate_exam`] does, plus:
/// - No two exams share a non-empty id
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_exams(exams: &[Exam]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for exam in exams {
        if !exam.id.is_empty() && !ids.insert(exam.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate exam ID: {}", exam.id),
            ));
        }
        check_exam(exam, &mut errors);
    }

    into_result(errors)
}

/// Validates teacher reference data.
///
/// Qualification lookups match the first teacher with a given name, so
/// duplicate names would hide later records.
pub fn validate_teachers(teachers: &[Teacher]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for t in teachers {
        if t.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                "Teacher record has no name",
            ));
        } else if !names.insert(t.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher name: {}", t.name),
            ));
        }
    }

    into_result(errors)
}

/// Validates that a slot assignment has every field filled in.
pub fn validate_assignment(assignment: &SlotAssignment) -> ValidationResult {
    let errors = [
        ("day", &assignment.day),
        ("time", &assignment.time),
        ("class", &assignment.class),
        ("teacher", &assignment.teacher),
        ("room", &assignment.room),
        ("subject", &assignment.subject),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| {
        ValidationError::new(
            ValidationErrorKind::MissingField,
            format!("Assignment is missing {field}"),
        )
    })
    .collect();

    into_result(errors)
}
