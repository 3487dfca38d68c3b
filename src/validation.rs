//! Input validation for process lists.
//!
//! Checks the process list before any policy runs. Detects:
//! - Duplicate pids
//! - Non-positive bursts
//! - Negative arrival times
//! - Missing priorities when a policy ranks by priority
//! - Workloads whose schedule could end past `i64::MAX`
//!
//! All problems are collected and reported together; nothing is simulated
//! if any check fails. An empty list is valid and simulates to an empty
//! schedule.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessSpec;
use crate::policies::Policy;

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
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process requires no (or negative) CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Priority scheduling was requested for a process without a priority.
    MissingPriority,
    /// The latest arrival plus all bursts does not fit in an `i64`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list independently of any policy.
///
/// Checks:
/// 1. No duplicate pids
/// 2. Every burst is positive
/// 3. No arrival is negative
/// 4. The latest arrival plus the sum of all bursts fits in an `i64`
///    (no schedule can end later than that)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_input_errors(processes, &mut errors);
    into_result(errors)
}

/// Validates a process list for a set of policies.
///
/// Runs [`validate_input`] and additionally requires a priority on every
/// process when any of `policies` ranks by priority.
pub fn validate_for_policies(processes: &[ProcessSpec], policies: &[Policy]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_input_errors(processes, &mut errors);

    if let Some(policy) = policies.iter().find(|p| p.requires_priority()) {
        for p in processes.iter().filter(|p| p.priority.is_none()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process P{} has no priority, required by {}", p.pid, policy),
            ));
        }
    }

    into_result(errors)
}

fn collect_input_errors(processes: &[ProcessSpec], errors: &mut Vec<ValidationError>) {
    let mut pids = HashSet::new();
    let mut latest_arrival: i64 = 0;
    let mut total_burst: Option<i64> = Some(0);

    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: P{}", p.pid),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process P{} has non-positive burst {}", p.pid, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process P{} has negative arrival {}", p.pid, p.arrival),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival);
        if p.burst > 0 {
            total_burst = total_burst.and_then(|sum| sum.checked_add(p.burst));
        }
    }

    if total_burst
        .and_then(|sum| sum.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival {} plus total burst exceeds the time range",
                latest_arrival
            ),
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
