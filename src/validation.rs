//! Input validation for FCFS scheduling.
//!
//! Checks structural integrity of a process batch before simulation.
//! Detects:
//! - Duplicate IDs
//! - Empty IDs
//! - Zero burst times (when the burst policy requires positive bursts)
//! - Batches whose timeline would not fit in `u64`
//!
//! Negative times cannot reach this layer: `Process` stores unsigned ticks,
//! and text collaborators reject a leading `-` while parsing.

use std::collections::HashSet;

use crate::models::Process;

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a blank ID.
    EmptyId,
    /// A process needs no CPU time but the policy requires it.
    ZeroBurst,
    /// Completion times would exceed `u64::MAX`.
    TimeOverflow,
    /// A parameter outside the process batch is out of range.
    InvalidParameter,
}

/// Whether zero-length bursts are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BurstPolicy {
    /// Burst time may be zero.
    #[default]
    AllowZero,
    /// Burst time must be strictly positive.
    RequirePositive,
}

impl BurstPolicy {
    /// Whether `burst_time` is acceptable under this policy.
    pub fn accepts(self, burst_time: u64) -> bool {
        match self {
            Self::AllowZero => true,
            Self::RequirePositive => burst_time > 0,
        }
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process batch.
///
/// Checks:
/// 1. No empty process IDs
/// 2. No duplicate process IDs
/// 3. Every burst time is accepted by `policy`
/// 4. The latest possible completion time fits in `u64`
///
/// An empty batch passes; emptiness is reported by the scheduler.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], policy: BurstPolicy) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID must not be empty",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if !policy.accepts(p.burst_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a burst time of 0", p.id),
            ));
        }
    }

    if let Some(overflow_err) = check_horizon(processes) {
        errors.push(overflow_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Bounds the makespan by `max(arrival) + sum(burst)`.
///
/// The FCFS cursor never passes this bound, so if it fits in `u64`
/// every start and completion time does too.
fn check_horizon(processes: &[Process]) -> Option<ValidationError> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);

    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time));

    match horizon {
        Some(_) => None,
        None => Some(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large to simulate",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("1", 0, 5),
            Process::new("2", 1, 3),
            Process::new("3", 2, 8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes(), BurstPolicy::AllowZero).is_ok());
        assert!(validate_processes(&sample_processes(), BurstPolicy::RequirePositive).is_ok());
    }

    #[test]
    fn test_empty_batch_passes() {
        assert!(validate_processes(&[], BurstPolicy::RequirePositive).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("1", 0, 5), Process::new("1", 2, 3)];
        let errors = validate_processes(&processes, BurstPolicy::AllowZero).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("1"));
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![Process::new("  ", 0, 5)];
        let errors = validate_processes(&processes, BurstPolicy::AllowZero).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_zero_burst_policy() {
        let processes = vec![Process::new("1", 0, 0)];
        assert!(validate_processes(&processes, BurstPolicy::AllowZero).is_ok());

        let errors = validate_processes(&processes, BurstPolicy::RequirePositive).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_time_overflow() {
        let processes = vec![
            Process::new("1", u64::MAX - 1, 1),
            Process::new("2", 0, 1),
        ];
        let errors = validate_processes(&processes, BurstPolicy::AllowZero).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_horizon_at_limit() {
        let processes = vec![Process::new("1", u64::MAX - 1, 1)];
        assert!(validate_processes(&processes, BurstPolicy::AllowZero).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero burst
        let processes = vec![Process::new("1", 0, 0), Process::new("1", 1, 2)];
        let errors = validate_processes(&processes, BurstPolicy::RequirePositive).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_burst_policy_default() {
        assert_eq!(BurstPolicy::default(), BurstPolicy::AllowZero);
        assert!(BurstPolicy::AllowZero.accepts(0));
        assert!(!BurstPolicy::RequirePositive.accepts(0));
        assert!(BurstPolicy::RequirePositive.accepts(1));
    }
}
