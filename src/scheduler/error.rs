//! Scheduler errors.

use crate::validation::ValidationError;

/// Why a simulation produced no result.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// No processes were supplied.
    EmptyInput,
    /// One or more processes failed validation.
    InvalidProcess(Vec<ValidationError>),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("no processes to schedule"),
            Self::InvalidProcess(errors) => {
                f.write_str("invalid process input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_empty() {
        assert_eq!(ScheduleError::EmptyInput.to_string(), "no processes to schedule");
    }

    #[test]
    fn test_display_joins_errors() {
        let err = ScheduleError::InvalidProcess(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::ZeroBurst, "Process '2' has a burst time of 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process input: Duplicate process ID: 1; Process '2' has a burst time of 0"
        );
    }
}
