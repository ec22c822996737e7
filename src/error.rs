//! Simulation errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engine and the [`Simulator`](crate::scheduler::Simulator).
///
/// Every error is raised before the input is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Round Robin was given a quantum that is not strictly positive.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// More processes were supplied than the configured limit allows.
    #[error("{count} processes exceed the limit of {limit}")]
    ProcessLimitExceeded { count: usize, limit: usize },

    /// Strict validation rejected the input.
    #[error("invalid process list ({} issue(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for simulation results.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SimulationError::InvalidQuantum(0).to_string(),
            "time quantum must be positive, got 0"
        );
        assert_eq!(
            SimulationError::ProcessLimitExceeded { count: 51, limit: 50 }.to_string(),
            "51 processes exceed the limit of 50"
        );
    }

    #[test]
    fn test_validation_message_lists_issues() {
        let err = SimulationError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "Process 2 has burst 0"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 issue(s)"));
        assert!(msg.contains("Duplicate process ID: 1; Process 2 has burst 0"));
    }
}
