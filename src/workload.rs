//! Synthetic process batches.
//!
//! Generates reproducible random workloads for demos and stress runs.
//! Arrivals and bursts are drawn uniformly from the configured ranges
//! with a seeded `StdRng`, so the same spec always yields the same batch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parameters for a random workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time (inclusive).
    pub max_arrival: u64,
    /// Shortest burst (inclusive).
    pub min_burst: u64,
    /// Longest burst (inclusive).
    pub max_burst: u64,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            seed: 42,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: u64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: u64, max_burst: u64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates a process batch. IDs are `"1"..="count"` in input order.
pub fn generate(spec: &WorkloadSpec) -> Result<Vec<Process>, ValidationError> {
    if spec.count == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "Workload must contain at least one process",
        ));
    }
    if spec.min_burst > spec.max_burst {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            format!(
                "Minimum burst {} exceeds maximum burst {}",
                spec.min_burst, spec.max_burst
            ),
        ));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let processes = (1..=spec.count)
        .map(|id| {
            Process::new(
                id.to_string(),
                rng.random_range(0..=spec.max_arrival),
                rng.random_range(spec.min_burst..=spec.max_burst),
            )
        })
        .collect();

    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::simulate;

    #[test]
    fn test_generate_within_ranges() {
        let spec = WorkloadSpec::new(50)
            .with_max_arrival(15)
            .with_burst_range(2, 6)
            .with_seed(1);
        let processes = generate(&spec).unwrap();

        assert_eq!(processes.len(), 50);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, (i + 1).to_string());
            assert!(p.arrival_time <= 15);
            assert!((2..=6).contains(&p.burst_time));
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let spec = WorkloadSpec::new(20).with_seed(99);
        assert_eq!(generate(&spec).unwrap(), generate(&spec).unwrap());
    }

    #[test]
    fn test_generate_seed_changes_batch() {
        let a = generate(&WorkloadSpec::new(20).with_seed(1)).unwrap();
        let b = generate(&WorkloadSpec::new(20).with_seed(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_rejects_empty() {
        let err = generate(&WorkloadSpec::new(0)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidParameter);
    }

    #[test]
    fn test_generate_rejects_inverted_burst_range() {
        let err = generate(&WorkloadSpec::new(3).with_burst_range(5, 2)).unwrap_err();
        assert!(err.message.contains("exceeds"));
    }

    #[test]
    fn test_generated_batch_simulates() {
        let processes = generate(&WorkloadSpec::new(30).with_seed(5)).unwrap();
        let result = simulate(&processes).unwrap();
        assert_eq!(result.len(), 30);
    }
}
