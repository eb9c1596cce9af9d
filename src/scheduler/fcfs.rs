//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep input order).
//! 2. Start a cursor at t=0.
//! 3. For each process, advance the cursor to its arrival if the CPU would
//!    otherwise be idle, run the process for its full burst, and move the
//!    cursor to its completion.
//!
//! The cursor makes idle gaps explicit. Deriving a waiting time from the
//! previous process's waiting time plus burst minus the arrival delta gives
//! wrong results once the CPU has been idle, so it is not used.
//!
//! # Complexity
//! O(n log n), dominated by the sort.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use log::{debug, trace};

use super::ScheduleError;
use crate::models::{Process, ScheduleResult};
use crate::validation::{validate_processes, BurstPolicy};

/// Non-preemptive single-CPU FCFS scheduler.
///
/// # Example
///
/// ```
/// use fcfs_schedule::models::Process;
/// use fcfs_schedule::scheduler::FcfsScheduler;
///
/// let processes = vec![
///     Process::new("1", 0, 5),
///     Process::new("2", 1, 3),
///     Process::new("3", 2, 8),
/// ];
///
/// let result = FcfsScheduler::new().simulate(&processes).unwrap();
/// assert_eq!(result.waiting_time(), &[0, 4, 6]);
/// assert_eq!(result.completion_time(), &[5, 8, 16]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler {
    burst_policy: BurstPolicy,
}

impl FcfsScheduler {
    /// Creates a scheduler that accepts zero-length bursts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the burst policy.
    pub fn with_burst_policy(mut self, policy: BurstPolicy) -> Self {
        self.burst_policy = policy;
        self
    }

    /// The configured burst policy.
    pub fn burst_policy(&self) -> BurstPolicy {
        self.burst_policy
    }

    /// Simulates FCFS execution of `processes`.
    ///
    /// The input is not modified; the result holds a sorted copy.
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyInput`] if `processes` is empty.
    /// - [`ScheduleError::InvalidProcess`] if validation fails.
    pub fn simulate(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        validate_processes(processes, self.burst_policy).map_err(ScheduleError::InvalidProcess)?;

        let mut order = processes.to_vec();
        // `sort_by_key` is stable: equal arrivals keep input order.
        order.sort_by_key(|p| p.arrival_time);

        let mut start_time = Vec::with_capacity(order.len());
        let mut completion_time = Vec::with_capacity(order.len());
        let mut current_time: u64 = 0;

        for p in &order {
            if current_time < p.arrival_time {
                trace!("CPU idle {}..{}", current_time, p.arrival_time);
                current_time = p.arrival_time;
            }
            let start = current_time;
            // Validation bounds every completion by max(arrival) + sum(burst).
            current_time += p.burst_time;

            trace!("process {} runs {}..{}", p.id, start, current_time);
            start_time.push(start);
            completion_time.push(current_time);
        }

        let result = ScheduleResult::from_timeline(order, start_time, completion_time);
        debug!(
            "FCFS simulated {} processes: makespan={} avg_waiting={:.2} avg_turnaround={:.2}",
            result.len(),
            result.makespan(),
            result.avg_waiting_time(),
            result.avg_turnaround_time()
        );

        Ok(result)
    }
}

/// Simulates FCFS execution with the default burst policy.
///
/// Shorthand for `FcfsScheduler::new().simulate(processes)`.
pub fn simulate(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    FcfsScheduler::new().simulate(processes)
}
