//! Process model.
//!
//! A process is a unit of CPU work submitted to the scheduler. It becomes
//! ready at its arrival time and needs its full burst time on the CPU.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// Times are unsigned ticks relative to the simulation epoch (t=0).
/// Unsigned fields make negative arrival or burst times unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes ready.
    pub arrival_time: u64,
    /// CPU time required.
    pub burst_time: u64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

impl From<(u64, u64, u64)> for Process {
    /// Builds a process from an `(id, arrival, burst)` tuple.
    fn from((id, arrival_time, burst_time): (u64, u64, u64)) -> Self {
        Self::new(id.to_string(), arrival_time, burst_time)
    }
}
