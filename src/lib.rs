//! First-Come-First-Served CPU scheduling calculator.
//!
//! Simulates a batch of processes on a single non-preemptive CPU in arrival
//! order and reports waiting, turnaround and completion times with their
//! averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ScheduleResult`, `TimelineSegment`
//! - **`validation`**: Batch integrity checks (duplicate IDs, burst policy, overflow)
//! - **`scheduler`**: The FCFS simulation and schedule KPIs
//! - **`input`**: Entry parsing, interactive sessions, batch files
//! - **`workload`**: Seeded random batches
//! - **`report`**: Table, Gantt chart and JSON rendering
//! - **`config`**: Command-line configuration
//!
//! # Example
//!
//! ```
//! use fcfs_schedule::models::Process;
//! use fcfs_schedule::scheduler::simulate;
//!
//! let processes = vec![Process::new("1", 0, 2), Process::new("2", 5, 3)];
//! let result = simulate(&processes).unwrap();
//!
//! // P2 arrives after the CPU has gone idle, so it never waits.
//! assert_eq!(result.waiting_time(), &[0, 0]);
//! assert_eq!(result.completion_time(), &[2, 8]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
