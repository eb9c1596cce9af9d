//! FCFS scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` runs processes in arrival order on a single CPU without
//! preemption, advancing a time cursor across idle gaps.
//!
//! # KPI
//!
//! `ScheduleKpi` computes CPU-level metrics: makespan, idle time,
//! utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod error;
mod fcfs;
mod kpi;

pub use error::ScheduleError;
pub use fcfs::{simulate, FcfsScheduler};
pub use kpi::ScheduleKpi;
