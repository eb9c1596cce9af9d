//! Schedule quality metrics (KPIs).
//!
//! Computes CPU-level performance indicators from a completed FCFS run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy Time | Sum of burst times |
//! | Idle Time | Makespan minus busy time (includes the gap before the first arrival) |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes completed per tick of makespan |
//! | Max Waiting | Largest single waiting time |
//! | Max Turnaround | Largest single turnaround time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::Serialize;

use crate::models::ScheduleResult;

/// FCFS run performance indicators.
///
/// All time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: u64,
    /// Earliest arrival time.
    pub first_arrival: u64,
    /// Total CPU time spent executing processes.
    pub busy_time: u64,
    /// Total CPU time with nothing to run, from t=0 to the makespan.
    pub idle_time: u64,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: u64,
    /// Largest turnaround time of any process.
    pub max_turnaround_time: u64,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let first_arrival = result
            .processes()
            .first()
            .map(|p| p.arrival_time)
            .unwrap_or(0);
        let busy_time: u64 = result.processes().iter().map(|p| p.burst_time).sum();
        // Busy intervals never overlap on a single CPU.
        let idle_time = makespan - busy_time;

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                result.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            first_arrival,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            max_waiting_time: result.waiting_time().iter().copied().max().unwrap_or(0),
            max_turnaround_time: result.turnaround_time().iter().copied().max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::simulate;

    fn run(items: &[(u64, u64, u64)]) -> ScheduleKpi {
        let processes: Vec<Process> = items.iter().copied().map(Process::from).collect();
        ScheduleKpi::calculate(&simulate(&processes).unwrap())
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = run(&[(1, 0, 5), (2, 1, 3), (3, 2, 8)]);
        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.busy_time, 16);
        assert_eq!(kpi.idle_time, 0);
        assert_eq!(kpi.max_waiting_time, 6);
        assert_eq!(kpi.max_turnaround_time, 14);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_gap() {
        let kpi = run(&[(1, 0, 2), (2, 5, 3)]);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 3);
        assert!((kpi.cpu_utilization - 5.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_leading_idle() {
        let kpi = run(&[(1, 3, 5)]);
        assert_eq!(kpi.first_arrival, 3);
        assert_eq!(kpi.idle_time, 3);
        assert_eq!(kpi.makespan, 8);
    }

    #[test]
    fn test_kpi_zero_makespan() {
        let kpi = run(&[(1, 0, 0)]);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}
