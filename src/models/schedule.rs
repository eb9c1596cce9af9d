//! Schedule result model.
//!
//! A `ScheduleResult` is the outcome of one FCFS simulation: the processes in
//! execution order, per-process timing metrics aligned by index, and the
//! averages over the batch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::Serialize;

use super::Process;

/// Outcome of an FCFS simulation.
///
/// All per-process sequences are aligned to `processes`, which holds the
/// input in execution order (arrival time ascending, ties in input order).
/// Built only by the scheduler; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    processes: Vec<Process>,
    start_time: Vec<u64>,
    waiting_time: Vec<u64>,
    turnaround_time: Vec<u64>,
    completion_time: Vec<u64>,
    avg_waiting_time: f64,
    avg_turnaround_time: f64,
}

/// One executed process together with its metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry<'a> {
    /// The executed process.
    pub process: &'a Process,
    /// Instant the process got the CPU.
    pub start_time: u64,
    /// Instant the process finished.
    pub completion_time: u64,
    /// Time spent ready but not running.
    pub waiting_time: u64,
    /// Time from arrival to completion.
    pub turnaround_time: u64,
}

/// A contiguous slice of the CPU timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineSegment {
    /// The CPU executes `process_id` during `[start, end)`.
    Run {
        process_id: String,
        start: u64,
        end: u64,
    },
    /// No process is ready during `[start, end)`.
    Idle { start: u64, end: u64 },
}

impl TimelineSegment {
    /// Segment start.
    pub fn start(&self) -> u64 {
        match self {
            Self::Run { start, .. } | Self::Idle { start, .. } => *start,
        }
    }

    /// Segment end.
    pub fn end(&self) -> u64 {
        match self {
            Self::Run { end, .. } | Self::Idle { end, .. } => *end,
        }
    }

    /// Segment length.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end() - self.start()
    }

    /// Whether this is an idle gap.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}

impl ScheduleResult {
    /// Assembles a result from per-process start and completion times.
    ///
    /// Waiting and turnaround times are derived here so that
    /// `turnaround = completion - arrival = waiting + burst` holds by
    /// construction. Callers guarantee `processes` is non-empty and
    /// `start_time[i] >= arrival_time[i]`.
    pub(crate) fn from_timeline(
        processes: Vec<Process>,
        start_time: Vec<u64>,
        completion_time: Vec<u64>,
    ) -> Self {
        debug_assert!(!processes.is_empty());
        debug_assert_eq!(processes.len(), start_time.len());
        debug_assert_eq!(processes.len(), completion_time.len());

        let waiting_time: Vec<u64> = processes
            .iter()
            .zip(&start_time)
            .map(|(p, &start)| start - p.arrival_time)
            .collect();
        let turnaround_time: Vec<u64> = processes
            .iter()
            .zip(&completion_time)
            .map(|(p, &end)| end - p.arrival_time)
            .collect();

        let n = processes.len() as f64;
        let avg_waiting_time = waiting_time.iter().map(|&w| w as f64).sum::<f64>() / n;
        let avg_turnaround_time = turnaround_time.iter().map(|&t| t as f64).sum::<f64>() / n;

        Self {
            processes,
            start_time,
            waiting_time,
            turnaround_time,
            completion_time,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    /// Processes in execution order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Start times, aligned to [`processes`](Self::processes).
    pub fn start_time(&self) -> &[u64] {
        &self.start_time
    }

    /// Waiting times, aligned to [`processes`](Self::processes).
    pub fn waiting_time(&self) -> &[u64] {
        &self.waiting_time
    }

    /// Turnaround times, aligned to [`processes`](Self::processes).
    pub fn turnaround_time(&self) -> &[u64] {
        &self.turnaround_time
    }

    /// Completion times, aligned to [`processes`](Self::processes).
    pub fn completion_time(&self) -> &[u64] {
        &self.completion_time
    }

    /// Mean waiting time.
    pub fn avg_waiting_time(&self) -> f64 {
        self.avg_waiting_time
    }

    /// Mean turnaround time.
    pub fn avg_turnaround_time(&self) -> f64 {
        self.avg_turnaround_time
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always false for a result produced by the scheduler.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates executed processes with their metrics, in execution order.
    pub fn entries(&self) -> impl Iterator<Item = ScheduleEntry<'_>> + '_ {
        (0..self.processes.len()).map(move |i| ScheduleEntry {
            process: &self.processes[i],
            start_time: self.start_time[i],
            completion_time: self.completion_time[i],
            waiting_time: self.waiting_time[i],
            turnaround_time: self.turnaround_time[i],
        })
    }

    /// Metrics for a process by ID.
    pub fn entry_for(&self, process_id: &str) -> Option<ScheduleEntry<'_>> {
        self.entries().find(|e| e.process.id == process_id)
    }

    /// Completion time of the last process.
    pub fn makespan(&self) -> u64 {
        self.completion_time.last().copied().unwrap_or(0)
    }

    /// CPU timeline from t=0 to the makespan, including idle gaps.
    pub fn timeline(&self) -> Vec<TimelineSegment> {
        let mut segments = Vec::with_capacity(self.processes.len() * 2);
        let mut cursor = 0;

        for entry in self.entries() {
            if entry.start_time > cursor {
                segments.push(TimelineSegment::Idle {
                    start: cursor,
                    end: entry.start_time,
                });
            }
            segments.push(TimelineSegment::Run {
                process_id: entry.process.id.clone(),
                start: entry.start_time,
                end: entry.completion_time,
            });
            cursor = entry.completion_time;
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        // P1 runs 0..2, CPU idle 2..5, P2 runs 5..8
        ScheduleResult::from_timeline(
            vec![Process::new("1", 0, 2), Process::new("2", 5, 3)],
            vec![0, 5],
            vec![2, 8],
        )
    }

    #[test]
    fn test_derived_metrics() {
        let r = sample_result();
        assert_eq!(r.waiting_time(), &[0, 0]);
        assert_eq!(r.turnaround_time(), &[2, 3]);
        assert!((r.avg_waiting_time() - 0.0).abs() < 1e-10);
        assert!((r.avg_turnaround_time() - 2.5).abs() < 1e-10);
        assert_eq!(r.makespan(), 8);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_entries_aligned() {
        let r = sample_result();
        let entries: Vec<_> = r.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].process.id, "2");
        assert_eq!(entries[1].start_time, 5);
        assert_eq!(entries[1].completion_time, 8);
    }

    #[test]
    fn test_entry_for() {
        let r = sample_result();
        assert_eq!(r.entry_for("1").unwrap().completion_time, 2);
        assert!(r.entry_for("99").is_none());
    }

    #[test]
    fn test_timeline_with_idle_gap() {
        let r = sample_result();
        assert_eq!(
            r.timeline(),
            vec![
                TimelineSegment::Run {
                    process_id: "1".into(),
                    start: 0,
                    end: 2
                },
                TimelineSegment::Idle { start: 2, end: 5 },
                TimelineSegment::Run {
                    process_id: "2".into(),
                    start: 5,
                    end: 8
                },
            ]
        );
    }

    #[test]
    fn test_timeline_leading_idle() {
        let r = ScheduleResult::from_timeline(vec![Process::new("1", 3, 5)], vec![3], vec![8]);
        let timeline = r.timeline();
        assert_eq!(timeline.len(), 2);
        assert!(timeline[0].is_idle());
        assert_eq!(timeline[0].duration(), 3);
        assert_eq!(timeline[1].start(), 3);
        assert_eq!(timeline[1].end(), 8);
    }

    #[test]
    fn test_timeline_zero_burst_kept() {
        let r = ScheduleResult::from_timeline(
            vec![Process::new("1", 0, 0), Process::new("2", 0, 4)],
            vec![0, 0],
            vec![0, 4],
        );
        let timeline = r.timeline();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].duration(), 0);
        assert!(!timeline[0].is_idle());
    }

    #[test]
    fn test_segment_serde_tag() {
        let seg = TimelineSegment::Idle { start: 2, end: 5 };
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, r#"{"kind":"idle","start":2,"end":5}"#);
    }
}
