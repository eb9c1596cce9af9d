//! Result rendering.
//!
//! Presentation of a `ScheduleResult`: a per-process text table with
//! averages, a one-line Gantt chart, a KPI summary, and JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::models::{ScheduleResult, TimelineSegment};
use crate::scheduler::ScheduleKpi;

/// Renders the per-process table followed by the averages.
///
/// Rows follow execution order.
pub fn render_table(result: &ScheduleResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12}{:>14}{:>12}{:>17}{:>14}{:>17}",
        "Process ID", "Arrival Time", "Burst Time", "Completion Time", "Waiting Time", "Turnaround Time"
    );
    for e in result.entries() {
        let _ = writeln!(
            out,
            "{:<12}{:>14}{:>12}{:>17}{:>14}{:>17}",
            e.process.id,
            e.process.arrival_time,
            e.process.burst_time,
            e.completion_time,
            e.waiting_time,
            e.turnaround_time
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Average Waiting Time: {:.2}", result.avg_waiting_time());
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", result.avg_turnaround_time());
    out
}

/// Renders the CPU timeline as a bar line and a time axis.
///
/// ```text
/// | P1 | idle | P2 |
/// 0    2      5    8
/// ```
pub fn render_gantt(result: &ScheduleResult) -> String {
    let mut bar = String::from("|");
    let mut axis = String::from("0");

    for segment in result.timeline() {
        let label = match &segment {
            // Numeric IDs read as P1, P2; named IDs are shown as given.
            TimelineSegment::Run { process_id, .. }
                if process_id.bytes().all(|b| b.is_ascii_digit()) =>
            {
                format!("P{process_id}")
            }
            TimelineSegment::Run { process_id, .. } => process_id.clone(),
            TimelineSegment::Idle { .. } => "idle".to_string(),
        };
        let width = label.len() + 2;
        let _ = write!(bar, "{label:^width$}|");

        // End time sits under the closing bar.
        let column = bar.len() - 1;
        if axis.len() < column {
            axis.push_str(&" ".repeat(column - axis.len()));
        } else {
            axis.push(' ');
        }
        let _ = write!(axis, "{}", segment.end());
    }

    format!("{bar}\n{axis}\n")
}

/// Renders the KPI summary.
pub fn render_kpi(kpi: &ScheduleKpi) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Makespan: {}", kpi.makespan);
    let _ = writeln!(out, "CPU Busy Time: {}", kpi.busy_time);
    let _ = writeln!(out, "CPU Idle Time: {}", kpi.idle_time);
    let _ = writeln!(out, "CPU Utilization: {:.2}%", kpi.cpu_utilization * 100.0);
    let _ = writeln!(out, "Throughput: {:.4} processes/tick", kpi.throughput);
    let _ = writeln!(out, "Max Waiting Time: {}", kpi.max_waiting_time);
    let _ = writeln!(out, "Max Turnaround Time: {}", kpi.max_turnaround_time);
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    result: &'a ScheduleResult,
    timeline: Vec<TimelineSegment>,
    kpi: &'a ScheduleKpi,
}

/// Renders the result, its timeline and KPIs as pretty-printed JSON.
pub fn render_json(result: &ScheduleResult, kpi: &ScheduleKpi) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        result,
        timeline: result.timeline(),
        kpi,
    })
}
