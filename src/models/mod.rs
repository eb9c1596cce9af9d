//! Scheduling domain models.
//!
//! Provides the data types for an FCFS scheduling run: the submitted
//! processes and the immutable result of simulating them.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Process` | Input record: id, arrival time, burst time |
//! | `ScheduleResult` | Execution order plus aligned per-process metrics |
//! | `ScheduleEntry` | One row of a result |
//! | `TimelineSegment` | CPU run or idle interval (Gantt chart) |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{ScheduleEntry, ScheduleResult, TimelineSegment};
