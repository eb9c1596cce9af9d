//! Line-level parsing of process entries.
//!
//! An entry is `pid, arrival, burst`: three comma separated decimal
//! integers. The process ID must be positive and unique within the batch;
//! times must be non-negative. IDs are normalized to their decimal form,
//! so `007` and `7` name the same process.

use std::collections::HashSet;

use crate::models::Process;
use crate::validation::BurstPolicy;

/// A parsed line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Finish the current batch.
    Done,
    /// Leave the program.
    Exit,
    /// A candidate process entry.
    Entry(&'a str),
}

/// Classifies a trimmed input line.
pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("done") {
        Command::Done
    } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        Command::Exit
    } else {
        Command::Entry(line)
    }
}

/// Why an entry line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line does not hold exactly three values.
    FieldCount,
    /// The process ID is not a decimal integer.
    InvalidId,
    /// The process ID is zero.
    ZeroId,
    /// The process ID is already in the batch.
    DuplicateId,
    /// A time field is not a non-negative decimal integer.
    InvalidTime(&'static str),
    /// A numeric field does not fit in 64 bits.
    TooLarge(&'static str),
    /// Burst time is zero but the policy requires a positive burst.
    ZeroBurst,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount => f.write_str("Please enter exactly 3 values separated by commas!"),
            Self::InvalidId => f.write_str("Process ID must be a positive integer"),
            Self::ZeroId => f.write_str("Process ID must be greater than 0"),
            Self::DuplicateId => f.write_str("Process ID must be unique"),
            Self::InvalidTime(name) => write!(f, "{name} must be a non-negative integer"),
            Self::TooLarge(name) => write!(f, "{name} is too large"),
            Self::ZeroBurst => f.write_str("Burst Time must be greater than 0"),
        }
    }
}

impl std::error::Error for InputError {}

const PROCESS_ID: &str = "Process ID";
const ARRIVAL_TIME: &str = "Arrival Time";
const BURST_TIME: &str = "Burst Time";

/// Parses one `pid, arrival, burst` entry.
///
/// `existing_ids` holds the normalized IDs already in the batch; the caller
/// inserts the new ID after a successful parse.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use fcfs_schedule::input::parse_entry;
/// use fcfs_schedule::validation::BurstPolicy;
///
/// let p = parse_entry(" 3, 0 ,5", &HashSet::new(), BurstPolicy::AllowZero).unwrap();
/// assert_eq!((p.id.as_str(), p.arrival_time, p.burst_time), ("3", 0, 5));
/// ```
pub fn parse_entry(
    line: &str,
    existing_ids: &HashSet<String>,
    policy: BurstPolicy,
) -> Result<Process, InputError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [pid, arrival, burst] = parts.as_slice() else {
        return Err(InputError::FieldCount);
    };

    let id = parse_digits(pid, PROCESS_ID).map_err(|e| match e {
        InputError::InvalidTime(_) => InputError::InvalidId,
        other => other,
    })?;
    if id == 0 {
        return Err(InputError::ZeroId);
    }
    let id = id.to_string();
    if existing_ids.contains(&id) {
        return Err(InputError::DuplicateId);
    }

    let arrival_time = parse_digits(arrival, ARRIVAL_TIME)?;
    let burst_time = parse_digits(burst, BURST_TIME)?;
    if !policy.accepts(burst_time) {
        return Err(InputError::ZeroBurst);
    }

    Ok(Process::new(id, arrival_time, burst_time))
}

/// Accepts ASCII digits only, so signs and blanks are rejected.
fn parse_digits(value: &str, name: &'static str) -> Result<u64, InputError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidTime(name));
    }
    value.parse().map_err(|_| InputError::TooLarge(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Process, InputError> {
        parse_entry(line, &HashSet::new(), BurstPolicy::AllowZero)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("done"), Command::Done);
        assert_eq!(parse_command("  DONE "), Command::Done);
        assert_eq!(parse_command("exit"), Command::Exit);
        assert_eq!(parse_command("Quit"), Command::Exit);
        assert_eq!(parse_command(" 1,0,5 "), Command::Entry("1,0,5"));
    }

    #[test]
    fn test_parse_valid_entry() {
        let p = parse("1, 0, 5").unwrap();
        assert_eq!(p, Process::new("1", 0, 5));
    }

    #[test]
    fn test_parse_normalizes_id() {
        let p = parse("007,2,3").unwrap();
        assert_eq!(p.id, "7");
    }

    #[test]
    fn test_parse_field_count() {
        assert_eq!(parse("1,2"), Err(InputError::FieldCount));
        assert_eq!(parse("1,2,3,4"), Err(InputError::FieldCount));
        assert_eq!(parse(""), Err(InputError::FieldCount));
    }

    #[test]
    fn test_parse_invalid_id() {
        assert_eq!(parse("a,0,5"), Err(InputError::InvalidId));
        assert_eq!(parse("-1,0,5"), Err(InputError::InvalidId));
        assert_eq!(parse(",0,5"), Err(InputError::InvalidId));
        assert_eq!(parse("0,0,5"), Err(InputError::ZeroId));
    }

    #[test]
    fn test_parse_duplicate_id() {
        let existing: HashSet<String> = ["7".to_string()].into_iter().collect();
        assert_eq!(
            parse_entry("07,0,5", &existing, BurstPolicy::AllowZero),
            Err(InputError::DuplicateId)
        );
    }

    #[test]
    fn test_parse_invalid_times() {
        assert_eq!(parse("1,-2,5"), Err(InputError::InvalidTime("Arrival Time")));
        assert_eq!(parse("1,2,x"), Err(InputError::InvalidTime("Burst Time")));
        assert_eq!(parse("1,1.5,2"), Err(InputError::InvalidTime("Arrival Time")));
    }

    #[test]
    fn test_parse_too_large() {
        assert_eq!(
            parse("1,99999999999999999999999,2"),
            Err(InputError::TooLarge("Arrival Time"))
        );
    }

    #[test]
    fn test_parse_zero_burst_policy() {
        assert!(parse("1,0,0").is_ok());
        assert_eq!(
            parse_entry("1,0,0", &HashSet::new(), BurstPolicy::RequirePositive),
            Err(InputError::ZeroBurst)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::InvalidTime("Arrival Time").to_string(),
            "Arrival Time must be a non-negative integer"
        );
        assert_eq!(
            InputError::FieldCount.to_string(),
            "Please enter exactly 3 values separated by commas!"
        );
        assert_eq!(InputError::DuplicateId.to_string(), "Process ID must be unique");
    }
}
