//! Interactive prompt session.
//!
//! Reads process entries line by line until the user types `done`, and asks
//! whether to run another batch. Generic over the reader and writer so the
//! same flow drives a terminal or a scripted transcript.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use log::debug;

use super::line::{parse_command, parse_entry, Command};
use crate::models::Process;
use crate::validation::BurstPolicy;

const ENTRY_PROMPT: &str = "Enter Process ID, Arrival Time, Burst Time (comma separated): ";
const REPEAT_PROMPT: &str = "\nDo you want to calculate again? (yes/no): ";

/// Prompt-driven input collector.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: R,
    writer: W,
    policy: BurstPolicy,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            policy: BurstPolicy::default(),
        }
    }

    /// Sets the burst policy applied to entries.
    pub fn with_burst_policy(mut self, policy: BurstPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The output stream, for rendering results between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.writer
    }

    /// Collects one batch of processes.
    ///
    /// Returns `Ok(None)` when the user asks to exit or input ends.
    /// `done` on an empty batch is refused and prompting continues.
    pub fn collect_processes(&mut self) -> io::Result<Option<Vec<Process>>> {
        let mut processes = Vec::new();
        let mut ids = HashSet::new();
        writeln!(self.writer, "\nEnter process details (enter 'done' when finished):")?;

        loop {
            let Some(line) = self.prompt(ENTRY_PROMPT)? else {
                return Ok(None);
            };

            match parse_command(&line) {
                Command::Exit => return Ok(None),
                Command::Done if processes.is_empty() => {
                    writeln!(self.writer, "Error: Please enter at least one process!")?;
                }
                Command::Done => return Ok(Some(processes)),
                Command::Entry(entry) => match parse_entry(entry, &ids, self.policy) {
                    Ok(process) => {
                        writeln!(self.writer, "Process {} added successfully!", process.id)?;
                        ids.insert(process.id.clone());
                        processes.push(process);
                    }
                    Err(e) => {
                        debug!("rejected entry {entry:?}: {e}");
                        writeln!(self.writer, "Error: {e}")?;
                    }
                },
            }
        }
    }

    /// Asks whether to run another batch.
    ///
    /// Re-prompts until `yes` or `no`; end of input and `exit` mean no.
    pub fn ask_repeat(&mut self) -> io::Result<bool> {
        loop {
            let Some(line) = self.prompt(REPEAT_PROMPT)? else {
                return Ok(false);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" | "exit" | "quit" => return Ok(false),
                _ => writeln!(self.writer, "Invalid choice! Please enter 'yes' or 'no'")?,
            }
        }
    }

    /// Writes `prompt` and reads a line; `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than reported, so a garbled line
    /// is rejected like any other malformed entry.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
