//! Process batch input.
//!
//! Turns user-facing text into validated `Process` batches:
//!
//! - **`line`**: `pid, arrival, burst` entry parsing and command words
//!   (`done`, `exit`)
//! - **`session`**: interactive prompt loop over any `BufRead`/`Write` pair
//! - **`file`**: JSON and line-oriented batch files

mod file;
mod line;
mod session;

pub use file::{load_file, parse_json, parse_lines, LoadError};
pub use line::{parse_command, parse_entry, Command, InputError};
pub use session::Session;
