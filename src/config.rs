//! Command-line configuration.
//!
//! Every flag can also be set through an environment variable.
//!
//! ```bash
//! fcfs-schedule --input batch.txt --gantt
//! fcfs-schedule --random 8 --seed 7 --format json
//! FCFS_REQUIRE_POSITIVE_BURST=true fcfs-schedule
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::validation::BurstPolicy;
use crate::workload::WorkloadSpec;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table with averages.
    #[default]
    Table,
    /// Pretty-printed JSON with timeline and KPIs.
    Json,
}

/// FCFS scheduling calculator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "fcfs-schedule")]
#[command(about = "First-Come-First-Served CPU scheduling calculator")]
#[command(version)]
pub struct Config {
    /// Batch file to schedule (`.json` array or `pid, arrival, burst` lines)
    #[arg(short, long, env = "FCFS_INPUT", conflicts_with = "random")]
    pub input: Option<PathBuf>,

    /// Schedule N randomly generated processes instead of prompting
    #[arg(long, value_name = "N", env = "FCFS_RANDOM")]
    pub random: Option<usize>,

    /// Seed for random workloads
    #[arg(long, default_value = "42", env = "FCFS_SEED")]
    pub seed: u64,

    /// Latest arrival time for random workloads
    #[arg(long = "max-arrival", default_value = "20", env = "FCFS_MAX_ARRIVAL")]
    pub max_arrival: u64,

    /// Longest burst time for random workloads
    #[arg(long = "max-burst", default_value = "10", env = "FCFS_MAX_BURST")]
    pub max_burst: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "FCFS_FORMAT")]
    pub format: OutputFormat,

    /// Print a Gantt chart and KPI summary after the table
    #[arg(long, env = "FCFS_GANTT")]
    pub gantt: bool,

    /// Reject processes with a burst time of 0
    #[arg(long = "require-positive-burst", env = "FCFS_REQUIRE_POSITIVE_BURST")]
    pub require_positive_burst: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses CLI arguments and environment.
    pub fn new() -> Self {
        Config::parse()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.random == Some(0) {
            return Err("--random must be >= 1".to_string());
        }
        if self.max_burst == 0 {
            return Err("--max-burst must be >= 1".to_string());
        }
        Ok(())
    }

    /// Burst policy selected by flags.
    pub fn burst_policy(&self) -> BurstPolicy {
        if self.require_positive_burst {
            BurstPolicy::RequirePositive
        } else {
            BurstPolicy::AllowZero
        }
    }

    /// Workload parameters when `--random` is set.
    pub fn workload(&self) -> Option<WorkloadSpec> {
        self.random.map(|count| {
            WorkloadSpec::new(count)
                .with_max_arrival(self.max_arrival)
                .with_burst_range(1, self.max_burst)
                .with_seed(self.seed)
        })
    }

    /// Log level from the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            random: None,
            seed: 42,
            max_arrival: 20,
            max_burst: 10,
            format: OutputFormat::Table,
            gantt: false,
            require_positive_burst: false,
            verbose: 0,
        }
    }
}
