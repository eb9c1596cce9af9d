use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{info, warn};

use fcfs_schedule::config::{Config, OutputFormat};
use fcfs_schedule::input::{load_file, Session};
use fcfs_schedule::models::{Process, ScheduleResult};
use fcfs_schedule::report::{render_gantt, render_json, render_kpi, render_table};
use fcfs_schedule::scheduler::{FcfsScheduler, ScheduleKpi};
use fcfs_schedule::workload;

fn main() -> Result<()> {
    let config = Config::new();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    config.validate().map_err(anyhow::Error::msg)?;
    let scheduler = FcfsScheduler::new().with_burst_policy(config.burst_policy());

    if let Some(path) = &config.input {
        let processes = load_file(path, config.burst_policy())
            .with_context(|| format!("failed to load {}", path.display()))?;
        return run_batch(&scheduler, &processes, &config);
    }

    if let Some(spec) = config.workload() {
        let processes = workload::generate(&spec).context("invalid workload parameters")?;
        info!("generated {} processes with seed {}", processes.len(), spec.seed);
        return run_batch(&scheduler, &processes, &config);
    }

    run_interactive(&scheduler, &config)
}

/// Schedules one non-interactive batch and prints it to stdout.
fn run_batch(scheduler: &FcfsScheduler, processes: &[Process], config: &Config) -> Result<()> {
    let result = scheduler
        .simulate(processes)
        .context("scheduling failed")?;
    let mut out = io::stdout().lock();
    print_result(&mut out, &result, config)?;
    out.flush()?;
    Ok(())
}

/// Prompt loop: collect a batch, print results, offer to repeat.
fn run_interactive(scheduler: &FcfsScheduler, config: &Config) -> Result<()> {
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock())
        .with_burst_policy(scheduler.burst_policy());

    loop {
        let out = session.output();
        writeln!(out, "\n{}", "=".repeat(50))?;
        writeln!(out, "First Come First Serve (FCFS) Scheduling Algorithm")?;
        writeln!(out, "{}", "=".repeat(50))?;

        let Some(processes) = session.collect_processes()? else {
            writeln!(session.output(), "\n\nProgram terminated by user.")?;
            break;
        };

        match scheduler.simulate(&processes) {
            Ok(result) => {
                let out = session.output();
                writeln!(out, "\nResults:")?;
                print_result(out, &result, config)?;
            }
            Err(e) => {
                warn!("scheduling failed: {e}");
                writeln!(session.output(), "\nError: {e}")?;
            }
        }

        if !session.ask_repeat()? {
            writeln!(
                session.output(),
                "\nThank you for using the FCFS scheduler. Goodbye!"
            )?;
            break;
        }
    }

    Ok(())
}

fn print_result<W: Write>(out: &mut W, result: &ScheduleResult, config: &Config) -> Result<()> {
    let kpi = ScheduleKpi::calculate(result);

    match config.format {
        OutputFormat::Table => {
            write!(out, "{}", render_table(result))?;
            if config.gantt {
                writeln!(out, "\nGantt Chart:")?;
                write!(out, "{}", render_gantt(result))?;
                writeln!(out)?;
                write!(out, "{}", render_kpi(&kpi))?;
            }
        }
        OutputFormat::Json => {
            let json = render_json(result, &kpi).context("failed to encode result as JSON")?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(())
}
