use log::{error, info};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cpu_sched_sim::config::{Config, OutputFormat};
use cpu_sched_sim::parser::read_workload;
use cpu_sched_sim::simulator::to_json;
use cpu_sched_sim::{Error, Process, Schedule, Scheduler};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    // Read the config file from the working directory, the first argument
    // overrides the workload path
    let mut config = match env::current_dir() {
        Ok(mut path) => {
            path.push("config.json");
            Config::load(&path)
        }
        Err(_) => Config::default(),
    };
    if let Some(workload) = env::args().nth(1) {
        config.workload = PathBuf::from(workload);
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {}", config.workload.display(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    let processes = read_file(&config.workload).await?;
    info!(
        "loaded {} processes from {}",
        processes.len(),
        config.workload.display()
    );

    let mut schedules = vec![];
    for scheduler in &config.schedulers {
        schedules.push(scheduler.simulate(&processes, config.quantum)?);
    }

    match config.output {
        OutputFormat::Table => {
            for schedule in &schedules {
                print_schedule(schedule, config);
            }
        }
        OutputFormat::Json => println!("{}", to_json(&schedules)?),
    }

    Ok(())
}

async fn read_file(path: &Path) -> Result<Vec<Process>, Error> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|error| error.kind())
        .map_err(Error::IO)?;

    read_workload(&contents)
}

fn print_schedule(schedule: &Schedule, config: &Config) {
    match schedule.policy {
        Scheduler::RR => {
            println!("== {} (quantum {}) ==", schedule.policy, config.quantum)
        }
        _ => println!("== {} ==", schedule.policy),
    }

    println!("pid\tarrival\tburst\tstart\tend\tturn\twait\tresp");
    for process in &schedule.processes {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            process.id(),
            process.arrival_time(),
            process.burst_time(),
            display(process.start_time()),
            display(process.completion_time()),
            display(process.turnaround()),
            display(process.waiting()),
            display(process.response()),
        );
    }

    if config.timeline && !schedule.timeline.is_empty() {
        let slices = schedule
            .timeline
            .slices()
            .iter()
            .map(|slice| format!("[{} P{} {})", slice.start, slice.pid, slice.end))
            .collect::<Vec<_>>();
        println!("timeline: {}", slices.join(" "));
    }

    println!("average {}", schedule.metrics);
    println!(
        "makespan {}, idle {}\n",
        schedule.makespan(),
        schedule.idle_time()
    );
}

fn display(value: Option<u64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}
