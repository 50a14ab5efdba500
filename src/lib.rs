//! Discrete-event simulation of single-CPU process scheduling.
//!
//! Three policies are provided: First-Come-First-Served, non-preemptive
//! Shortest-Job-First and Round-Robin. Each engine takes a read-only list of
//! [`Process`] records, simulates it on a private copy and reports the
//! average turnaround, waiting and response times as [`Metrics`].
//!
//! ```
//! use cpu_sched_sim::{fcfs_metrics, Process};
//!
//! let processes = [Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let metrics = fcfs_metrics(&processes).unwrap();
//! assert_eq!(metrics.avg_turnaround, 6.0);
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod simulator;

pub use error::Error;
pub use simulator::{Metrics, Pid, Process, Schedule, Scheduler, Slice, Time};

/// Averages for First-Come-First-Served.
pub fn fcfs_metrics(processes: &[Process]) -> Result<Metrics, Error> {
    simulator::fcfs::metrics(processes)
}

/// Averages for non-preemptive Shortest-Job-First.
pub fn sjf_metrics(processes: &[Process]) -> Result<Metrics, Error> {
    simulator::sjf::metrics(processes)
}

/// Averages for Round-Robin. Fails with [`Error::InvalidQuantum`] when
/// `quantum` is 0.
pub fn rr_metrics(processes: &[Process], quantum: u64) -> Result<Metrics, Error> {
    simulator::round_robin::metrics(processes, quantum)
}
