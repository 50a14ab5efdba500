pub mod fcfs;
pub mod metrics;
pub mod process;
pub mod queue;
pub mod round_robin;
pub mod schedule;
pub mod scheduler;
pub mod sjf;

pub use metrics::Metrics;
pub use process::{Pid, Process, Time, WorkingSet};
pub use queue::ReadyQueue;
pub use schedule::{to_json, Schedule, Slice, Timeline};
pub use scheduler::Scheduler;
