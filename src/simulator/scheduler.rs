use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::simulator::{fcfs, round_robin, sjf, Process, Schedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Scheduler {
    FCFS,
    SJF,
    RR,
}

impl Scheduler {
    /// Runs `processes` under this policy. `quantum` is only read by `RR`.
    pub fn simulate(self, processes: &[Process], quantum: u64) -> Result<Schedule, Error> {
        match self {
            Scheduler::FCFS => fcfs::simulate(processes),
            Scheduler::SJF => sjf::simulate(processes),
            Scheduler::RR => round_robin::simulate(processes, quantum),
        }
    }
}

impl FromStr for Scheduler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Scheduler::FCFS),
            "SJF" => Ok(Scheduler::SJF),
            "RR" => Ok(Scheduler::RR),
            _ => Err(Self::Err::ParseSchedulerError(s.to_string())),
        }
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scheduler::FCFS => write!(f, "FCFS"),
            Scheduler::SJF => write!(f, "SJF"),
            Scheduler::RR => write!(f, "RR"),
        }
    }
}
