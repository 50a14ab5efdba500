use crate::simulator::Pid;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Quantum must be > 0, got {0}.")]
    InvalidQuantum(u64),
    #[error("Process {0} has a burst time of 0, burst must be > 0.")]
    InvalidBurst(Pid),
    #[error("Process id {0} is used more than once.")]
    DuplicateId(Pid),
    #[error("Arrival and burst times are too large, the simulation clock would overflow.")]
    TimeOverflow,
    #[error("Could not serialize the schedules to JSON.")]
    Serialize,
    #[error("IO Error")]
    IO(io::ErrorKind),
    #[error("File should contain valid utf8")]
    Utf8Error,
    #[error("Invalid number of fields on line {0}: {1:?}, expected 'id arrival burst' or 'arrival burst'.")]
    InvalidNumberFields(usize, Vec<String>),
    #[error("Not a valid value '{1}' on line {0}, value must be a non-negative integer.")]
    ParseIntError(usize, String),
    #[error("Too many processes at line {0}, automatic ids must fit in a u32.")]
    TooManyProcesses(usize),
    #[error("Invalid Scheduler '{0}'.")]
    ParseSchedulerError(String),
}
