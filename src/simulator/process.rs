use serde::Serialize;
use std::collections::HashSet;

use crate::error::Error;

pub type Pid = u32;
pub type Time = u64;

/// One simulated task.
///
/// `id`, `arrival_time` and `burst_time` are fixed at creation. The remaining
/// fields are filled in by the engine that runs the process and are only
/// meaningful on the copies returned inside a [`Schedule`](super::Schedule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    id: Pid,
    arrival_time: Time,
    burst_time: Time,
    remaining_time: Time,
    start_time: Option<Time>,
    completion_time: Option<Time>,
}

impl Process {
    pub fn new(id: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    pub fn id(&self) -> Pid {
        self.id
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    pub fn start_time(&self) -> Option<Time> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Completion minus arrival, once the process has finished.
    pub fn turnaround(&self) -> Option<Time> {
        self.completion_time
            .map(|completion| completion - self.arrival_time)
    }

    /// Turnaround minus burst: every unit spent ready but off the CPU.
    pub fn waiting(&self) -> Option<Time> {
        self.turnaround().map(|turnaround| turnaround - self.burst_time)
    }

    /// Latency from arrival to the first dispatch.
    pub fn response(&self) -> Option<Time> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    /// Marks the first dispatch. Returns `true` only the first time.
    pub(crate) fn dispatch(&mut self, now: Time) -> bool {
        if self.start_time.is_some() {
            return false;
        }
        debug_assert!(now >= self.arrival_time);
        self.start_time = Some(now);
        true
    }

    /// Grants up to `budget` units of CPU and returns how many were used.
    pub(crate) fn execute(&mut self, budget: Time) -> Time {
        let slice = self.remaining_time.min(budget);
        self.remaining_time -= slice;
        slice
    }

    pub(crate) fn finish(&mut self, now: Time) {
        assert_eq!(
            self.remaining_time, 0,
            "process {} finished with work left",
            self.id
        );
        self.completion_time = Some(now);
    }

    fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = None;
    }
}

/// Private copy of the caller's processes, owned by a single simulation run.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    processes: Vec<Process>,
}

impl WorkingSet {
    /// Clones and validates the input. Every copy starts unscheduled, even if
    /// the caller passes records returned by an earlier run.
    ///
    /// The clock of any engine never passes the latest arrival plus the sum
    /// of all bursts, so that bound must fit in [`Time`].
    pub fn new(input: &[Process]) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(input.len());
        let mut processes = Vec::with_capacity(input.len());
        let mut latest_arrival: Time = 0;
        let mut total_burst: Time = 0;

        for process in input {
            if process.burst_time == 0 {
                return Err(Error::InvalidBurst(process.id));
            }
            if !seen.insert(process.id) {
                return Err(Error::DuplicateId(process.id));
            }
            latest_arrival = latest_arrival.max(process.arrival_time);
            total_burst = match total_burst.checked_add(process.burst_time) {
                Some(total) => total,
                None => return Err(Error::TimeOverflow),
            };

            let mut copy = process.clone();
            copy.reset();
            processes.push(copy);
        }

        if latest_arrival.checked_add(total_burst).is_none() {
            return Err(Error::TimeOverflow);
        }

        Ok(Self { processes })
    }

    /// Orders by `(arrival_time, id)`.
    pub fn sort_by_arrival(&mut self) {
        self.processes
            .sort_by_key(|process| (process.arrival_time, process.id));
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Process> {
        self.processes.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Process> {
        self.processes.iter_mut()
    }

    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}
