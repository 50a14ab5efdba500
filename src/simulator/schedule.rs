use serde::Serialize;

use crate::error::Error;
use crate::simulator::{Metrics, Pid, Process, Scheduler, Time};

/// A continuous stretch of CPU granted to one process, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
}

impl Slice {
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered record of CPU grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Appends a grant, merging it into the previous one when the same
    /// process simply keeps the CPU.
    pub fn push(&mut self, pid: Pid, start: Time, end: Time) {
        debug_assert!(start < end);

        if let Some(last) = self.slices.last_mut() {
            debug_assert!(last.end <= start);
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice { pid, start, end });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Full outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub policy: Scheduler,
    /// Finished processes, ordered by id.
    pub processes: Vec<Process>,
    pub timeline: Timeline,
    pub metrics: Metrics,
}

impl Schedule {
    pub(crate) fn new(
        policy: Scheduler,
        mut processes: Vec<Process>,
        timeline: Timeline,
        metrics: Metrics,
    ) -> Self {
        processes.sort_by_key(Process::id);
        Self {
            policy,
            processes,
            timeline,
            metrics,
        }
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes
            .binary_search_by_key(&pid, Process::id)
            .ok()
            .map(|index| &self.processes[index])
    }

    /// Total CPU granted to `pid` across every slice.
    pub fn cpu_time(&self, pid: Pid) -> Time {
        self.timeline
            .slices()
            .iter()
            .filter(|slice| slice.pid == pid)
            .map(Slice::duration)
            .sum()
    }

    /// Time at which the last process finished.
    pub fn makespan(&self) -> Time {
        self.timeline.slices().last().map_or(0, |slice| slice.end)
    }

    pub fn busy_time(&self) -> Time {
        self.timeline.slices().iter().map(Slice::duration).sum()
    }

    /// Time between 0 and the makespan where the CPU had nothing to run.
    pub fn idle_time(&self) -> Time {
        self.makespan() - self.busy_time()
    }
}

/// Pretty-printed JSON array of `schedules`.
pub fn to_json(schedules: &[Schedule]) -> Result<String, Error> {
    serde_json::to_string_pretty(schedules).map_err(|_| Error::Serialize)
}
