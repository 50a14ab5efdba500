//! Round-Robin with a fixed time quantum.
//!
//! Arrived processes wait in a FIFO [`ReadyQueue`]. The head runs for at most
//! one quantum and, if it still has work left, goes back to the tail behind
//! anything that arrived while it was running. Response time is taken at the
//! first dispatch; waiting is derived from turnaround at completion, so it
//! covers every stretch spent in the queue.

use log::{debug, trace};

use crate::error::Error;
use crate::simulator::metrics::Totals;
use crate::simulator::{
    Metrics, Process, ReadyQueue, Schedule, Scheduler, Time, Timeline, WorkingSet,
};

pub fn simulate(processes: &[Process], quantum: u64) -> Result<Schedule, Error> {
    if quantum == 0 {
        return Err(Error::InvalidQuantum(quantum));
    }

    let mut set = WorkingSet::new(processes)?;
    set.sort_by_arrival();

    let mut engine = RoundRobin::new(set, quantum);
    engine.run();
    Ok(engine.into_schedule())
}

pub fn metrics(processes: &[Process], quantum: u64) -> Result<Metrics, Error> {
    simulate(processes, quantum).map(|schedule| schedule.metrics)
}

struct RoundRobin {
    set: WorkingSet,
    queue: ReadyQueue,
    quantum: Time,
    clock: Time,
    // Index into `set` of the first process not yet admitted
    next_arrival: usize,
    finished: usize,
    totals: Totals,
    timeline: Timeline,
}

impl RoundRobin {
    fn new(set: WorkingSet, quantum: Time) -> Self {
        let queue = ReadyQueue::with_capacity(set.len());
        Self {
            set,
            queue,
            quantum,
            clock: 0,
            next_arrival: 0,
            finished: 0,
            totals: Totals::default(),
            timeline: Timeline::default(),
        }
    }

    fn run(&mut self) {
        while self.finished < self.set.len() {
            self.admit_arrivals();

            if self.queue.is_empty() {
                self.skip_idle();
                continue;
            }

            self.step();
        }
        debug!("rr: {} processes finished at {}", self.finished, self.clock);
    }

    /// Enqueues, in arrival order, every process that has arrived by now.
    fn admit_arrivals(&mut self) {
        while let Some(process) = self.set.get(self.next_arrival) {
            if process.arrival_time() > self.clock {
                break;
            }
            trace!("rr: process {} ready at {}", process.id(), self.clock);
            self.queue.push(self.next_arrival);
            self.next_arrival += 1;
        }
    }

    fn skip_idle(&mut self) {
        let next = match self.set.get(self.next_arrival) {
            Some(process) => process.arrival_time(),
            None => unreachable!(
                "ready queue empty with {} of {} processes unfinished and none pending",
                self.set.len() - self.finished,
                self.set.len()
            ),
        };
        debug!("rr: cpu idle from {} to {}", self.clock, next);
        self.clock = next;
    }

    /// Runs the head of the queue for one slice.
    fn step(&mut self) {
        let index = self.queue.pop();
        let quantum = self.quantum;
        let start = self.clock;

        let process = match self.set.get_mut(index) {
            Some(process) => process,
            None => unreachable!("queued index {} out of range", index),
        };

        if process.dispatch(start) {
            self.totals.add_response(start - process.arrival_time());
        }

        let slice = process.execute(quantum);
        let pid = process.id();
        let remaining = process.remaining_time();
        self.clock += slice;
        self.timeline.push(pid, start, self.clock);
        trace!("rr: process {} ran [{}, {}), {} left", pid, start, self.clock, remaining);

        // Newcomers queue ahead of the process that was just preempted
        self.admit_arrivals();

        if remaining > 0 {
            self.queue.push(index);
            return;
        }

        let clock = self.clock;
        let process = match self.set.get_mut(index) {
            Some(process) => process,
            None => unreachable!("queued index {} out of range", index),
        };
        process.finish(clock);
        let turnaround = clock - process.arrival_time();
        self.totals
            .add_completion(turnaround, turnaround - process.burst_time());
        self.finished += 1;
        debug!("rr: process {} finished at {}", pid, clock);
    }

    fn into_schedule(self) -> Schedule {
        let count = self.set.len();
        Schedule::new(
            Scheduler::RR,
            self.set.into_processes(),
            self.timeline,
            self.totals.into_metrics(count),
        )
    }
}
