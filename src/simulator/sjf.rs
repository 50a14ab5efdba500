//! Non-preemptive Shortest-Job-First.
//!
//! Among the processes that have arrived, the one with the smallest burst
//! runs to completion. Ties fall back to earlier arrival, then lower id.
//! Selection scans every process, so a run is O(n²).

use log::{debug, trace};

use crate::error::Error;
use crate::simulator::metrics::Totals;
use crate::simulator::{Metrics, Process, Schedule, Scheduler, Time, Timeline, WorkingSet};

pub fn simulate(processes: &[Process]) -> Result<Schedule, Error> {
    let mut set = WorkingSet::new(processes)?;

    let count = set.len();
    let mut done = vec![false; count];
    let mut completed = 0;
    let mut totals = Totals::default();
    let mut timeline = Timeline::default();
    let mut clock: Time = 0;

    while completed < count {
        let Some(best) = select(&set, &done, clock) else {
            // Nothing has arrived yet, jump to the earliest pending arrival
            let next = match next_arrival(&set, &done) {
                Some(next) => next,
                None => unreachable!("{} processes left but none pending", count - completed),
            };
            debug!("sjf: cpu idle from {} to {}", clock, next);
            clock = next;
            continue;
        };

        let process = match set.get_mut(best) {
            Some(process) => process,
            None => unreachable!("selected index {} out of range", best),
        };

        let start = clock;
        process.dispatch(start);
        let burst = process.burst_time();
        clock += process.execute(burst);
        process.finish(clock);
        timeline.push(process.id(), start, clock);
        trace!("sjf: process {} ran [{}, {})", process.id(), start, clock);

        let waiting = start - process.arrival_time();
        totals.add_response(waiting);
        totals.add_completion(clock - process.arrival_time(), waiting);

        done[best] = true;
        completed += 1;
    }

    debug!("sjf: {} processes finished at {}", count, clock);
    Ok(Schedule::new(
        Scheduler::SJF,
        set.into_processes(),
        timeline,
        totals.into_metrics(count),
    ))
}

pub fn metrics(processes: &[Process]) -> Result<Metrics, Error> {
    simulate(processes).map(|schedule| schedule.metrics)
}

/// Index of the shortest ready job at `clock`, if any has arrived.
fn select(set: &WorkingSet, done: &[bool], clock: Time) -> Option<usize> {
    set.iter()
        .enumerate()
        .filter(|(index, process)| !done[*index] && process.arrival_time() <= clock)
        .min_by_key(|(_, process)| (process.burst_time(), process.arrival_time(), process.id()))
        .map(|(index, _)| index)
}

fn next_arrival(set: &WorkingSet, done: &[bool]) -> Option<Time> {
    set.iter()
        .enumerate()
        .filter(|(index, _)| !done[*index])
        .map(|(_, process)| process.arrival_time())
        .min()
}
