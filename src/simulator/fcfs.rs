//! First-Come-First-Served: non-preemptive dispatch in arrival order.

use log::{debug, trace};

use crate::error::Error;
use crate::simulator::metrics::Totals;
use crate::simulator::{Metrics, Process, Schedule, Scheduler, Time, Timeline, WorkingSet};

pub fn simulate(processes: &[Process]) -> Result<Schedule, Error> {
    let mut set = WorkingSet::new(processes)?;
    set.sort_by_arrival();

    let count = set.len();
    let mut totals = Totals::default();
    let mut timeline = Timeline::default();
    let mut clock: Time = 0;

    for process in set.iter_mut() {
        if clock < process.arrival_time() {
            debug!("fcfs: cpu idle from {} to {}", clock, process.arrival_time());
            clock = process.arrival_time();
        }

        let start = clock;
        process.dispatch(start);
        let burst = process.burst_time();
        clock += process.execute(burst);
        process.finish(clock);
        timeline.push(process.id(), start, clock);
        trace!("fcfs: process {} ran [{}, {})", process.id(), start, clock);

        // Single dispatch, so response and waiting coincide
        let waiting = start - process.arrival_time();
        totals.add_response(waiting);
        totals.add_completion(clock - process.arrival_time(), waiting);
    }

    debug!("fcfs: {} processes finished at {}", count, clock);
    Ok(Schedule::new(
        Scheduler::FCFS,
        set.into_processes(),
        timeline,
        totals.into_metrics(count),
    ))
}

pub fn metrics(processes: &[Process]) -> Result<Metrics, Error> {
    simulate(processes).map(|schedule| schedule.metrics)
}
