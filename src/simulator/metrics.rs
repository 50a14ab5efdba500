use serde::Serialize;
use std::fmt;

use crate::simulator::Time;

/// Averages over every process of one simulation run, in input time units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "turnaround {:.2}, waiting {:.2}, response {:.2}",
            self.avg_turnaround, self.avg_waiting, self.avg_response
        )
    }
}

/// Running sums folded into [`Metrics`] once the run is over.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Totals {
    turnaround: f64,
    waiting: f64,
    response: f64,
}

impl Totals {
    pub fn add_response(&mut self, response: Time) {
        self.response += response as f64;
    }

    pub fn add_completion(&mut self, turnaround: Time, waiting: Time) {
        self.turnaround += turnaround as f64;
        self.waiting += waiting as f64;
    }

    pub fn into_metrics(self, count: usize) -> Metrics {
        // An empty run has nothing to average
        if count == 0 {
            return Metrics::default();
        }

        let count = count as f64;
        Metrics {
            avg_turnaround: self.turnaround / count,
            avg_waiting: self.waiting / count,
            avg_response: self.response / count,
        }
    }
}
