//! Invariants every engine must uphold on arbitrary workloads.

use cpu_sched_sim::{Process, Schedule, Scheduler};
use proptest::prelude::*;

const POLICIES: [Scheduler; 3] = [Scheduler::FCFS, Scheduler::SJF, Scheduler::RR];

fn arb_workload() -> impl Strategy<Value = Vec<Process>> {
    proptest::collection::vec((0u64..60, 1u64..20), 0..25).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (arrival, burst))| Process::new(index as u32 + 1, arrival, burst))
            .collect()
    })
}

fn average(schedule: &Schedule, value: impl Fn(&Process) -> Option<u64>) -> f64 {
    if schedule.processes.is_empty() {
        return 0.0;
    }
    let sum: u64 = schedule.processes.iter().map(|p| value(p).unwrap()).sum();
    sum as f64 / schedule.processes.len() as f64
}

proptest! {
    #[test]
    fn finished_processes_respect_time_bounds(processes in arb_workload(), quantum in 1u64..10) {
        for policy in POLICIES {
            let schedule = policy.simulate(&processes, quantum).unwrap();
            prop_assert_eq!(schedule.processes.len(), processes.len());

            for process in &schedule.processes {
                let start = process.start_time().unwrap();
                let completion = process.completion_time().unwrap();
                prop_assert!(start >= process.arrival_time());
                prop_assert!(completion >= start);
                prop_assert!(process.turnaround().unwrap() >= process.burst_time());
                prop_assert_eq!(process.remaining_time(), 0);
            }
        }
    }

    #[test]
    fn cpu_time_is_conserved(processes in arb_workload(), quantum in 1u64..10) {
        let total: u64 = processes.iter().map(Process::burst_time).sum();

        for policy in POLICIES {
            let schedule = policy.simulate(&processes, quantum).unwrap();
            for process in &processes {
                prop_assert_eq!(schedule.cpu_time(process.id()), process.burst_time());
            }
            prop_assert_eq!(schedule.busy_time(), total);
            prop_assert_eq!(schedule.makespan(), schedule.busy_time() + schedule.idle_time());
        }
    }

    #[test]
    fn non_preemptive_response_equals_waiting(processes in arb_workload()) {
        for policy in [Scheduler::FCFS, Scheduler::SJF] {
            let schedule = policy.simulate(&processes, 1).unwrap();
            for process in &schedule.processes {
                prop_assert_eq!(process.response(), process.waiting());
            }
            prop_assert_eq!(schedule.metrics.avg_response, schedule.metrics.avg_waiting);
            prop_assert_eq!(schedule.timeline.slices().len(), processes.len());
        }
    }

    #[test]
    fn round_robin_waiting_covers_response(processes in arb_workload(), quantum in 1u64..10) {
        let schedule = Scheduler::RR.simulate(&processes, quantum).unwrap();
        for process in &schedule.processes {
            prop_assert!(process.waiting().unwrap() >= process.response().unwrap());
        }
    }

    #[test]
    fn metrics_average_per_process_values(processes in arb_workload(), quantum in 1u64..10) {
        for policy in POLICIES {
            let schedule = policy.simulate(&processes, quantum).unwrap();
            prop_assert_eq!(schedule.metrics.avg_turnaround, average(&schedule, Process::turnaround));
            prop_assert_eq!(schedule.metrics.avg_waiting, average(&schedule, Process::waiting));
            prop_assert_eq!(schedule.metrics.avg_response, average(&schedule, Process::response));
        }
    }

    #[test]
    fn runs_are_deterministic(processes in arb_workload(), quantum in 1u64..10) {
        for policy in POLICIES {
            let first = policy.simulate(&processes, quantum).unwrap();
            let second = policy.simulate(&processes, quantum).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn lone_process_never_waits(arrival in 0u64..1_000, burst in 1u64..100, quantum in 1u64..10) {
        let processes = [Process::new(1, arrival, burst)];
        for policy in POLICIES {
            let metrics = policy.simulate(&processes, quantum).unwrap().metrics;
            prop_assert_eq!(metrics.avg_turnaround, burst as f64);
            prop_assert_eq!(metrics.avg_waiting, 0.0);
            prop_assert_eq!(metrics.avg_response, 0.0);
        }
    }

    #[test]
    fn caller_input_is_never_mutated(processes in arb_workload(), quantum in 1u64..10) {
        let before = processes.clone();
        for policy in POLICIES {
            policy.simulate(&processes, quantum).unwrap();
        }
        prop_assert_eq!(processes, before);
    }
}
