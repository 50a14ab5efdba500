use cpu_sched_sim::parser::read_workload;
use cpu_sched_sim::{fcfs_metrics, rr_metrics, sjf_metrics, Error, Metrics, Process, Scheduler};

fn workload() -> Vec<Process> {
    read_workload(b"1 0 8\n2 1 4\n3 2 9\n4 3 5\n").unwrap()
}

#[test]
fn fcfs_two_processes() {
    let processes = [Process::new(1, 0, 5), Process::new(2, 1, 3)];
    assert_eq!(
        fcfs_metrics(&processes).unwrap(),
        Metrics {
            avg_turnaround: 6.0,
            avg_waiting: 2.0,
            avg_response: 2.0,
        }
    );
}

#[test]
fn rr_two_processes() {
    let processes = [Process::new(1, 0, 4), Process::new(2, 1, 2)];
    assert_eq!(
        rr_metrics(&processes, 2).unwrap(),
        Metrics {
            avg_turnaround: 4.5,
            avg_waiting: 1.5,
            avg_response: 1.0,
        }
    );
}

#[test]
fn sjf_lone_late_arrival() {
    let processes = [Process::new(1, 5, 2)];
    assert_eq!(
        sjf_metrics(&processes).unwrap(),
        Metrics {
            avg_turnaround: 2.0,
            avg_waiting: 0.0,
            avg_response: 0.0,
        }
    );
}

#[test]
fn classic_workload_under_every_policy() {
    let processes = workload();

    // 1 [0,8) 2 [8,12) 3 [12,21) 4 [21,26)
    let fcfs = fcfs_metrics(&processes).unwrap();
    assert_eq!(fcfs.avg_turnaround, 15.25);
    assert_eq!(fcfs.avg_waiting, 8.75);

    // 1 [0,8) 2 [8,12) 4 [12,17) 3 [17,26)
    let sjf = sjf_metrics(&processes).unwrap();
    assert_eq!(sjf.avg_turnaround, 14.25);
    assert_eq!(sjf.avg_waiting, 7.75);

    // 1 [0,4) 2 [4,8) 3 [8,12) 4 [12,16) 1 [16,20) 3 [20,24) 4 [24,25) 3 [25,26)
    let rr = rr_metrics(&processes, 4).unwrap();
    assert_eq!(rr.avg_turnaround, 18.25);
    assert_eq!(rr.avg_waiting, 11.75);
    assert_eq!(rr.avg_response, 4.5);
}

#[test]
fn invalid_input_is_reported() {
    let processes = [Process::new(1, 0, 3), Process::new(2, 0, 0)];
    assert_eq!(fcfs_metrics(&processes), Err(Error::InvalidBurst(2)));
    assert_eq!(sjf_metrics(&processes), Err(Error::InvalidBurst(2)));
    assert_eq!(rr_metrics(&processes, 2), Err(Error::InvalidBurst(2)));
    assert_eq!(rr_metrics(&workload(), 0), Err(Error::InvalidQuantum(0)));
}

#[test]
fn clock_overflow_is_reported() {
    let late = [Process::new(1, u64::MAX - 1, 5)];
    assert_eq!(fcfs_metrics(&late), Err(Error::TimeOverflow));
    assert_eq!(sjf_metrics(&late), Err(Error::TimeOverflow));
    assert_eq!(rr_metrics(&late, 2), Err(Error::TimeOverflow));

    let long = [Process::new(1, 0, u64::MAX), Process::new(2, 0, u64::MAX)];
    assert_eq!(sjf_metrics(&long), Err(Error::TimeOverflow));

    let long = [Process::new(1, 0, u64::MAX), Process::new(2, 0, 2)];
    assert_eq!(rr_metrics(&long, u64::MAX), Err(Error::TimeOverflow));
}

#[test]
fn empty_input_for_every_policy() {
    for scheduler in [Scheduler::FCFS, Scheduler::SJF, Scheduler::RR] {
        let schedule = scheduler.simulate(&[], 1).unwrap();
        assert_eq!(schedule.metrics, Metrics::default());
        assert!(schedule.timeline.is_empty());
        assert_eq!(schedule.makespan(), 0);
    }
}

#[test]
fn large_quantum_matches_fcfs() {
    let processes = workload();
    assert_eq!(
        rr_metrics(&processes, 100).unwrap(),
        fcfs_metrics(&processes).unwrap()
    );
}
