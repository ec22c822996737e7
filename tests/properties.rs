//! Property tests for the scheduling engines.

use cpu_sched_sim::models::{Process, SimulationResult};
use cpu_sched_sim::scheduler::{run_fcfs, run_rr};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0i64..50, 1i64..30), 1..20).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| Process::new(i as u32 + 1, arrival, burst))
            .collect()
    })
}

fn assert_invariants(result: &SimulationResult) {
    for p in &result.processes {
        assert!(p.start_time >= p.arrival_time, "{p:?}");
        assert!(p.end_time >= p.start_time, "{p:?}");
        assert_eq!(p.turnaround_time, p.end_time - p.arrival_time);
        assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
        assert_eq!(p.response_time, p.start_time - p.arrival_time);
        assert!(p.waiting_time >= 0);
        assert!(p.response_time >= 0);
        assert_eq!(p.remaining_time, 0);
    }
    let makespan = result.processes.iter().map(|p| p.end_time).max().unwrap_or(0);
    assert_eq!(result.total_time, makespan);
}

proptest! {
    #[test]
    fn fcfs_invariants(processes in workload()) {
        assert_invariants(&run_fcfs(processes));
    }

    #[test]
    fn rr_invariants(processes in workload(), quantum in 1i64..10) {
        assert_invariants(&run_rr(processes, quantum).unwrap());
    }

    #[test]
    fn fcfs_preserves_arrival_order(processes in workload()) {
        let mut expected = processes.clone();
        expected.sort_by_key(|p| p.arrival_time);
        let expected_ids: Vec<u32> = expected.iter().map(|p| p.id).collect();

        let result = run_fcfs(processes);
        let ids: Vec<u32> = result.processes.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids, expected_ids);
        prop_assert!(result.processes.windows(2).all(|w| w[0].end_time <= w[1].end_time));
    }

    #[test]
    fn rr_with_large_quantum_equals_fcfs(processes in workload(), extra in 0i64..5) {
        let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap();
        let rr = run_rr(processes.clone(), max_burst + extra).unwrap();
        let fcfs = run_fcfs(processes);
        prop_assert_eq!(rr, fcfs);
    }

    #[test]
    fn runs_are_deterministic(processes in workload(), quantum in 1i64..10) {
        prop_assert_eq!(run_fcfs(processes.clone()), run_fcfs(processes.clone()));
        prop_assert_eq!(
            run_rr(processes.clone(), quantum).unwrap(),
            run_rr(processes, quantum).unwrap()
        );
    }

    #[test]
    fn rr_conserves_work(processes in workload(), quantum in 1i64..10) {
        // Busy time never exceeds the span from first arrival to makespan
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        let first_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap();
        let result = run_rr(processes, quantum).unwrap();
        prop_assert!(result.total_time - first_arrival >= total_burst);
    }

    #[test]
    fn non_positive_quantum_is_rejected(processes in workload(), quantum in -5i64..=0) {
        prop_assert!(run_rr(processes, quantum).is_err());
    }
}

#[test]
fn worked_examples() {
    let fcfs = run_fcfs(vec![Process::new(1, 0, 5), Process::new(2, 1, 3)]);
    assert_eq!((fcfs.processes[0].start_time, fcfs.processes[0].end_time), (0, 5));
    assert_eq!((fcfs.processes[1].start_time, fcfs.processes[1].end_time), (5, 8));
    assert_eq!(fcfs.total_time, 8);

    let rr = run_rr(vec![Process::new(1, 0, 5), Process::new(2, 0, 3)], 2).unwrap();
    assert_eq!((rr.processes[0].start_time, rr.processes[0].end_time), (0, 6));
    assert_eq!((rr.processes[1].start_time, rr.processes[1].end_time), (2, 7));
    assert!((rr.cpu_efficiency - 800.0 / 11.0).abs() < 1e-9);
}
