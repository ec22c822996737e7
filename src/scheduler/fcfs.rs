//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep input order).
//! 2. Walk the sorted list with a running clock starting at 0.
//! 3. If the clock is behind a process's arrival, the CPU idles until it arrives.
//! 4. The process runs to completion: `start = clock`, `end = clock + burst`.
//!
//! The clock saturates at `i64::MAX` instead of overflowing.
//!
//! # Complexity
//! O(n log n), dominated by the sort.

use super::metrics::{calculate_metrics, CONTEXT_SWITCH_OVERHEAD};
use super::prepare;
use crate::models::{Process, SimulationResult};

/// Runs FCFS and computes metrics with the default context-switch overhead.
///
/// An empty list yields [`SimulationResult::empty`].
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::run_fcfs;
///
/// let result = run_fcfs(vec![Process::new(1, 0, 5), Process::new(2, 1, 3)]);
/// assert_eq!(result.total_time, 8);
/// assert_eq!(result.find(2).unwrap().start_time, 5);
/// ```
pub fn run_fcfs(mut processes: Vec<Process>) -> SimulationResult {
    schedule_fcfs(&mut processes);
    calculate_metrics(processes, CONTEXT_SWITCH_OVERHEAD)
}

/// Assigns FCFS start and end times in place.
///
/// Leaves `processes` sorted by arrival time.
pub fn schedule_fcfs(processes: &mut [Process]) {
    prepare(processes);
    tracing::debug!(processes = processes.len(), "running FCFS");

    let mut clock: i64 = 0;
    for process in processes.iter_mut() {
        if clock < process.arrival_time {
            clock = process.arrival_time;
        }
        process.start_time = clock;
        process.end_time = clock.saturating_add(process.burst_time);
        process.remaining_time = 0;
        clock = process.end_time;

        tracing::trace!(
            id = process.id,
            start = process.start_time,
            end = process.end_time,
            "process completed"
        );
    }
}
