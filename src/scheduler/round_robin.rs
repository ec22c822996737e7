//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! Preemptive, quantum-based, with a FIFO ready queue:
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Admit, in arrival order, every process that has arrived by `clock`.
//! 3. If nothing is ready, the CPU idles until the next arrival.
//! 4. Otherwise dispatch the queue head. A process owing at most one
//!    quantum runs to completion; any other runs for exactly one quantum
//!    and is re-appended to the tail.
//!
//! Processes arriving during a slice, or exactly when it ends, are admitted
//! after the preempted process is re-appended. Processes tied on arrival
//! time are admitted together, in input order.
//!
//! Admission walks a cursor over the arrival-sorted list, so every process
//! enters the queue exactly once and duplicate ids cannot collide.
//!
//! The clock saturates at `i64::MAX` instead of overflowing.
//!
//! # Complexity
//! O(n log n + Σ⌈burst / quantum⌉).

use std::collections::VecDeque;

use super::metrics::{calculate_metrics, CONTEXT_SWITCH_OVERHEAD};
use super::prepare;
use crate::error::{Result, SimulationError};
use crate::models::{Process, SimulationResult};

/// Runs Round Robin and computes metrics with the default context-switch overhead.
///
/// # Errors
/// [`SimulationError::InvalidQuantum`] if `time_quantum <= 0`. The input is
/// dropped untouched in that case.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::run_rr;
///
/// let result = run_rr(vec![Process::new(1, 0, 5), Process::new(2, 0, 3)], 2).unwrap();
/// assert_eq!(result.find(1).unwrap().end_time, 6);
/// assert_eq!(result.find(2).unwrap().end_time, 7);
/// assert!(run_rr(vec![Process::new(1, 0, 5)], 0).is_err());
/// ```
pub fn run_rr(mut processes: Vec<Process>, time_quantum: i64) -> Result<SimulationResult> {
    schedule_round_robin(&mut processes, time_quantum)?;
    Ok(calculate_metrics(processes, CONTEXT_SWITCH_OVERHEAD))
}

/// Assigns Round Robin start and end times in place.
///
/// Leaves `processes` sorted by arrival time.
pub fn schedule_round_robin(processes: &mut [Process], time_quantum: i64) -> Result<()> {
    if time_quantum <= 0 {
        return Err(SimulationError::InvalidQuantum(time_quantum));
    }

    prepare(processes);
    tracing::debug!(
        processes = processes.len(),
        quantum = time_quantum,
        "running Round Robin"
    );

    let n = processes.len();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut started = vec![false; n];
    let mut next_arrival = 0;
    let mut completed = 0;
    let mut clock: i64 = 0;

    while completed < n {
        while next_arrival < n && processes[next_arrival].arrival_time <= clock {
            ready.push_back(next_arrival);
            next_arrival += 1;
        }

        let Some(idx) = ready.pop_front() else {
            // Queue empty with work left: every unfinished process is still to arrive
            clock = processes[next_arrival].arrival_time;
            continue;
        };

        let process = &mut processes[idx];
        if !started[idx] {
            started[idx] = true;
            process.start_time = clock;
        }

        if process.remaining_time <= time_quantum {
            clock = clock.saturating_add(process.remaining_time);
            process.remaining_time = 0;
            process.end_time = clock;
            completed += 1;
            tracing::trace!(id = process.id, end = clock, "process completed");
        } else {
            clock = clock.saturating_add(time_quantum);
            process.remaining_time -= time_quantum;
            ready.push_back(idx);
            tracing::trace!(
                id = process.id,
                remaining = process.remaining_time,
                clock,
                "process preempted"
            );
        }
    }

    Ok(())
}
