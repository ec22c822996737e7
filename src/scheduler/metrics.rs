//! Scheduling performance metrics.
//!
//! Turns a fully timed process list into a [`SimulationResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | end - arrival |
//! | Waiting | turnaround - burst |
//! | Response | start - arrival |
//! | Total time | Latest completion time (makespan) |
//! | CPU efficiency | Σ burst / (total time + overhead · n) · 100 |
//!
//! Total time is the maximum end time over all processes, not the end time
//! of the last process in list order. The two differ under Round Robin when
//! a late short arrival finishes before an earlier long one.
//!
//! The context-switch overhead is charged once per process, not per
//! preemption.
//!
//! Per-process differences saturate at the `i64` bounds; totals are
//! accumulated in `i128`.

use crate::models::{Process, SimulationResult};

/// Context-switch cost charged per process (time units).
pub const CONTEXT_SWITCH_OVERHEAD: i64 = 2;

/// Fills in per-process derived times and aggregates them.
///
/// An empty list yields [`SimulationResult::empty`]. If the efficiency
/// denominator is not positive (all work is zero and overhead is zero),
/// efficiency is reported as 0.
pub fn calculate_metrics(
    mut processes: Vec<Process>,
    context_switch_overhead: i64,
) -> SimulationResult {
    if processes.is_empty() {
        return SimulationResult::empty();
    }

    let mut total_burst: i128 = 0;
    let mut total_turnaround: i128 = 0;
    let mut total_waiting: i128 = 0;
    let mut total_response: i128 = 0;
    let mut total_time: i64 = i64::MIN;

    for p in &mut processes {
        p.turnaround_time = p.end_time.saturating_sub(p.arrival_time);
        p.waiting_time = p.turnaround_time.saturating_sub(p.burst_time);
        p.response_time = p.start_time.saturating_sub(p.arrival_time);

        total_burst += i128::from(p.burst_time);
        total_turnaround += i128::from(p.turnaround_time);
        total_waiting += i128::from(p.waiting_time);
        total_response += i128::from(p.response_time);
        total_time = total_time.max(p.end_time);
    }

    let n = processes.len() as f64;
    let denominator = i128::from(total_time).saturating_add(
        i128::from(context_switch_overhead).saturating_mul(processes.len() as i128),
    );
    let cpu_efficiency = if denominator > 0 {
        total_burst as f64 / denominator as f64 * 100.0
    } else {
        0.0
    };

    tracing::debug!(total_time, cpu_efficiency, "metrics computed");

    SimulationResult {
        total_time,
        avg_turnaround_time: total_turnaround as f64 / n,
        avg_waiting_time: total_waiting as f64 / n,
        avg_response_time: total_response as f64 / n,
        cpu_efficiency,
        processes,
    }
}
