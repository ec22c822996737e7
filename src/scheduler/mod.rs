//! Single-CPU schedulers and metrics.
//!
//! Provides First-Come-First-Served and Round Robin dispatching, the
//! metrics pass that summarizes a timed run, and a configurable
//! [`Simulator`] facade.
//!
//! # Input contract
//!
//! Both engines take ownership of the process list, time it in place and
//! return it inside the [`SimulationResult`](crate::models::SimulationResult).
//! Processes are stable-sorted by arrival time first; ties keep input order.
//!
//! Malformed processes are tolerated rather than rejected:
//! - a negative burst is treated as zero work,
//! - a negative arrival is dispatched no earlier than t=0,
//! - duplicate ids are scheduled as independent processes.
//!
//! Use [`validate_processes`](crate::validation::validate_processes) or a
//! strict [`SimulationConfig`] to reject them instead.
//!
//! # Determinism
//! Identical input always yields identical output.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod round_robin;
mod simulator;

pub use fcfs::{run_fcfs, schedule_fcfs};
pub use metrics::{calculate_metrics, CONTEXT_SWITCH_OVERHEAD};
pub use round_robin::{run_rr, schedule_round_robin};
pub use simulator::{Policy, SimulationConfig, Simulator};

use crate::models::Process;

/// Normalizes workload fields and stable-sorts by arrival time.
fn prepare(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        p.reset_for_run();
    }
    processes.sort_by_key(|p| p.arrival_time);
}
