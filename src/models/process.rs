//! Process (task) model.
//!
//! A process is one unit of CPU work to be scheduled. The caller supplies
//! the identity and workload fields; the scheduler fills in the timing
//! fields and the metrics pass fills in the derived fields.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Lifecycle
/// 1. Created by the caller with `id`, `arrival_time` and `burst_time`
///    (`remaining_time = burst_time`, everything else zero).
/// 2. Timed in place by a scheduler (`start_time`, `end_time`,
///    `remaining_time`).
/// 3. Completed by the metrics pass (`turnaround_time`, `waiting_time`,
///    `response_time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Caller-supplied identifier. Uniqueness is not enforced by the engine.
    pub id: u32,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// CPU time still owed. Round Robin drains it slice by slice; FCFS in one step.
    pub remaining_time: i64,
    /// Time of first dispatch.
    pub start_time: i64,
    /// Time of completion.
    pub end_time: i64,
    /// `end_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

impl Process {
    /// Creates a process with only its input fields populated.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: 0,
            end_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        }
    }

    /// Whether the process owes no more CPU time.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Clamps malformed workload fields and resets scheduler bookkeeping.
    ///
    /// A negative burst is treated as zero work.
    pub(crate) fn reset_for_run(&mut self) {
        self.burst_time = self.burst_time.max(0);
        self.remaining_time = self.burst_time;
        self.start_time = 0;
        self.end_time = 0;
    }
}
