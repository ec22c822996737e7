//! Simulation result model.
//!
//! Aggregate output of one scheduling run: the makespan, the mean
//! per-process metrics, CPU efficiency, and the fully timed processes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Process;

/// Outcome of a scheduling run.
///
/// Ownership of the timed processes passes to the caller. They are kept in
/// the scheduler's (arrival-sorted) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Makespan: completion time of the last process to finish.
    pub total_time: i64,
    /// Mean of `end_time - arrival_time`.
    pub avg_turnaround_time: f64,
    /// Mean of `turnaround_time - burst_time`.
    pub avg_waiting_time: f64,
    /// Mean of `start_time - arrival_time`.
    pub avg_response_time: f64,
    /// Useful CPU time as a percentage of makespan plus switch overhead.
    pub cpu_efficiency: f64,
    /// Timed processes in scheduling order.
    pub processes: Vec<Process>,
}

impl SimulationResult {
    /// Creates an empty (zero-valued) result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the run contained no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Finds the first process with the given id.
    pub fn find(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Processes ordered by id (stable for duplicate ids).
    pub fn processes_by_id(&self) -> Vec<&Process> {
        let mut sorted: Vec<&Process> = self.processes.iter().collect();
        sorted.sort_by_key(|p| p.id);
        sorted
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Time required is {} time units", self.total_time)?;
        writeln!(
            f,
            "Average Turn Around Time: {:.2} time units",
            self.avg_turnaround_time
        )?;
        writeln!(f, "Average Waiting Time: {:.2} time units", self.avg_waiting_time)?;
        writeln!(
            f,
            "Average Response Time: {:.2} time units",
            self.avg_response_time
        )?;
        writeln!(f, "CPU Efficiency: {:.2}%", self.cpu_efficiency)?;

        for p in self.processes_by_id() {
            writeln!(f)?;
            writeln!(f, "Process {}:", p.id)?;
            writeln!(f, "Service time = {} time units", p.burst_time)?;
            writeln!(f, "Turnaround time = {} time units", p.turnaround_time)?;
            writeln!(f, "Waiting time = {} time units", p.waiting_time)?;
            writeln!(f, "Response time = {} time units", p.response_time)?;
        }
        Ok(())
    }
}
