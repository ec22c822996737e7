//! Configurable simulation entry point.
//!
//! Wraps the two engines behind one [`SimulationConfig`]: policy selection,
//! context-switch overhead, an optional process limit and opt-in strict
//! validation.

use serde::{Deserialize, Serialize};

use super::metrics::{calculate_metrics, CONTEXT_SWITCH_OVERHEAD};
use super::{schedule_fcfs, schedule_round_robin};
use crate::error::{Result, SimulationError};
use crate::models::{Process, SimulationResult};
use crate::validation::validate_processes;

/// Dispatching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive.
    Fcfs,
    /// Round Robin with the given quantum.
    RoundRobin { time_quantum: i64 },
}

impl Policy {
    /// Short policy name ("FCFS" or "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::RoundRobin { .. } => "RR",
        }
    }
}

/// Simulation settings.
///
/// Deserializable so a run can be described in a config file; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Dispatching policy.
    pub policy: Policy,
    /// Context-switch cost charged once per process (time units).
    pub context_switch_overhead: i64,
    /// Maximum number of processes accepted. `None` = unlimited.
    pub process_limit: Option<usize>,
    /// Reject malformed processes instead of tolerating them.
    pub strict: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Fcfs,
            context_switch_overhead: CONTEXT_SWITCH_OVERHEAD,
            process_limit: None,
            strict: false,
        }
    }
}

impl SimulationConfig {
    /// Creates a config for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// FCFS config.
    pub fn fcfs() -> Self {
        Self::new(Policy::Fcfs)
    }

    /// Round Robin config.
    pub fn round_robin(time_quantum: i64) -> Self {
        Self::new(Policy::RoundRobin { time_quantum })
    }

    /// Sets the per-process context-switch overhead.
    pub fn with_context_switch_overhead(mut self, overhead: i64) -> Self {
        self.context_switch_overhead = overhead;
        self
    }

    /// Sets the process limit.
    pub fn with_process_limit(mut self, limit: usize) -> Self {
        self.process_limit = Some(limit);
        self
    }

    /// Enables or disables strict validation.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Runs simulations according to a [`SimulationConfig`].
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{SimulationConfig, Simulator};
///
/// let simulator = Simulator::new(SimulationConfig::round_robin(2));
/// let result = simulator
///     .run(vec![Process::new(1, 0, 5), Process::new(2, 0, 3)])
///     .unwrap();
/// assert_eq!(result.total_time, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Schedules the processes and computes metrics.
    ///
    /// # Errors
    /// - [`SimulationError::ProcessLimitExceeded`] if the list is over the limit.
    /// - [`SimulationError::Validation`] if strict and any process is malformed.
    /// - [`SimulationError::InvalidQuantum`] for a non-positive RR quantum.
    ///
    /// All checks run before the processes are touched.
    pub fn run(&self, mut processes: Vec<Process>) -> Result<SimulationResult> {
        if let Some(limit) = self.config.process_limit {
            if processes.len() > limit {
                return Err(SimulationError::ProcessLimitExceeded {
                    count: processes.len(),
                    limit,
                });
            }
        }

        if self.config.strict {
            validate_processes(&processes).map_err(SimulationError::Validation)?;
        }

        tracing::debug!(
            policy = self.config.policy.name(),
            processes = processes.len(),
            "starting simulation"
        );

        match self.config.policy {
            Policy::Fcfs => schedule_fcfs(&mut processes),
            Policy::RoundRobin { time_quantum } => {
                schedule_round_robin(&mut processes, time_quantum)?
            }
        }

        Ok(calculate_metrics(
            processes,
            self.config.context_switch_overhead,
        ))
    }
}
