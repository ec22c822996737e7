//! CPU scheduling simulator.
//!
//! Simulates a batch of processes on a single CPU under First-Come-First-Served
//! or Round Robin dispatching and reports turnaround, waiting and response
//! times together with CPU efficiency.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `SimulationResult`
//! - **`scheduler`**: FCFS and Round Robin engines, metrics, `Simulator`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative times)
//! - **`workload`**: `ID ArrivalTime BurstTime` text encoding and synthetic workloads
//! - **`error`**: `SimulationError`
//!
//! # Quick start
//!
//! ```
//! use cpu_sched_sim::scheduler::{run_fcfs, run_rr};
//! use cpu_sched_sim::workload::parse_processes;
//!
//! let processes = parse_processes("1 0 5\n2 0 3").unwrap();
//!
//! let fcfs = run_fcfs(processes.clone());
//! assert_eq!(fcfs.total_time, 8);
//!
//! let rr = run_rr(processes, 2).unwrap();
//! assert_eq!(format!("{:.2}", rr.cpu_efficiency), "72.73");
//! ```
//!
//! # Logging
//!
//! Engine progress is emitted through `tracing` (`debug` per run, `trace`
//! per dispatch). No subscriber is installed by this crate.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
