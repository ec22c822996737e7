//! Simulation domain models.
//!
//! Provides the data types exchanged with the scheduling engine.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One unit of CPU work, input and timed output |
//! | `SimulationResult` | Makespan, mean metrics, efficiency, timed processes |

mod process;
mod result;

pub use process::Process;
pub use result::SimulationResult;
