//! Process workloads: text encoding and synthetic generation.
//!
//! # Text format
//!
//! One process per line, three whitespace-separated integers:
//!
//! ```text
//! ID ArrivalTime BurstTime
//! 1 0 80
//! 2 3 17
//! ```
//!
//! Blank lines are ignored. Values are parsed but not validated; see
//! [`crate::validation`] for that.
//!
//! # Generation
//!
//! [`WorkloadGenerator`] produces sequential ids starting at 1,
//! non-decreasing arrival times, and uniformly distributed bursts.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Process;

/// Field names in line order.
const FIELDS: [&str; 3] = ["id", "arrival_time", "burst_time"];

/// Errors from [`parse_processes`]. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line has fewer than three values.
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    /// A value is not an integer of the expected range.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A line has more than three values.
    #[error("line {line}: unexpected trailing data")]
    TrailingData { line: usize },
}

/// Parses the `ID ArrivalTime BurstTime` text encoding.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::workload::parse_processes;
///
/// let processes = parse_processes("1 0 5\n2 1 3\n").unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].burst_time, 3);
/// assert_eq!(processes[1].remaining_time, 3);
/// ```
pub fn parse_processes(input: &str) -> Result<Vec<Process>, ParseError> {
    let mut processes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let mut parts = raw.split_whitespace();
        let Some(first) = parts.next() else {
            continue;
        };

        let id: u32 = parse_field(first, line, FIELDS[0])?;
        let arrival: i64 = parse_field(
            parts.next().ok_or(ParseError::MissingField {
                line,
                field: FIELDS[1],
            })?,
            line,
            FIELDS[1],
        )?;
        let burst: i64 = parse_field(
            parts.next().ok_or(ParseError::MissingField {
                line,
                field: FIELDS[2],
            })?,
            line,
            FIELDS[2],
        )?;

        if parts.next().is_some() {
            return Err(ParseError::TrailingData { line });
        }

        processes.push(Process::new(id, arrival, burst));
    }

    Ok(processes)
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    line: usize,
    field: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

/// Renders processes in the text encoding (input fields only).
pub fn format_processes(processes: &[Process]) -> String {
    processes
        .iter()
        .map(|p| format!("{} {} {}\n", p.id, p.arrival_time, p.burst_time))
        .collect()
}

/// Synthetic workload generator.
///
/// Defaults: 50 processes, arrival gaps in `0..=10`, bursts in `1..=100`.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new().with_count(5).generate_seeded(42);
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes[0].id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadGenerator {
    /// Number of processes. Ids run from 1 to `count`.
    pub count: u32,
    /// Largest gap between consecutive arrivals.
    pub max_arrival_gap: i64,
    /// Largest burst time (bursts start at 1).
    pub max_burst: i64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 50,
            max_arrival_gap: 10,
            max_burst: 100,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the largest arrival gap (clamped to >= 0).
    pub fn with_max_arrival_gap(mut self, gap: i64) -> Self {
        self.max_arrival_gap = gap.max(0);
        self
    }

    /// Sets the largest burst time (clamped to >= 1).
    pub fn with_max_burst(mut self, burst: i64) -> Self {
        self.max_burst = burst.max(1);
        self
    }

    /// Generates a workload from the given RNG.
    ///
    /// The first process arrives at t=0.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_gap = self.max_arrival_gap.max(0);
        let max_burst = self.max_burst.max(1);
        let mut arrival: i64 = 0;

        (1..=self.count)
            .map(|id| {
                if id > 1 {
                    arrival = arrival.saturating_add(rng.random_range(0..=max_gap));
                }
                Process::new(id, arrival, rng.random_range(1..=max_burst))
            })
            .collect()
    }

    /// Generates a reproducible workload from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Generates a workload from the thread-local RNG.
    pub fn generate_random(&self) -> Vec<Process> {
        self.generate(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let processes = parse_processes("1 0 80\n2 3 17\n3 3 40").unwrap();
        assert_eq!(processes.len(), 3);
        assert_eq!(processes[0], Process::new(1, 0, 80));
        assert_eq!(processes[2], Process::new(3, 3, 40));
    }

    #[test]
    fn test_parse_whitespace_and_blank_lines() {
        let processes = parse_processes("\n  1\t0   5  \n\n2 1 3\r\n   \n").unwrap();
        assert_eq!(processes, vec![Process::new(1, 0, 5), Process::new(2, 1, 3)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_processes("").unwrap().is_empty());
        assert!(parse_processes("\n \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_processes("1 0 5\n2 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingField {
                line: 2,
                field: "burst_time"
            }
        );
        assert_eq!(err.to_string(), "line 2: missing burst_time");
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_processes("1 zero 5").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 1,
                field: "arrival_time",
                value: "zero".into()
            }
        );

        // Negative ids do not fit u32
        assert!(matches!(
            parse_processes("-1 0 5"),
            Err(ParseError::InvalidNumber { field: "id", .. })
        ));
    }

    #[test]
    fn test_parse_negative_times_accepted() {
        // Range checks belong to validation
        let processes = parse_processes("1 -2 -3").unwrap();
        assert_eq!(processes[0].arrival_time, -2);
        assert_eq!(processes[0].burst_time, -3);
    }

    #[test]
    fn test_parse_trailing_data() {
        assert_eq!(
            parse_processes("1 0 5 9").unwrap_err(),
            ParseError::TrailingData { line: 1 }
        );
    }

    #[test]
    fn test_format_then_parse() {
        let processes = vec![Process::new(1, 0, 80), Process::new(2, 3, 17)];
        let text = format_processes(&processes);
        assert_eq!(text, "1 0 80\n2 3 17\n");
        assert_eq!(parse_processes(&text).unwrap(), processes);
    }

    #[test]
    fn test_generator_defaults() {
        let processes = WorkloadGenerator::new().generate_seeded(7);
        assert_eq!(processes.len(), 50);

        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((1..=100).contains(&p.burst_time));
            assert_eq!(p.remaining_time, p.burst_time);
        }
        assert_eq!(processes[0].arrival_time, 0);
        assert!(processes
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time
                && w[1].arrival_time - w[0].arrival_time <= 10));
    }

    #[test]
    fn test_generator_seeded_is_reproducible() {
        let gen = WorkloadGenerator::new().with_count(20);
        assert_eq!(gen.generate_seeded(99), gen.generate_seeded(99));
    }

    #[test]
    fn test_generator_settings() {
        let processes = WorkloadGenerator::new()
            .with_count(30)
            .with_max_arrival_gap(0)
            .with_max_burst(3)
            .generate_random();

        assert_eq!(processes.len(), 30);
        assert!(processes.iter().all(|p| p.arrival_time == 0));
        assert!(processes.iter().all(|p| (1..=3).contains(&p.burst_time)));
    }

    #[test]
    fn test_generator_clamps_settings() {
        let gen = WorkloadGenerator::new()
            .with_max_arrival_gap(-5)
            .with_max_burst(0);
        assert_eq!(gen.max_arrival_gap, 0);
        assert_eq!(gen.max_burst, 1);
    }

    #[test]
    fn test_generator_count_beyond_id_range_rejected() {
        let err = serde_json::from_str::<WorkloadGenerator>(r#"{"count": 4294967296}"#);
        assert!(err.is_err());

        let gen: WorkloadGenerator = serde_json::from_str(r#"{"count": 4294967295}"#).unwrap();
        assert_eq!(gen.count, u32::MAX);
        assert_eq!(gen.max_burst, 100);
    }

    #[test]
    fn test_generator_empty() {
        assert!(WorkloadGenerator::new()
            .with_count(0)
            .generate_seeded(1)
            .is_empty());
    }
}
