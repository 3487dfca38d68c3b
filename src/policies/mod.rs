//! CPU scheduling policies.
//!
//! Each policy consumes a private [`ProcessTable`], drives its records to
//! completion, and returns the resulting [`GanttChart`].
//!
//! | Policy | Preemptive | Decision points |
//! |--------|-----------|-----------------|
//! | FCFS | no | each completion |
//! | SJF | no | each completion |
//! | Priority | no | each completion |
//! | SRTF | yes | each completion or arrival |
//! | Round Robin | yes | each quantum expiry or completion |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod non_preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::models::{GanttChart, ProcessTable};

/// A scheduling discipline that can be simulated.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Display name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs every process in `table` to completion.
    ///
    /// On return every record is finished and the chart holds the full
    /// CPU timeline.
    fn schedule(&self, table: &mut ProcessTable) -> GanttChart;
}

/// Selector for the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// First come, first served.
    Fcfs,
    /// Shortest job first (non-preemptive).
    Sjf,
    /// Priority (non-preemptive, lower number wins).
    Priority,
    /// Shortest remaining time first (preemptive).
    Srtf,
    /// Round robin with a fixed quantum.
    #[serde(alias = "rr")]
    RoundRobin,
}

impl Policy {
    /// Every policy, in comparison order.
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::Srtf,
        Policy::RoundRobin,
    ];

    /// Human-readable title.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF (Non-preemptive)",
            Policy::Priority => "Priority (Non-preemptive)",
            Policy::Srtf => "SRTF (Preemptive)",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Policy::Priority)
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin)
    }

    /// Builds the engine for this policy. `quantum` is used by round robin
    /// only.
    pub fn scheduler(&self, quantum: i64) -> Box<dyn SchedulingPolicy> {
        match self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(Sjf),
            Policy::Priority => Box::new(PriorityScheduling),
            Policy::Srtf => Box::new(Srtf),
            Policy::RoundRobin => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling policy '{}'", self.0)
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "priority" => Ok(Policy::Priority),
            "srtf" => Ok(Policy::Srtf),
            "rr" | "round-robin" | "round_robin" => Ok(Policy::RoundRobin),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("FCFS".parse::<Policy>(), Ok(Policy::Fcfs));
        assert_eq!(" rr ".parse::<Policy>(), Ok(Policy::RoundRobin));
        assert_eq!("Round-Robin".parse::<Policy>(), Ok(Policy::RoundRobin));
        assert!("lottery".parse::<Policy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Policy::RoundRobin).unwrap(),
            "\"round-robin\""
        );
        let p: Policy = serde_json::from_str("\"rr\"").unwrap();
        assert_eq!(p, Policy::RoundRobin);
        let p: Policy = serde_json::from_str("\"srtf\"").unwrap();
        assert_eq!(p, Policy::Srtf);
    }

    #[test]
    fn test_flags() {
        assert!(Policy::Priority.requires_priority());
        assert!(!Policy::Sjf.requires_priority());
        assert!(Policy::Srtf.is_preemptive());
        assert!(!Policy::Fcfs.is_preemptive());
    }

    #[test]
    fn test_scheduler_names() {
        let names: Vec<&str> = Policy::ALL.iter().map(|p| p.scheduler(2).name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "PRIORITY", "SRTF", "RR"]);
    }
}
