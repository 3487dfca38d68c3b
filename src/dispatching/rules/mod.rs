//! Built-in ranking rules.
//!
//! | Rule | Key | Policy |
//! |------|-----|--------|
//! | `ArrivalOrder` | arrival | FCFS |
//! | `ShortestBurst` | burst | SJF |
//! | `HighestPriority` | priority | Priority |
//! | `ShortestRemaining` | remaining | SRTF |
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{RankKey, RankingRule};
use crate::models::Process;

/// First come, first served.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl RankingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

/// Shortest total service time.
///
/// Minimizes mean waiting time among non-preemptive disciplines when all
/// processes are available together.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl RankingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority number first.
///
/// Processes without a priority rank last.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl RankingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.priority.map(RankKey::from).unwrap_or(RankKey::MAX)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}

/// Shortest remaining service time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl RankingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process) -> RankKey {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn proc(pid: u32, arrival: i64, burst: i64, priority: Option<i32>) -> Process {
        let mut spec = ProcessSpec::new(pid, arrival, burst);
        spec.priority = priority;
        Process::from_spec(&spec)
    }

    #[test]
    fn test_arrival_order_key() {
        assert_eq!(ArrivalOrder.key(&proc(1, 7, 3, None)), 7);
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let mut p = proc(1, 0, 9, None);
        p.run(0, 4);
        assert_eq!(ShortestBurst.key(&p), 9);
        assert_eq!(ShortestRemaining.key(&p), 5);
    }

    #[test]
    fn test_priority_missing_ranks_last() {
        assert_eq!(HighestPriority.key(&proc(1, 0, 1, Some(-3))), -3);
        assert_eq!(HighestPriority.key(&proc(1, 0, 1, None)), RankKey::MAX);
    }

    #[test]
    fn test_names() {
        assert_eq!(ArrivalOrder.name(), "FCFS");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time First");
    }
}
