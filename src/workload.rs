//! Random workload generation.
//!
//! Produces process lists for comparing policies on many inputs. Pass a
//! seeded RNG (e.g. `SmallRng::seed_from_u64`) to get a reproducible
//! workload.

use rand::Rng;

use crate::models::{Pid, ProcessSpec};

/// Generator of random process lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Latest possible arrival (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (inclusive, at least 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
    /// Priority range (inclusive); `None` = no priorities.
    pub priority_range: Option<(i32, i32)>,
}

impl WorkloadGenerator {
    /// Creates a generator with arrivals in `0..=10`, bursts in `1..=10`
    /// and no priorities.
    pub fn new() -> Self {
        Self {
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            priority_range: None,
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Assigns priorities drawn from `low..=high`.
    pub fn with_priorities(mut self, low: i32, high: i32) -> Self {
        self.priority_range = Some((low.min(high), low.max(high)));
        self
    }

    /// Generates `count` processes with pids `1..=count`.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=count)
            .map(|pid| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                let mut spec = ProcessSpec::new(pid as Pid, arrival, burst);
                if let Some((low, high)) = self.priority_range {
                    spec.priority = Some(rng.random_range(low..=high));
                }
                spec
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
