//! Schedule performance metrics.
//!
//! Derives per-process and schedule-wide figures from the final process
//! records and the Gantt chart of one simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | latest completion |
//! | CPU Utilization | busy time / (makespan - earliest arrival) |
//! | Throughput | processes / (makespan - earliest arrival) |
//! | Context Switches | pid changes between consecutive chart entries |
//!
//! Averages are taken over all finished processes and are `0.0` when there
//! are none.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{GanttChart, Pid, Process};

/// Final figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival: i64,
    /// Original service time.
    pub burst: i64,
    /// Scheduling priority, if any.
    pub priority: Option<i32>,
    /// First dispatch time.
    pub start: i64,
    /// Completion time.
    pub completion: i64,
    /// completion - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// start - arrival.
    pub response: i64,
}

impl ProcessResult {
    /// Builds the result for a finished process. Returns `None` while the
    /// process still owes service.
    pub fn from_process(process: &Process) -> Option<Self> {
        let completion = process.completion?;
        let start = process.start?;
        let turnaround = completion - process.arrival;
        Some(Self {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start,
            completion,
            turnaround,
            waiting: turnaround - process.burst,
            response: start - process.arrival,
        })
    }
}

/// Schedule-wide performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Per-process results in pid order.
    pub results: Vec<ProcessResult>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total time the CPU was busy.
    pub busy_time: i64,
    /// Fraction of the active horizon the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the active horizon.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from the final process records and the chart.
    ///
    /// # Arguments
    /// * `processes` - Records after the policy ran, in pid order.
    /// * `gantt` - The chart the policy produced.
    pub fn calculate(processes: &[Process], gantt: &GanttChart) -> Self {
        let results: Vec<ProcessResult> = processes
            .iter()
            .filter_map(ProcessResult::from_process)
            .collect();

        let makespan = results.iter().map(|r| r.completion).max().unwrap_or(0);
        let busy_time = gantt.busy_time();
        let horizon = processes
            .iter()
            .map(|p| p.arrival)
            .min()
            .map(|first| makespan - first)
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if horizon <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / horizon as f64,
                results.len() as f64 / horizon as f64,
            )
        };

        Self {
            avg_turnaround: mean(results.iter().map(|r| r.turnaround)),
            avg_waiting: mean(results.iter().map(|r| r.waiting)),
            avg_response: mean(results.iter().map(|r| r.response)),
            results,
            makespan,
            busy_time,
            cpu_utilization,
            throughput,
            context_switches: gantt.context_switches(),
        }
    }

    /// Number of processes with results.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }

    /// Result for one process.
    pub fn result_for(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Sum of waiting times.
    pub fn total_waiting(&self) -> i128 {
        self.results.iter().map(|r| i128::from(r.waiting)).sum()
    }

    /// Sum of turnaround times.
    pub fn total_turnaround(&self) -> i128 {
        self.results.iter().map(|r| i128::from(r.turnaround)).sum()
    }
}

// Summed as i128: totals of in-range i64 values can exceed i64::MAX.
fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
