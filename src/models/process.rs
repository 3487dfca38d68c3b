//! Process model.
//!
//! A process is the unit of CPU work being scheduled. The caller supplies
//! a [`ProcessSpec`] (the immutable input); each simulation run works on its
//! own [`ProcessTable`] of [`Process`] records that carry the mutable state.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type Pid = u32;

/// Input description of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier (display and tie-break ordering only).
    pub pid: Pid,
    /// Time at which the process becomes eligible for scheduling.
    pub arrival: i64,
    /// Total CPU service time required.
    pub burst: i64,
    /// Scheduling priority (lower value = higher precedence).
    #[serde(default)]
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a process without a priority.
    pub fn new(pid: Pid, arrival: i64, burst: i64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A process record with simulation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival: i64,
    /// Original service time. Never modified.
    pub burst: i64,
    /// Scheduling priority.
    pub priority: Option<i32>,
    /// Service time still owed. Only preemptive policies decrement it
    /// partially; non-preemptive ones drain it in one dispatch.
    pub remaining: i64,
    /// Time of the first dispatch. Set once and never moved by later
    /// dispatches; the start of each run segment is recorded in the
    /// [`GanttChart`](super::GanttChart) instead.
    pub start: Option<i64>,
    /// Time the last unit of service finished.
    pub completion: Option<i64>,
}

impl Process {
    /// Creates a fresh, undispatched record from its input description.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid,
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.priority,
            remaining: spec.burst,
            start: None,
            completion: None,
        }
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival <= t
    }

    /// Whether all service has been delivered.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Runs the process for `amount` time units starting at `t`.
    ///
    /// Records the first dispatch and, once `remaining` reaches zero,
    /// the completion time. Returns the time at which the run ends.
    pub fn run(&mut self, t: i64, amount: i64) -> i64 {
        debug_assert!(amount > 0 && amount <= self.remaining);
        if self.start.is_none() {
            self.start = Some(t);
        }
        let end = t + amount;
        self.remaining -= amount;
        if self.remaining == 0 {
            self.completion = Some(end);
        }
        end
    }

    /// Turnaround time (completion - arrival), once finished.
    pub fn turnaround(&self) -> Option<i64> {
        self.completion.map(|c| c - self.arrival)
    }

    /// Waiting time (turnaround - burst), once finished.
    pub fn waiting(&self) -> Option<i64> {
        self.turnaround().map(|tat| tat - self.burst)
    }

    /// Response time (first dispatch - arrival), once dispatched.
    pub fn response(&self) -> Option<i64> {
        self.start.map(|s| s - self.arrival)
    }
}

/// The working set of processes for one simulation run.
///
/// Records are held in pid order, so an index is both a stable handle and
/// the admission order for simultaneous arrivals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Builds a fresh table from input descriptions.
    pub fn from_specs(specs: &[ProcessSpec]) -> Self {
        let mut processes: Vec<Process> = specs.iter().map(Process::from_spec).collect();
        processes.sort_by_key(|p| p.pid);
        Self { processes }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// All records in pid order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Mutable access to one record.
    pub fn get_mut(&mut self, index: usize) -> &mut Process {
        &mut self.processes[index]
    }

    /// Whether every process has finished.
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    /// Earliest arrival among all processes.
    pub fn earliest_arrival(&self) -> Option<i64> {
        self.processes.iter().map(|p| p.arrival).min()
    }

    /// Earliest arrival strictly after `t` among unfinished processes.
    pub fn next_arrival_after(&self, t: i64) -> Option<i64> {
        self.processes
            .iter()
            .filter(|p| !p.is_finished() && p.arrival > t)
            .map(|p| p.arrival)
            .min()
    }

    /// Earliest arrival among unfinished processes.
    pub fn next_unfinished_arrival(&self) -> Option<i64> {
        self.processes
            .iter()
            .filter(|p| !p.is_finished())
            .map(|p| p.arrival)
            .min()
    }
}

impl std::ops::Index<usize> for ProcessTable {
    type Output = Process;

    fn index(&self, index: usize) -> &Process {
        &self.processes[index]
    }
}
