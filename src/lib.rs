//! CPU scheduling simulator.
//!
//! Given a list of processes (arrival, burst, optional priority) and a
//! scheduling policy, computes the CPU timeline (Gantt chart) and the
//! per-process completion, turnaround and waiting times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `ProcessTable`,
//!   `GanttChart`, `GanttEntry`
//! - **`dispatching`**: Ranking rules and the shared "pick the best arrived
//!   process or idle" selection step
//! - **`policies`**: FCFS, SJF, Priority, SRTF and Round Robin engines
//! - **`metrics`**: Turnaround, waiting, response and schedule-wide figures
//! - **`validation`**: Input integrity checks (duplicate pids, bursts, priorities)
//! - **`simulation`**: `run` / `compare_all` entry points and configuration
//! - **`report`**: Plain-text Gantt strips and result tables
//! - **`workload`**: Seeded random process lists
//!
//! # Determinism
//!
//! Simulations are single-threaded and hold no global state. Ties between
//! equally ranked processes are broken by earlier arrival, then lower pid,
//! so the same input always produces the same schedule.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod report;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use metrics::{ProcessResult, ScheduleMetrics};
pub use models::{GanttChart, GanttEntry, Pid, ProcessSpec};
pub use policies::Policy;
pub use simulation::{compare_all, run, SimulationOutcome, SimulationParams, SimulationRequest};
pub use validation::{ValidationError, ValidationErrorKind};
