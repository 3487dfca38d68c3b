//! CPU scheduling domain models.
//!
//! Provides the data types shared by every policy: the process input and
//! working record, the per-run process table, and the Gantt timeline.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated |
//! |------|---------|---------|
//! | ProcessSpec | by the caller | never |
//! | Process | once per policy run | as simulated time advances |
//! | GanttChart | once per policy run | append-only |

mod gantt;
mod process;

pub use gantt::{GanttChart, GanttEntry};
pub use process::{Pid, Process, ProcessSpec, ProcessTable};
