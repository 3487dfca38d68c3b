//! First come, first served.
//!
//! Processes run in arrival order (ties by pid), each for its whole burst.

use super::non_preemptive::run_to_completion;
use super::SchedulingPolicy;
use crate::dispatching::{rules, Ranking};
use crate::models::{GanttChart, ProcessTable};

/// First come, first served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, table: &mut ProcessTable) -> GanttChart {
        run_to_completion(&Ranking::new(rules::ArrivalOrder), table)
    }
}
