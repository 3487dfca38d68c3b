//! Shortest job first (non-preemptive).
//!
//! At every completion the arrived process with the smallest burst is
//! dispatched and runs to completion. Ties go to the earlier arrival, then
//! the lower pid.

use super::non_preemptive::run_to_completion;
use super::SchedulingPolicy;
use crate::dispatching::{rules, Ranking};
use crate::models::{GanttChart, ProcessTable};

/// Non-preemptive shortest job first scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, table: &mut ProcessTable) -> GanttChart {
        run_to_completion(&Ranking::new(rules::ShortestBurst), table)
    }
}
