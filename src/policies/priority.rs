//! Priority scheduling (non-preemptive).
//!
//! Lower priority number = higher precedence. Ties go to the earlier
//! arrival, then the lower pid.

use super::non_preemptive::run_to_completion;
use super::SchedulingPolicy;
use crate::dispatching::{rules, Ranking};
use crate::models::{GanttChart, ProcessTable};

/// Non-preemptive priority scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl SchedulingPolicy for PriorityScheduling {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, table: &mut ProcessTable) -> GanttChart {
        run_to_completion(&Ranking::new(rules::HighestPriority), table)
    }
}
