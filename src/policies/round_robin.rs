//! Round robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival and admit everything that
//!    has arrived by then.
//! 2. Pop the head of the ready queue and run it for
//!    `min(remaining, quantum)`, emitting one Gantt entry.
//! 3. Admit every process that arrived by the new clock value, in pid
//!    order.
//! 4. Requeue the process that just ran if it is not finished.
//! 5. If the queue runs dry, idle to the next arrival and admit again.
//!
//! Step 3 happens before step 4: a process arriving exactly when a quantum
//! expires is queued ahead of the preempted process.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};

use super::SchedulingPolicy;
use crate::models::{GanttChart, ProcessTable};

/// Round robin scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a scheduler. A non-positive quantum is raised to 1.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// The time slice granted per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, table: &mut ProcessTable) -> GanttChart {
        let mut gantt = GanttChart::new();
        let Some(mut t) = table.earliest_arrival() else {
            return gantt;
        };

        let mut ready: VecDeque<usize> = VecDeque::with_capacity(table.len());
        let mut admitted = vec![false; table.len()];
        let mut remaining_count = table.len();

        admit_arrivals(table, t, &mut admitted, &mut ready);

        while remaining_count > 0 {
            let Some(index) = ready.pop_front() else {
                let Some(next) = table.next_arrival_after(t) else {
                    break;
                };
                debug!("RR: CPU idle {}..{}", t, next);
                t = next;
                admit_arrivals(table, t, &mut admitted, &mut ready);
                continue;
            };

            let process = table.get_mut(index);
            let slice = process.remaining.min(self.quantum);
            let end = process.run(t, slice);
            let (pid, finished) = (process.pid, process.is_finished());
            trace!("RR: P{} runs {}..{}", pid, t, end);
            gantt.push(pid, t, end);
            t = end;

            admit_arrivals(table, t, &mut admitted, &mut ready);

            if finished {
                remaining_count -= 1;
            } else {
                ready.push_back(index);
            }
        }

        gantt
    }
}

/// Queues, in table (pid) order, every unfinished process that has arrived
/// by `t` and has not been admitted before.
fn admit_arrivals(
    table: &ProcessTable,
    t: i64,
    admitted: &mut [bool],
    ready: &mut VecDeque<usize>,
) {
    for (index, process) in table.processes().iter().enumerate() {
        if !admitted[index] && !process.is_finished() && process.has_arrived(t) {
            admitted[index] = true;
            ready.push_back(index);
        }
    }
}
