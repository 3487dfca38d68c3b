//! Shortest remaining time first (preemptive SJF).
//!
//! # Algorithm
//!
//! The process with the least remaining service among those that have
//! arrived holds the CPU. Between two arrivals the running process only
//! gets shorter, so the choice can only change when a process arrives or
//! completes. The simulation therefore jumps from one such boundary to the
//! next instead of stepping a single time unit at a time; the resulting
//! chart is the same as a unit-step simulation with contiguous runs of the
//! same process merged.
//!
//! # Complexity
//! O(n^2): at most 2n decision points, each an O(n) scan.

use log::{debug, trace};

use super::SchedulingPolicy;
use crate::dispatching::{rules, Ranking, Selection};
use crate::models::{GanttChart, ProcessTable};

/// Preemptive shortest remaining time first scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, table: &mut ProcessTable) -> GanttChart {
        let ranking = Ranking::new(rules::ShortestRemaining);
        let mut gantt = GanttChart::new();
        let mut t: i64 = 0;
        let mut running: Option<usize> = None;

        loop {
            match ranking.select(table, t) {
                Selection::Dispatch(index) => {
                    if let Some(prev) = running.filter(|&prev| prev != index) {
                        if !table[prev].is_finished() {
                            trace!(
                                "SRTF: P{} preempted by P{} at {}",
                                table[prev].pid,
                                table[index].pid,
                                t
                            );
                        }
                    }

                    // Run until completion or the next arrival, whichever is first.
                    let next_arrival = table.next_arrival_after(t);
                    let process = table.get_mut(index);
                    let slice = match next_arrival {
                        Some(next) => process.remaining.min(next - t),
                        None => process.remaining,
                    };
                    let end = process.run(t, slice);
                    gantt.extend_or_push(process.pid, t, end);
                    if process.is_finished() {
                        trace!("SRTF: P{} completes at {}", process.pid, end);
                    }

                    running = Some(index);
                    t = end;
                }
                Selection::IdleUntil(next) => {
                    // The last run segment is already closed in the chart;
                    // an idle jump never extends it.
                    debug!("SRTF: CPU idle {}..{}", t, next);
                    running = None;
                    t = next;
                }
                Selection::Finished => break,
            }
        }

        gantt
    }
}
