//! Shared driver for run-to-completion policies.

use log::{debug, trace};

use crate::dispatching::{Ranking, RankingRule, Selection};
use crate::models::{GanttChart, ProcessTable};

/// Repeatedly selects the best eligible process and runs its whole burst.
///
/// Produces exactly one Gantt entry per process. Idle gaps produce no
/// entry; the clock simply jumps to the next arrival.
pub(super) fn run_to_completion<R: RankingRule>(
    ranking: &Ranking<R>,
    table: &mut ProcessTable,
) -> GanttChart {
    let mut gantt = GanttChart::new();
    let mut t: i64 = 0;

    loop {
        match ranking.select(table, t) {
            Selection::Dispatch(index) => {
                let process = table.get_mut(index);
                let start = t.max(process.arrival);
                let burst = process.remaining;
                let end = process.run(start, burst);
                trace!(
                    "{}: P{} runs {}..{}",
                    ranking.rule().name(),
                    process.pid,
                    start,
                    end
                );
                gantt.push(process.pid, start, end);
                t = end;
            }
            Selection::IdleUntil(next) => {
                debug!("{}: CPU idle {}..{}", ranking.rule().name(), t, next);
                t = next;
            }
            Selection::Finished => break,
        }
    }

    gantt
}
