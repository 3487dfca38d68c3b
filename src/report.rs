//! Plain-text rendering of simulation outcomes.
//!
//! Rendering only reads outcomes; it never changes a schedule.
//!
//! ```text
//! ==== FCFS ====
//! Gantt Chart:
//! | P1 (0 - 5) | P2 (5 - 8) | P3 (8 - 16) |
//!
//! PID    Arrival  Burst  Priority  Completion  Turnaround  Waiting
//! ...
//! Average Turnaround = 8.67
//! Average Waiting    = 3.33
//! ```

use std::fmt::{self, Write};

use crate::models::GanttChart;
use crate::simulation::SimulationOutcome;

/// Column widths of the per-process table.
const TABLE_COLUMNS: [usize; 7] = [6, 7, 6, 9, 11, 11, 8];
/// Column widths of the policy comparison.
const COMPARISON_COLUMNS: [usize; 7] = [26, 10, 8, 11, 9, 9, 9];

/// Dashed rule as wide as a row of single-space separated columns.
fn rule(columns: &[usize]) -> String {
    let width = columns.iter().sum::<usize>() + columns.len().saturating_sub(1);
    "-".repeat(width)
}

/// Renders the chart as a single strip: `| P1 (0 - 5) | P2 (5 - 8) |`.
pub fn render_gantt(gantt: &GanttChart) -> String {
    let mut out = String::new();
    for e in gantt.entries() {
        let _ = write!(out, "| P{} ({} - {}) ", e.pid, e.start, e.end);
    }
    out.push('|');
    out
}

/// Renders the per-process table followed by the averages.
pub fn render_table(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();
    let separator = rule(&TABLE_COLUMNS);

    let _ = writeln!(
        out,
        "{:<6} {:>7} {:>6} {:>9} {:>11} {:>11} {:>8}",
        "PID", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting"
    );
    let _ = writeln!(out, "{separator}");
    for r in &outcome.metrics.results {
        let priority = r
            .priority
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<6} {:>7} {:>6} {:>9} {:>11} {:>11} {:>8}",
            format!("P{}", r.pid),
            r.arrival,
            r.burst,
            priority,
            r.completion,
            r.turnaround,
            r.waiting
        );
    }
    let _ = writeln!(out, "{separator}");
    let _ = writeln!(out, "Average Turnaround = {:.2}", outcome.metrics.avg_turnaround);
    let _ = write!(out, "Average Waiting    = {:.2}", outcome.metrics.avg_waiting);
    out
}

/// Renders one summary line per outcome, for comparing policies.
pub fn render_comparison(outcomes: &[SimulationOutcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26} {:>10} {:>8} {:>11} {:>9} {:>9} {:>9}",
        "Policy", "Preemptive", "Waiting", "Turnaround", "Response", "Makespan", "Switches"
    );
    let _ = writeln!(out, "{}", rule(&COMPARISON_COLUMNS));
    for o in outcomes {
        let m = &o.metrics;
        let _ = writeln!(
            out,
            "{:<26} {:>10} {:>8.2} {:>11.2} {:>9.2} {:>9} {:>9}",
            o.policy.name(),
            if o.policy.is_preemptive() { "yes" } else { "no" },
            m.avg_waiting,
            m.avg_turnaround,
            m.avg_response,
            m.makespan,
            m.context_switches
        );
    }
    out
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== {} ====", self.policy)?;
        writeln!(f, "Gantt Chart:")?;
        writeln!(f, "{}", render_gantt(&self.gantt))?;
        writeln!(f)?;
        write!(f, "{}", render_table(self))
    }
}
