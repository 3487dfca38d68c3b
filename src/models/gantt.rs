//! Gantt chart (CPU timeline) model.
//!
//! A Gantt chart is the ordered sequence of CPU-occupancy intervals a
//! policy produced. Gaps between consecutive entries are idle CPU time;
//! idle time itself is never recorded as an entry.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Pid;

/// One interval of CPU occupancy: `pid` ran during `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Process that held the CPU.
    pub pid: Pid,
    /// Interval start (inclusive).
    pub start: i64,
    /// Interval end (exclusive).
    pub end: i64,
}

impl GanttEntry {
    /// Creates a new entry.
    pub fn new(pid: Pid, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An append-only CPU timeline for a single simulated CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    entries: Vec<GanttEntry>,
}

impl GanttChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval as its own entry.
    pub fn push(&mut self, pid: Pid, start: i64, end: i64) {
        debug_assert!(end > start, "empty interval for P{pid} at {start}");
        debug_assert!(
            self.entries.last().map_or(true, |last| last.end <= start),
            "interval for P{pid} at {start} overlaps the previous entry"
        );
        self.entries.push(GanttEntry::new(pid, start, end));
    }

    /// Appends an interval, merging it into the last entry when that entry
    /// belongs to the same process and ends exactly at `start`.
    pub fn extend_or_push(&mut self, pid: Pid, start: i64, end: i64) {
        match self.entries.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.push(pid, start, end),
        }
    }

    /// All entries in start order.
    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest end time (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(GanttEntry::duration).sum()
    }

    /// Entries belonging to one process.
    pub fn entries_for(&self, pid: Pid) -> Vec<&GanttEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Total CPU time delivered to one process.
    pub fn service_time_for(&self, pid: Pid) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(GanttEntry::duration)
            .sum()
    }

    /// Idle intervals `(start, end)` between consecutive entries.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        self.entries
            .windows(2)
            .filter(|w| w[1].start > w[0].end)
            .map(|w| (w[0].end, w[1].start))
            .collect()
    }

    /// Number of times the CPU passed from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart() -> GanttChart {
        let mut g = GanttChart::new();
        g.push(1, 0, 3);
        g.push(2, 3, 5);
        g.push(1, 7, 9);
        g
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let g = sample_chart();
        assert_eq!(g.makespan(), 9);
        assert_eq!(g.busy_time(), 7);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_idle_gaps() {
        let g = sample_chart();
        assert_eq!(g.idle_gaps(), vec![(5, 7)]);
    }

    #[test]
    fn test_service_time_for() {
        let g = sample_chart();
        assert_eq!(g.service_time_for(1), 5);
        assert_eq!(g.service_time_for(2), 2);
        assert_eq!(g.service_time_for(42), 0);
        assert_eq!(g.entries_for(1).len(), 2);
    }

    #[test]
    fn test_extend_merges_contiguous_same_pid() {
        let mut g = GanttChart::new();
        g.extend_or_push(1, 0, 1);
        g.extend_or_push(1, 1, 2);
        g.extend_or_push(2, 2, 4);
        g.extend_or_push(1, 4, 5);
        assert_eq!(
            g.entries(),
            &[
                GanttEntry::new(1, 0, 2),
                GanttEntry::new(2, 2, 4),
                GanttEntry::new(1, 4, 5),
            ]
        );
    }

    #[test]
    fn test_extend_does_not_merge_across_idle() {
        let mut g = GanttChart::new();
        g.extend_or_push(1, 0, 2);
        g.extend_or_push(1, 4, 6);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_push_never_merges() {
        let mut g = GanttChart::new();
        g.push(1, 0, 1);
        g.push(1, 1, 2);
        assert_eq!(g.len(), 2);
        assert_eq!(g.context_switches(), 0);
    }

    #[test]
    fn test_context_switches() {
        let g = sample_chart();
        assert_eq!(g.context_switches(), 2);
    }

    #[test]
    fn test_empty_chart() {
        let g = GanttChart::new();
        assert!(g.is_empty());
        assert_eq!(g.makespan(), 0);
        assert_eq!(g.busy_time(), 0);
        assert!(g.idle_gaps().is_empty());
    }
}
