//! Deterministic ranking and selection.
//!
//! Wraps a [`RankingRule`] with the fixed tie-break chain
//! `(key, arrival, pid)`, which is a total order because pids are unique.

use std::cmp::Ordering;

use super::RankingRule;
use crate::models::{Process, ProcessTable};

/// Outcome of one decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Run the process at this table index.
    Dispatch(usize),
    /// Nothing has arrived; the CPU idles until this time.
    IdleUntil(i64),
    /// Every process has finished.
    Finished,
}

/// A ranking rule with the arrival/pid tie-break chain applied.
#[derive(Debug, Clone)]
pub struct Ranking<R> {
    rule: R,
}

impl<R: RankingRule> Ranking<R> {
    /// Wraps a rule.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The wrapped rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Compares two processes: key, then arrival, then pid.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        self.rule
            .key(a)
            .cmp(&self.rule.key(b))
            .then_with(|| a.arrival.cmp(&b.arrival))
            .then_with(|| a.pid.cmp(&b.pid))
    }

    /// Decides what the CPU does at time `t`.
    ///
    /// Only unfinished processes with `arrival <= t` are eligible. When none
    /// are, the CPU idles until the earliest arrival among unfinished ones.
    pub fn select(&self, table: &ProcessTable, t: i64) -> Selection {
        let best = table
            .processes()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finished() && p.has_arrived(t))
            .min_by(|(_, a), (_, b)| self.compare(a, b))
            .map(|(i, _)| i);

        match best {
            Some(index) => Selection::Dispatch(index),
            None => match table.next_unfinished_arrival() {
                Some(next) => Selection::IdleUntil(next),
                None => Selection::Finished,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessSpec;

    fn table(specs: &[(u32, i64, i64)]) -> ProcessTable {
        let specs: Vec<ProcessSpec> = specs
            .iter()
            .map(|&(pid, arrival, burst)| ProcessSpec::new(pid, arrival, burst))
            .collect();
        ProcessTable::from_specs(&specs)
    }

    #[test]
    fn test_select_lowest_key() {
        let t = table(&[(1, 0, 7), (2, 0, 3), (3, 0, 5)]);
        let ranking = Ranking::new(rules::ShortestBurst);
        assert_eq!(ranking.select(&t, 0), Selection::Dispatch(1));
    }

    #[test]
    fn test_tie_broken_by_arrival_then_pid() {
        // Equal bursts: P2 arrived earlier than P1, P3 ties P2 on arrival.
        let t = table(&[(1, 2, 4), (2, 1, 4), (3, 1, 4)]);
        let ranking = Ranking::new(rules::ShortestBurst);
        assert_eq!(ranking.select(&t, 5), Selection::Dispatch(1));
    }

    #[test]
    fn test_pid_tie_break_independent_of_input_order() {
        let t = table(&[(9, 0, 2), (4, 0, 2)]);
        let ranking = Ranking::new(rules::ArrivalOrder);
        let Selection::Dispatch(i) = ranking.select(&t, 0) else {
            panic!("expected a dispatch");
        };
        assert_eq!(t[i].pid, 4);
    }

    #[test]
    fn test_not_arrived_is_ineligible() {
        let t = table(&[(1, 0, 9), (2, 3, 1)]);
        let ranking = Ranking::new(rules::ShortestBurst);
        assert_eq!(ranking.select(&t, 2), Selection::Dispatch(0));
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let t = table(&[(1, 4, 2), (2, 6, 1)]);
        let ranking = Ranking::new(rules::ArrivalOrder);
        assert_eq!(ranking.select(&t, 0), Selection::IdleUntil(4));
    }

    #[test]
    fn test_finished() {
        let mut t = table(&[(1, 0, 2)]);
        t.get_mut(0).run(0, 2);
        let ranking = Ranking::new(rules::ArrivalOrder);
        assert_eq!(ranking.select(&t, 2), Selection::Finished);
    }
}
