//! Ranking rules and the shared selection primitive.
//!
//! Every policy except round-robin makes the same decision at each
//! decision point: among the unfinished processes that have arrived, pick
//! the one with the lowest ranking key, breaking ties by earlier arrival and
//! then lower pid. If nothing has arrived yet, the CPU idles until the next
//! arrival.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, Ranking, Selection};
//! use u_cpusched::models::{ProcessSpec, ProcessTable};
//!
//! let table = ProcessTable::from_specs(&[
//!     ProcessSpec::new(1, 0, 7),
//!     ProcessSpec::new(2, 0, 3),
//! ]);
//! let ranking = Ranking::new(rules::ShortestBurst);
//! assert_eq!(ranking.select(&table, 0), Selection::Dispatch(1));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{Ranking, Selection};

use crate::models::Process;
use std::fmt::Debug;

/// Key returned by a ranking rule.
///
/// Lower keys = higher precedence (selected first).
pub type RankKey = i64;

/// A rule that ranks eligible processes.
///
/// # Key Convention
/// **Lower key = selected first.** Ties on the key are resolved by
/// [`Ranking`], not by the rule.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Ranking key of a process at the current decision point.
    fn key(&self, process: &Process) -> RankKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
