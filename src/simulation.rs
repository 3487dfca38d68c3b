//! Simulation entry points and configuration.
//!
//! A simulation is a pure function of a process list, a policy and its
//! parameters. Every run builds its own [`ProcessTable`], so running several
//! policies over the same input never lets one run observe another's state.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessSpec;
//! use u_cpusched::policies::Policy;
//! use u_cpusched::simulation::{run, SimulationParams};
//!
//! let processes = vec![
//!     ProcessSpec::new(1, 0, 5),
//!     ProcessSpec::new(2, 1, 3),
//!     ProcessSpec::new(3, 2, 8),
//! ];
//! let outcome = run(Policy::Fcfs, &processes, &SimulationParams::default()).unwrap();
//! assert_eq!(outcome.gantt.makespan(), 16);
//! assert!((outcome.metrics.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::metrics::ScheduleMetrics;
use crate::models::{GanttChart, ProcessSpec, ProcessTable};
use crate::policies::Policy;
use crate::validation::{validate_for_policies, ValidationError};

/// Quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 1;

/// Policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Round-robin time slice. Values <= 0 are treated as 1.
    pub quantum: i64,
}

impl SimulationParams {
    /// Creates parameters with the default quantum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// The quantum actually used, raised to 1 if non-positive.
    pub fn effective_quantum(&self) -> i64 {
        if self.quantum <= 0 {
            warn!("quantum {} is not positive, using 1", self.quantum);
            1
        } else {
            self.quantum
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

/// Result of simulating one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// CPU timeline.
    pub gantt: GanttChart,
    /// Per-process results and averages.
    pub metrics: ScheduleMetrics,
}

/// A serializable simulation request.
///
/// When `policy` is omitted, every policy is run for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to run; `None` = all policies.
    #[serde(default)]
    pub policy: Option<Policy>,
    /// Processes to schedule.
    pub processes: Vec<ProcessSpec>,
    /// Policy parameters.
    #[serde(default)]
    pub params: SimulationParams,
}

impl SimulationRequest {
    /// Creates a request that compares all policies.
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self {
            policy: None,
            processes,
            params: SimulationParams::default(),
        }
    }

    /// Restricts the request to one policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Sets the parameters.
    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }

    /// Runs the requested policy, or all of them.
    pub fn run(&self) -> Result<Vec<SimulationOutcome>, Vec<ValidationError>> {
        match self.policy {
            Some(policy) => run(policy, &self.processes, &self.params).map(|o| vec![o]),
            None => compare_all(&self.processes, &self.params),
        }
    }
}

/// Validates the input and simulates one policy.
///
/// # Errors
/// Returns every validation problem found; nothing is simulated then.
pub fn run(
    policy: Policy,
    processes: &[ProcessSpec],
    params: &SimulationParams,
) -> Result<SimulationOutcome, Vec<ValidationError>> {
    validate_for_policies(processes, &[policy])?;
    Ok(simulate(policy, processes, params))
}

/// Validates the input once and simulates every policy in [`Policy::ALL`]
/// order, each over a fresh copy of `processes`.
///
/// # Errors
/// Returns every validation problem found, including missing priorities.
pub fn compare_all(
    processes: &[ProcessSpec],
    params: &SimulationParams,
) -> Result<Vec<SimulationOutcome>, Vec<ValidationError>> {
    validate_for_policies(processes, &Policy::ALL)?;
    Ok(Policy::ALL
        .iter()
        .map(|&policy| simulate(policy, processes, params))
        .collect())
}

fn simulate(policy: Policy, processes: &[ProcessSpec], params: &SimulationParams) -> SimulationOutcome {
    let mut table = ProcessTable::from_specs(processes);
    let quantum = if policy == Policy::RoundRobin {
        params.effective_quantum()
    } else {
        DEFAULT_QUANTUM
    };
    let scheduler = policy.scheduler(quantum);

    debug!("{}: simulating {} processes", scheduler.name(), table.len());
    let gantt = scheduler.schedule(&mut table);
    debug_assert!(table.all_finished(), "{} left unfinished processes", scheduler.name());

    let metrics = ScheduleMetrics::calculate(table.processes(), &gantt);
    debug!(
        "{}: makespan {}, avg waiting {:.2}, avg turnaround {:.2}",
        scheduler.name(),
        metrics.makespan,
        metrics.avg_waiting,
        metrics.avg_turnaround
    );

    SimulationOutcome {
        policy,
        gantt,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn classic() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 0, 5).with_priority(3),
            ProcessSpec::new(2, 1, 3).with_priority(1),
            ProcessSpec::new(3, 2, 8).with_priority(2),
        ]
    }

    #[test]
    fn test_run_fcfs() {
        let outcome = run(Policy::Fcfs, &classic(), &SimulationParams::default()).unwrap();
        assert_eq!(outcome.policy, Policy::Fcfs);
        assert_eq!(outcome.gantt.len(), 3);
        assert_eq!(outcome.metrics.total_waiting(), 10);
    }

    #[test]
    fn test_run_sjf_reference_average() {
        let processes = vec![
            ProcessSpec::new(1, 0, 7),
            ProcessSpec::new(2, 2, 4),
            ProcessSpec::new(3, 4, 1),
            ProcessSpec::new(4, 5, 4),
        ];
        let outcome = run(Policy::Sjf, &processes, &SimulationParams::default()).unwrap();
        assert!((outcome.metrics.avg_waiting - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_run_srtf_reference_average() {
        let processes = vec![
            ProcessSpec::new(1, 0, 8),
            ProcessSpec::new(2, 1, 4),
            ProcessSpec::new(3, 2, 9),
            ProcessSpec::new(4, 3, 5),
        ];
        let outcome = run(Policy::Srtf, &processes, &SimulationParams::default()).unwrap();
        assert!((outcome.metrics.avg_waiting - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_run_priority() {
        let outcome = run(Policy::Priority, &classic(), &SimulationParams::default()).unwrap();
        let order: Vec<u32> = outcome.gantt.entries().iter().map(|e| e.pid).collect();
        // P1 alone at t=0, then P2 (priority 1) before P3 (priority 2).
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_run_rr_uses_quantum() {
        let params = SimulationParams::new().with_quantum(2);
        let outcome = run(Policy::RoundRobin, &classic(), &params).unwrap();
        assert_eq!(outcome.gantt.entries()[0].end, 2);
    }

    #[test]
    fn test_run_rr_coerces_quantum() {
        let zero = SimulationParams::new().with_quantum(0);
        let one = SimulationParams::new().with_quantum(1);
        let a = run(Policy::RoundRobin, &classic(), &zero).unwrap();
        let b = run(Policy::RoundRobin, &classic(), &one).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_empty_input() {
        let outcome = run(Policy::Srtf, &[], &SimulationParams::default()).unwrap();
        assert!(outcome.gantt.is_empty());
        assert_eq!(outcome.metrics.process_count(), 0);
        assert!((outcome.metrics.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let processes = vec![ProcessSpec::new(1, 0, 0)];
        let errors = run(Policy::Fcfs, &processes, &SimulationParams::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_run_rejects_arrival_near_time_limit() {
        let processes = vec![ProcessSpec::new(1, i64::MAX - 1, 5)];
        let errors = run(Policy::Fcfs, &processes, &SimulationParams::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);
    }

    #[test]
    fn test_run_huge_bursts_within_limit() {
        let half = i64::MAX / 2;
        let processes = vec![ProcessSpec::new(1, 0, half), ProcessSpec::new(2, 0, half)];
        let outcome = run(Policy::Sjf, &processes, &SimulationParams::default()).unwrap();
        assert_eq!(outcome.metrics.makespan, 2 * half);
        assert_eq!(outcome.metrics.total_waiting(), i128::from(half));
        assert!(outcome.metrics.avg_turnaround.is_finite());
        assert!(outcome.metrics.avg_turnaround > 0.0);
    }

    #[test]
    fn test_priority_requires_priorities() {
        let processes = vec![ProcessSpec::new(1, 0, 3)];
        assert!(run(Policy::Sjf, &processes, &SimulationParams::default()).is_ok());
        let errors = run(Policy::Priority, &processes, &SimulationParams::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPriority);
    }

    #[test]
    fn test_compare_all_order_and_isolation() {
        let processes = classic();
        let params = SimulationParams::new().with_quantum(2);
        let outcomes = compare_all(&processes, &params).unwrap();
        let policies: Vec<Policy> = outcomes.iter().map(|o| o.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());

        // Each outcome matches an isolated run of the same policy.
        for outcome in &outcomes {
            let single = run(outcome.policy, &processes, &params).unwrap();
            assert_eq!(&single, outcome);
        }
    }

    #[test]
    fn test_run_is_idempotent() {
        let processes = classic();
        let params = SimulationParams::new().with_quantum(1);
        for policy in Policy::ALL {
            let first = run(policy, &processes, &params).unwrap();
            let second = run(policy, &processes, &params).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_request_defaults_from_json() {
        let json = r#"{"processes": [{"pid": 1, "arrival": 0, "burst": 2}]}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.policy, None);
        assert_eq!(request.params.quantum, DEFAULT_QUANTUM);
    }

    #[test]
    fn test_request_single_policy() {
        let request = SimulationRequest::new(classic())
            .with_policy(Policy::Sjf)
            .with_params(SimulationParams::new().with_quantum(3));
        let outcomes = request.run().unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].policy, Policy::Sjf);
    }

    #[test]
    fn test_request_compare_all() {
        let outcomes = SimulationRequest::new(classic()).run().unwrap();
        assert_eq!(outcomes.len(), Policy::ALL.len());
    }
}
