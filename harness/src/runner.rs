//! Harness runner: one world, one strategy, one policy → one report.
//!
//! Every call builds a fresh solver, so no closed set, frontier or guard
//! history survives from one run to the next.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → initial_state() → solve()
//!   → outcome digest → policy digest → RunReport
//! ```

use std::fmt;
use std::str::FromStr;

use statespace_search::error::SearchError;
use statespace_search::guard::{FootprintEstimateProbe, MemoryProbe};
use statespace_search::outcome::{sha256_digest, SearchOutcome};
use statespace_search::policy::SearchPolicy;
use statespace_search::strategy::{AStarSearch, BreadthFirstSearch, DepthFirstSearch};

use crate::contract::HarnessWorld;

/// Which strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrategyKind {
    Bfs,
    Dfs,
    AStar,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Bfs, StrategyKind::Dfs, StrategyKind::AStar];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a*" => Ok(Self::AStar),
            other => Err(RunError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Strategy name not recognized.
    UnknownStrategy { name: String },
    /// The policy was rejected before the search started.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy { name } => write!(f, "unknown strategy: {name}"),
            Self::Search(err) => write!(f, "{err}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

fn canon_failed(err: &serde_json::Error) -> RunError {
    RunError::CanonFailed {
        detail: err.to_string(),
    }
}

/// Result of one harness run, bound to its inputs by digest.
#[derive(Debug, Clone)]
pub struct RunReport<A> {
    pub world_id: String,
    pub strategy: StrategyKind,
    /// `sha256:<hex>` of the policy's canonical JSON.
    pub policy_digest: String,
    /// `sha256:<hex>` of the outcome's canonical JSON.
    pub outcome_digest: String,
    pub outcome: SearchOutcome<A>,
}

impl<A: fmt::Display> RunReport<A> {
    /// Canonical JSON value (sorted keys).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "outcome": self.outcome.to_json_value(),
            "outcome_digest": self.outcome_digest,
            "policy_digest": self.policy_digest,
            "strategy": self.strategy.as_str(),
            "world_id": self.world_id,
        })
    }
}

/// Digest of a policy's canonical JSON.
///
/// # Errors
///
/// Returns [`RunError::CanonFailed`] if serialization fails.
pub fn policy_digest(policy: &SearchPolicy) -> Result<String, RunError> {
    let bytes = serde_json::to_vec(&policy.to_json_value()).map_err(|e| canon_failed(&e))?;
    Ok(sha256_digest(&bytes))
}

/// Run `strategy` on `world` from its initial state.
///
/// A* uses the world's own heuristic. Memory is estimated from the search
/// footprint.
///
/// # Errors
///
/// Returns [`RunError::Search`] if `policy` is invalid and
/// [`RunError::CanonFailed`] if a digest cannot be computed. A search that
/// ends without a solution is not an error; see `report.outcome`.
pub fn run<W>(
    world: &W,
    strategy: StrategyKind,
    policy: &SearchPolicy,
) -> Result<RunReport<W::Action>, RunError>
where
    W: HarnessWorld + ?Sized,
{
    let mut probe = match world.state_bytes_hint() {
        Some(bytes) => FootprintEstimateProbe::per_entry(bytes),
        None => FootprintEstimateProbe::for_types::<W::State, W::Action>(),
    };
    run_with_probe(world, strategy, policy, &mut probe)
}

/// Like [`run`], sampling memory through `probe`. DFS ignores the probe.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_probe<W>(
    world: &W,
    strategy: StrategyKind,
    policy: &SearchPolicy,
    probe: &mut dyn MemoryProbe,
) -> Result<RunReport<W::Action>, RunError>
where
    W: HarnessWorld + ?Sized,
{
    let policy_digest = policy_digest(policy)?;
    let initial = world.initial_state();

    tracing::info!(
        world_id = world.world_id(),
        %strategy,
        depth_limit = policy.depth_limit,
        memory_limit_bytes = ?policy.memory_limit_bytes,
        "search run started"
    );

    let outcome = match strategy {
        StrategyKind::Bfs => {
            BreadthFirstSearch::new(policy.clone())?.solve_with_probe(world, initial, probe)
        }
        StrategyKind::Dfs => DepthFirstSearch::new(policy.clone())?.solve(world, initial),
        StrategyKind::AStar => {
            AStarSearch::new(policy.clone(), |state: &W::State| world.heuristic(state))?
                .solve_with_probe(world, initial, probe)
        }
    };

    let outcome_digest = outcome.digest().map_err(|e| canon_failed(&e))?;

    tracing::info!(
        world_id = world.world_id(),
        %strategy,
        status = ?outcome.status(),
        actions = outcome.actions.len(),
        expansions = outcome.stats.expansions,
        %outcome_digest,
        "search run finished"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        strategy,
        policy_digest,
        outcome_digest,
        outcome,
    })
}
