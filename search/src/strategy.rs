//! The three search strategies.
//!
//! Each strategy is a thin configuration of [`run_search`]: a frontier, an
//! optional depth limit and an optional resource guard. The closed set,
//! goal test and path reconstruction are shared.
//!
//! | Strategy | Frontier            | Depth limit | Resource guard |
//! |----------|---------------------|-------------|----------------|
//! | BFS      | `FifoFrontier`      | no          | yes            |
//! | DFS      | `LifoFrontier`      | yes         | no             |
//! | A*       | `BestFirstFrontier` | no          | yes            |

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::{BestFirstFrontier, FifoFrontier, LifoFrontier};
use crate::guard::{FootprintEstimateProbe, MemoryProbe, ResourceGuard};
use crate::heuristic::Heuristic;
use crate::outcome::SearchOutcome;
use crate::policy::SearchPolicy;
use crate::search::{run_search, GuardedProbe, SearchLimits};

fn guard_for<'p>(policy: &SearchPolicy, probe: &'p mut dyn MemoryProbe) -> Option<GuardedProbe<'p>> {
    policy.memory_limit_bytes.map(|limit| GuardedProbe {
        guard: ResourceGuard::new(limit, policy.guard_multiplier, policy.guard_sample_interval),
        probe,
    })
}

/// Breadth-first search: fewest actions first, memory-guarded.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    policy: SearchPolicy,
}

impl BreadthFirstSearch {
    /// Create a BFS solver.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Solve from `initial`, estimating memory from the search footprint.
    pub fn solve<W>(&self, world: &W, initial: W::State) -> SearchOutcome<W::Action>
    where
        W: SearchWorld + ?Sized,
    {
        let mut probe = FootprintEstimateProbe::for_types::<W::State, W::Action>();
        self.solve_with_probe(world, initial, &mut probe)
    }

    /// Solve from `initial`, sampling memory through `probe`.
    pub fn solve_with_probe<W>(
        &self,
        world: &W,
        initial: W::State,
        probe: &mut dyn MemoryProbe,
    ) -> SearchOutcome<W::Action>
    where
        W: SearchWorld + ?Sized,
    {
        let limits = SearchLimits {
            strategy: "bfs",
            depth_limit: None,
            guard: guard_for(&self.policy, probe),
        };
        run_search(world, initial, FifoFrontier::new(), limits)
    }
}

/// Depth-limited depth-first search.
///
/// Nodes at or beyond `policy.depth_limit` are treated as leaves. The depth
/// limit is the only bound; the memory guard does not apply.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    policy: SearchPolicy,
}

impl DepthFirstSearch {
    /// Create a DFS solver.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Solve from `initial`.
    pub fn solve<W>(&self, world: &W, initial: W::State) -> SearchOutcome<W::Action>
    where
        W: SearchWorld + ?Sized,
    {
        let limits = SearchLimits {
            strategy: "dfs",
            depth_limit: Some(self.policy.depth_limit),
            guard: None,
        };
        run_search(world, initial, LifoFrontier::new(), limits)
    }
}

/// Heuristic-guided best-first search ordered by `f = depth + h`.
///
/// The first discovery of a state fixes its parent link; closed states are
/// never re-opened. The returned path is therefore not guaranteed optimal,
/// even with an admissible heuristic.
#[derive(Debug, Clone)]
pub struct AStarSearch<H> {
    policy: SearchPolicy,
    heuristic: H,
}

impl<H> AStarSearch<H> {
    /// Create an A* solver using `heuristic`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(policy: SearchPolicy, heuristic: H) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { policy, heuristic })
    }

    /// Solve from `initial`, estimating memory from the search footprint.
    pub fn solve<W>(&self, world: &W, initial: W::State) -> SearchOutcome<W::Action>
    where
        W: SearchWorld + ?Sized,
        H: Heuristic<W::State>,
    {
        let mut probe = FootprintEstimateProbe::for_types::<W::State, W::Action>();
        self.solve_with_probe(world, initial, &mut probe)
    }

    /// Solve from `initial`, sampling memory through `probe`.
    pub fn solve_with_probe<W>(
        &self,
        world: &W,
        initial: W::State,
        probe: &mut dyn MemoryProbe,
    ) -> SearchOutcome<W::Action>
    where
        W: SearchWorld + ?Sized,
        H: Heuristic<W::State>,
    {
        let frontier = BestFirstFrontier::new(|state: &W::State| self.heuristic.estimate(state));
        let limits = SearchLimits {
            strategy: "astar",
            depth_limit: None,
            guard: guard_for(&self.policy, probe),
        };
        run_search(world, initial, frontier, limits)
    }
}
