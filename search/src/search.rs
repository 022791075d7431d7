//! Generic expansion loop shared by every strategy.
//!
//! The loop owns a fresh closed set per call. Strategies differ only in the
//! [`Frontier`] they pass in and in their [`SearchLimits`]:
//!
//! ```text
//! seed frontier with root
//! loop:
//!   guard check (BFS, A*)      → MemoryBudgetExceeded
//!   pop next                   → FrontierExhausted / DepthLimitExhausted
//!   depth ≥ limit? skip (DFS)
//!   for action in actions(state):
//!     successor = execute(state, action)
//!     closed? skip
//!     record parent link
//!     final? → reconstruct path, GoalReached
//!     push successor
//! ```
//!
//! The goal test runs when a successor is generated, not when it is popped.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::closed::ClosedSet;
use crate::contract::SearchWorld;
use crate::frontier::Frontier;
use crate::guard::{GuardVerdict, MemoryProbe, ResourceGuard, SearchFootprint};
use crate::node::SearchNode;
use crate::outcome::{CallbackStage, SearchOutcome, SearchStats, TerminationReason};
use crate::path::reconstruct_path;

/// A resource guard together with the probe it samples.
pub struct GuardedProbe<'p> {
    pub guard: ResourceGuard,
    pub probe: &'p mut dyn MemoryProbe,
}

/// Per-strategy bounds for one run of the loop.
pub struct SearchLimits<'p> {
    /// Strategy label for tracing spans.
    pub strategy: &'static str,
    /// Popped nodes at or beyond this depth are not expanded.
    pub depth_limit: Option<u32>,
    /// Predictive memory check, sampled before each expansion round.
    pub guard: Option<GuardedProbe<'p>>,
}

/// Run a world callback, converting a panic into `None`.
fn guarded<T>(f: impl FnOnce() -> T) -> Option<T> {
    catch_unwind(AssertUnwindSafe(f)).ok()
}

/// Run the search loop from `initial` using `frontier` for expansion order.
///
/// All terminations, including guard trips and caught callback panics,
/// return a [`SearchOutcome`]; nothing is retained after the call.
#[allow(clippy::too_many_lines)]
pub fn run_search<W, F>(
    world: &W,
    initial: W::State,
    mut frontier: F,
    mut limits: SearchLimits<'_>,
) -> SearchOutcome<W::Action>
where
    W: SearchWorld + ?Sized,
    F: Frontier<W::State>,
{
    let span = tracing::debug_span!(
        "search",
        strategy = limits.strategy,
        world_id = world.world_id()
    );
    let _entered = span.enter();

    let mut closed: ClosedSet<W::State, W::Action> = ClosedSet::new();
    let mut stats = SearchStats::default();

    let Some(initial_is_final) = guarded(|| world.is_final(&initial)) else {
        tracing::warn!("is_final panicked on the initial state");
        return finish(
            TerminationReason::CallbackPanic {
                stage: CallbackStage::IsFinalRoot,
            },
            Vec::new(),
            stats,
        );
    };

    closed.record_root(initial.clone());
    stats.closed_len = closed.len() as u64;
    if initial_is_final {
        tracing::debug!("initial state is already final");
        return finish(TerminationReason::GoalReached { depth: 0 }, Vec::new(), stats);
    }

    frontier.push(SearchNode::root(initial));

    let mut goal: Option<W::State> = None;

    let termination = 'search: loop {
        if let Some(guarded_probe) = limits.guard.as_mut() {
            let footprint = SearchFootprint {
                closed_len: closed.len(),
                frontier_len: frontier.len(),
                expansions: stats.expansions,
            };
            let verdict = guarded_probe
                .guard
                .check(&mut *guarded_probe.probe, &footprint);
            if let GuardVerdict::Exceeded {
                sampled,
                delta,
                limit,
            } = verdict
            {
                tracing::warn!(sampled, delta, limit, "memory budget projected to be exceeded");
                break TerminationReason::MemoryBudgetExceeded {
                    sampled,
                    delta,
                    limit,
                };
            }
        }

        let Some(current) = frontier.pop_next() else {
            break if stats.depth_cutoffs > 0 {
                TerminationReason::DepthLimitExhausted {
                    cutoffs: stats.depth_cutoffs,
                }
            } else {
                TerminationReason::FrontierExhausted
            };
        };

        if limits.depth_limit.is_some_and(|limit| current.depth >= limit) {
            stats.depth_cutoffs += 1;
            continue;
        }

        stats.expansions += 1;
        tracing::trace!(
            depth = current.depth,
            frontier = frontier.len(),
            closed = closed.len(),
            "expand"
        );

        let Some(actions) = guarded(|| world.actions(&current.state)) else {
            break TerminationReason::CallbackPanic {
                stage: CallbackStage::Actions,
            };
        };
        if actions.is_empty() {
            stats.dead_ends += 1;
            continue;
        }

        let child_depth = current.depth.saturating_add(1);
        for action in actions {
            let Some(next) = guarded(|| world.execute(&current.state, &action)) else {
                break 'search TerminationReason::CallbackPanic {
                    stage: CallbackStage::Execute,
                };
            };
            stats.generated += 1;

            if closed.contains(&next) {
                stats.duplicates_suppressed += 1;
                continue;
            }

            let Some(next_is_final) = guarded(|| world.is_final(&next)) else {
                break 'search TerminationReason::CallbackPanic {
                    stage: CallbackStage::IsFinal,
                };
            };

            closed.record(next.clone(), current.state.clone(), action, child_depth);

            if next_is_final {
                goal = Some(next);
                break 'search TerminationReason::GoalReached { depth: child_depth };
            }

            frontier.push(SearchNode::child(next, current.depth));
        }
    };

    stats.closed_len = closed.len() as u64;
    stats.frontier_high_water = frontier.high_water();
    if let Some(guarded_probe) = &limits.guard {
        stats.guard_samples = guarded_probe.guard.samples_taken();
    }

    if let TerminationReason::CallbackPanic { stage } = &termination {
        tracing::warn!(?stage, "world callback panicked; search abandoned");
    }

    let (termination, actions) = match goal {
        Some(goal_state) => match reconstruct_path(&closed, &goal_state) {
            Some(actions) => (termination, actions),
            None => {
                tracing::error!("parent chain from goal to root is broken");
                (TerminationReason::ParentChainBroken, Vec::new())
            }
        },
        None => (termination, Vec::new()),
    };

    finish(termination, actions, stats)
}

fn finish<A>(
    termination: TerminationReason,
    actions: Vec<A>,
    stats: SearchStats,
) -> SearchOutcome<A> {
    tracing::debug!(
        ?termination,
        solution_len = actions.len(),
        expansions = stats.expansions,
        generated = stats.generated,
        closed = stats.closed_len,
        "search finished"
    );
    SearchOutcome {
        termination,
        actions,
        stats,
    }
}
