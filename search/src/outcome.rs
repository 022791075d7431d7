//! `SearchOutcome`: explicit status, solution and counters of one search.
//!
//! The outcome separates "solved" (including the trivial empty solution when
//! the initial state is already final) from the failure modes, which a bare
//! action list cannot.

use std::fmt::Display;

use sha2::{Digest, Sha256};

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A final state was discovered `depth` actions from the initial state.
    /// `depth == 0` means the initial state was already final.
    GoalReached { depth: u32 },
    /// Frontier emptied without finding a final state.
    FrontierExhausted,
    /// Frontier emptied, but `cutoffs` nodes were left unexpanded at the
    /// depth limit. A larger limit might find a solution.
    DepthLimitExhausted { cutoffs: u64 },
    /// The resource guard projected the memory budget would be exceeded.
    MemoryBudgetExceeded { sampled: u64, delta: u64, limit: u64 },
    /// A world callback panicked; the search was abandoned.
    CallbackPanic { stage: CallbackStage },
    /// A goal was found but its parent chain could not be walked back to the
    /// root. Indicates a closed-set invariant violation.
    ParentChainBroken,
}

/// World callback during which a panic was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStage {
    /// `SearchWorld::is_final()` on the initial state.
    IsFinalRoot,
    /// `SearchWorld::actions()`.
    Actions,
    /// `SearchWorld::execute()`.
    Execute,
    /// `SearchWorld::is_final()` on a generated successor.
    IsFinal,
}

/// Coarse outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Solved,
    Unreachable,
    ResourceExhausted,
    Failed,
}

impl TerminationReason {
    /// Collapse to the coarse status callers usually branch on.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        match self {
            Self::GoalReached { .. } => SearchStatus::Solved,
            Self::FrontierExhausted | Self::DepthLimitExhausted { .. } => {
                SearchStatus::Unreachable
            }
            Self::MemoryBudgetExceeded { .. } => SearchStatus::ResourceExhausted,
            Self::CallbackPanic { .. } | Self::ParentChainBroken => SearchStatus::Failed,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expansions: u64,
    /// Successor states computed.
    pub generated: u64,
    /// Successors already in the closed set.
    pub duplicates_suppressed: u64,
    /// Popped nodes skipped at the depth limit.
    pub depth_cutoffs: u64,
    /// Expanded nodes that produced no actions.
    pub dead_ends: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// States in the closed set at termination (root included).
    pub closed_len: u64,
    /// Memory probe samples taken by the resource guard.
    pub guard_samples: u64,
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchOutcome<A> {
    /// Why the search stopped.
    pub termination: TerminationReason,
    /// Actions from the initial state to the goal, in execution order.
    /// Empty unless `termination` is `GoalReached`.
    pub actions: Vec<A>,
    /// Search counters.
    pub stats: SearchStats,
}

impl<A> SearchOutcome<A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// The solution, or `None` on any failure.
    #[must_use]
    pub fn solution(&self) -> Option<&[A]> {
        self.is_solved().then_some(self.actions.as_slice())
    }

    /// The plain action sequence: empty for both "already final" and every
    /// failure.
    #[must_use]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    /// Coarse status of this outcome.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.termination.status()
    }
}

impl<A: Display> SearchOutcome<A> {
    /// Convert to a `serde_json::Value`. Actions are rendered with `Display`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self.actions.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "stats": stats_to_json(&self.stats),
            "termination": termination_to_json(&self.termination),
        })
    }

    /// Serialize to canonical JSON bytes (sorted keys, compact separators).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content digest of the canonical JSON, formatted `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(sha256_digest(&bytes))
    }
}

/// `"sha256:<hex>"` digest of a byte slice.
#[must_use]
pub fn sha256_digest(bytes: &[u8]) -> String {
    format!("sha256:{}", hex::encode(Sha256::digest(bytes)))
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "closed_len": s.closed_len,
        "dead_ends": s.dead_ends,
        "depth_cutoffs": s.depth_cutoffs,
        "duplicates_suppressed": s.duplicates_suppressed,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "generated": s.generated,
        "guard_samples": s.guard_samples,
    })
}

fn termination_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { depth } => {
            serde_json::json!({"depth": depth, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::DepthLimitExhausted { cutoffs } => {
            serde_json::json!({"cutoffs": cutoffs, "type": "depth_limit_exhausted"})
        }
        TerminationReason::MemoryBudgetExceeded {
            sampled,
            delta,
            limit,
        } => serde_json::json!({
            "delta": delta,
            "limit": limit,
            "sampled": sampled,
            "type": "memory_budget_exceeded",
        }),
        TerminationReason::CallbackPanic { stage } => {
            serde_json::json!({"stage": callback_stage_str(*stage), "type": "callback_panic"})
        }
        TerminationReason::ParentChainBroken => serde_json::json!({"type": "parent_chain_broken"}),
    }
}

fn callback_stage_str(s: CallbackStage) -> &'static str {
    match s {
        CallbackStage::IsFinalRoot => "is_final_root",
        CallbackStage::Actions => "actions",
        CallbackStage::Execute => "execute",
        CallbackStage::IsFinal => "is_final",
    }
}
