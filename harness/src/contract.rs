//! World harness contract: what a world supplies beyond the search trait.
//!
//! A harness world provides its initial state and, optionally, a heuristic
//! for best-first search. Worlds may NOT implement dedup, frontier ordering
//! or budgets; those are search and runner concerns.

use statespace_search::contract::SearchWorld;

/// The contract a world must implement to be run by the harness runner.
pub trait HarnessWorld: SearchWorld {
    /// The state a run starts from.
    fn initial_state(&self) -> Self::State;

    /// Domain heuristic used when the runner is asked for A* without an
    /// explicit heuristic. Defaults to zero (uniform-cost ordering).
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }

    /// Bytes one closed-set entry occupies, heap parts included. `None`
    /// falls back to the shallow `size_of` estimate.
    fn state_bytes_hint(&self) -> Option<u64> {
        None
    }
}
