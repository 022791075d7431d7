//! Search world contract trait.

use std::fmt::{Debug, Display};

/// Trait for domains that can be searched.
///
/// A world supplies the state representation, the legal-action generator,
/// the transition function and the goal test. The engine never inspects a
/// state beyond equality and ordering.
///
/// # Contract
///
/// - `State` identity is the domain's canonical representation. Action
///   history must not be part of it.
/// - `actions` must be deterministic: same state → same actions in the same
///   order. The order drives DFS exploration and A* tie-breaking.
/// - `execute` must be pure and total for every action returned by
///   `actions` for that state.
/// - An empty `actions` list for a non-final state is tolerated; the state
///   becomes a dead end.
pub trait SearchWorld {
    /// Immutable state value. Should be cheap to clone: the closed set keeps
    /// one copy per discovered state plus one per parent link.
    type State: Clone + Ord + Debug;
    /// A single legal transition. `Display` is used for diagnostics only.
    type Action: Clone + Debug + Display;

    /// Unique world identifier (e.g., `"patience"`).
    fn world_id(&self) -> &str;

    /// Test whether the given state is a final (goal) state.
    fn is_final(&self, state: &Self::State) -> bool;

    /// Enumerate the legal actions from the given state, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action to a state, producing the successor.
    fn execute(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
