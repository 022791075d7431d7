//! Heuristic evaluator trait for best-first search.

/// Estimate of the remaining number of actions from a state to a final state.
///
/// Implementations must be deterministic and side-effect free. An estimate
/// that never overstates the true remaining cost is admissible; inadmissible
/// estimates are allowed and trade optimality for speed. Note that the engine
/// never re-opens a closed state, so even an admissible heuristic does not
/// guarantee an optimal path unless it is also consistent.
pub trait Heuristic<S> {
    /// Non-negative estimate for `state`.
    fn estimate(&self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Heuristic that estimates zero everywhere.
///
/// A* with this heuristic orders purely by depth, which matches breadth-first
/// discovery order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f64 {
        0.0
    }
}

/// Clamp an estimate into the contract range.
///
/// NaN and negative estimates become `0.0`. `+inf` is kept: it marks a state
/// the domain considers hopeless, and it orders after every finite key.
#[must_use]
pub fn sanitize_estimate(raw: f64) -> f64 {
    if raw >= 0.0 {
        raw
    } else {
        tracing::warn!(estimate = raw, "heuristic returned out-of-contract estimate; using 0");
        0.0
    }
}
