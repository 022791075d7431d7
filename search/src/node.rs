//! Core search node type and the best-first ordering key.

/// A discovered state awaiting expansion.
///
/// Ownership of the state moves from generation into the frontier and from
/// the frontier into expansion. Nodes are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S> {
    /// Full immutable state at this node.
    pub state: S,
    /// Number of actions from the initial state (root = 0).
    pub depth: u32,
}

impl<S> SearchNode<S> {
    /// The initial node of a search.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self { state, depth: 0 }
    }

    /// A successor one action deeper than `parent_depth`.
    #[must_use]
    pub fn child(state: S, parent_depth: u32) -> Self {
        Self {
            state,
            depth: parent_depth.saturating_add(1),
        }
    }
}

/// The best-first ordering key: `(f_cost, creation_order)`.
///
/// This is the single comparison policy for the A* frontier. Lower `f_cost`
/// first; ties are broken by older `creation_order` so that expansion order
/// is reproducible across runs. `f_cost` is compared with [`f64::total_cmp`],
/// which gives a total order even for values the heuristic should never
/// produce.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
