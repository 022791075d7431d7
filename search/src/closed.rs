//! Closed-set tracker: every discovered state with the link that first
//! reached it.
//!
//! Uses a `BTreeMap` (not `HashMap`) keyed on the state's total order, so
//! lookup and insert are O(log n) and iteration is deterministic.
//!
//! Parent links are stored by value and resolved by key lookup. There are no
//! references into the frontier and no object graph, so the chain from any
//! state back to the root cannot alias or dangle.

use std::collections::BTreeMap;

/// How a state was first reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink<S, A> {
    /// The state that was being expanded.
    pub parent: S,
    /// The action applied to `parent`.
    pub action: A,
}

/// Closed-set metadata for one state.
///
/// The root entry carries no link; that is the sentinel path reconstruction
/// stops on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedEntry<S, A> {
    /// `None` for the initial state.
    pub link: Option<ParentLink<S, A>>,
    /// Number of actions from the initial state at discovery time.
    pub depth: u32,
}

impl<S, A> ClosedEntry<S, A> {
    /// Whether this entry is the root sentinel.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.link.is_none()
    }
}

/// Mapping from state to its first-discovery metadata.
///
/// Invariant: a state is inserted at most once. The first insertion fixes its
/// parent link permanently; later discoveries are no-ops.
#[derive(Debug, Clone)]
pub struct ClosedSet<S, A> {
    entries: BTreeMap<S, ClosedEntry<S, A>>,
}

impl<S: Ord, A> ClosedSet<S, A> {
    /// Create an empty closed set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record the initial state with the root sentinel.
    ///
    /// Returns `false` if the state was already present.
    pub fn record_root(&mut self, state: S) -> bool {
        self.insert_first(state, ClosedEntry { link: None, depth: 0 })
    }

    /// Record a newly discovered state.
    ///
    /// Returns `false` (and leaves the existing entry untouched) if the state
    /// was already present.
    pub fn record(&mut self, state: S, parent: S, action: A, depth: u32) -> bool {
        self.insert_first(
            state,
            ClosedEntry {
                link: Some(ParentLink { parent, action }),
                depth,
            },
        )
    }

    fn insert_first(&mut self, state: S, entry: ClosedEntry<S, A>) -> bool {
        match self.entries.entry(state) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    /// Look up a state's discovery metadata.
    #[must_use]
    pub fn lookup(&self, state: &S) -> Option<&ClosedEntry<S, A>> {
        self.entries.get(state)
    }

    /// Whether a state has been discovered.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.entries.contains_key(state)
    }

    /// Number of discovered states (root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no state has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Ord, A> Default for ClosedSet<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
