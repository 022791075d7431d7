//! `ExplicitGraph`: a hand-built directed graph world.
//!
//! States are node ids; actions are labelled edges. Edges are enumerated in
//! insertion order, which makes DFS order and A* ties easy to predict in
//! tests.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use statespace_search::contract::SearchWorld;

use crate::contract::HarnessWorld;

/// One labelled edge out of a node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub label: String,
    pub to: u32,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.label, self.to)
    }
}

/// Directed graph with labelled edges, a start node and final nodes.
#[derive(Debug, Clone, Default)]
pub struct ExplicitGraph {
    start: u32,
    edges: BTreeMap<u32, Vec<Edge>>,
    finals: BTreeSet<u32>,
    estimates: BTreeMap<u32, f64>,
}

impl ExplicitGraph {
    /// Empty graph starting at `start`.
    #[must_use]
    pub fn new(start: u32) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    /// Add a labelled edge `from → to`.
    #[must_use]
    pub fn edge(mut self, from: u32, label: &str, to: u32) -> Self {
        self.edges.entry(from).or_default().push(Edge {
            label: label.to_string(),
            to,
        });
        self
    }

    /// Mark `node` as final.
    #[must_use]
    pub fn final_node(mut self, node: u32) -> Self {
        self.finals.insert(node);
        self
    }

    /// Attach a heuristic estimate to `node` (default 0).
    #[must_use]
    pub fn estimate(mut self, node: u32, h: f64) -> Self {
        self.estimates.insert(node, h);
        self
    }

    /// Whether `to` is reachable from `from` by a single edge.
    #[must_use]
    pub fn has_edge(&self, from: u32, to: u32) -> bool {
        self.edges
            .get(&from)
            .is_some_and(|out| out.iter().any(|e| e.to == to))
    }
}

impl SearchWorld for ExplicitGraph {
    type State = u32;
    type Action = Edge;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "explicit_graph"
    }

    fn is_final(&self, state: &u32) -> bool {
        self.finals.contains(state)
    }

    fn actions(&self, state: &u32) -> Vec<Edge> {
        self.edges.get(state).cloned().unwrap_or_default()
    }

    fn execute(&self, _state: &u32, action: &Edge) -> u32 {
        action.to
    }
}

impl HarnessWorld for ExplicitGraph {
    fn initial_state(&self) -> u32 {
        self.start
    }

    fn heuristic(&self, state: &u32) -> f64 {
        self.estimates.get(state).copied().unwrap_or(0.0)
    }
}
