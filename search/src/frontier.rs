//! Frontier policies: FIFO (breadth-first), LIFO (depth-first) and
//! best-first (A*).
//!
//! The expansion loop only sees the [`Frontier`] trait. Each strategy is one
//! small implementation of it; dedup lives in the closed set, not here.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::heuristic::{sanitize_estimate, Heuristic};
use crate::node::{FrontierKey, SearchNode};

/// Expansion-order policy over discovered-but-unexpanded nodes.
pub trait Frontier<S> {
    /// Insert a newly discovered node.
    fn push(&mut self, node: SearchNode<S>);

    /// Remove the next node to expand.
    fn pop_next(&mut self) -> Option<SearchNode<S>>;

    /// Current frontier size.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    fn high_water(&self) -> u64;
}

fn bump_high_water(high_water: &mut u64, len: usize) {
    let size = len as u64;
    if size > *high_water {
        *high_water = size;
    }
}

/// First-in first-out frontier for breadth-first search.
#[derive(Debug)]
pub struct FifoFrontier<S> {
    queue: VecDeque<SearchNode<S>>,
    high_water: u64,
}

impl<S> FifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<S> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, node: SearchNode<S>) {
        self.queue.push_back(node);
        bump_high_water(&mut self.high_water, self.queue.len());
    }

    fn pop_next(&mut self) -> Option<SearchNode<S>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Last-in first-out frontier for depth-first search.
///
/// The most recently discovered node is expanded next. The depth limit is
/// enforced by the expansion loop, not by the stack.
#[derive(Debug)]
pub struct LifoFrontier<S> {
    stack: Vec<SearchNode<S>>,
    high_water: u64,
}

impl<S> LifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            high_water: 0,
        }
    }
}

impl<S> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, node: SearchNode<S>) {
        self.stack.push(node);
        bump_high_water(&mut self.high_water, self.stack.len());
    }

    fn pop_next(&mut self) -> Option<SearchNode<S>> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node: SearchNode<S>,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier for A*.
///
/// Each node is keyed at push time by `f = g + h`, where `g` is the node's
/// depth captured at discovery and `h` the heuristic's estimate. Keys are
/// never recomputed. Equal keys pop in insertion order.
pub struct BestFirstFrontier<S, H> {
    heap: BinaryHeap<FrontierEntry<S>>,
    heuristic: H,
    next_creation_order: u64,
    high_water: u64,
}

impl<S, H: Heuristic<S>> BestFirstFrontier<S, H> {
    /// Create a new empty frontier ordered by `heuristic`.
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self {
            heap: BinaryHeap::new(),
            heuristic,
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// The key a node would receive if pushed now.
    fn key_for(&self, node: &SearchNode<S>) -> FrontierKey {
        let h = sanitize_estimate(self.heuristic.estimate(&node.state));
        FrontierKey {
            f_cost: f64::from(node.depth) + h,
            creation_order: self.next_creation_order,
        }
    }

    /// The key of the node that would pop next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }
}

impl<S, H: Heuristic<S>> Frontier<S> for BestFirstFrontier<S, H> {
    fn push(&mut self, node: SearchNode<S>) {
        let key = self.key_for(&node);
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        bump_high_water(&mut self.high_water, self.heap.len());
    }

    fn pop_next(&mut self) -> Option<SearchNode<S>> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}
