//! Statespace Search: a domain-agnostic state-space search engine.
//!
//! The engine finds a sequence of actions that transforms an initial state
//! into a final state. Three strategies share one expansion loop and differ
//! only in their frontier:
//!
//! - [`strategy::BreadthFirstSearch`]: FIFO frontier, fewest actions first
//! - [`strategy::DepthFirstSearch`]: LIFO frontier with a depth limit
//! - [`strategy::AStarSearch`]: priority frontier keyed by `f = g + h`
//!
//! # Crate dependency graph
//!
//! ```text
//! statespace_search  ←  statespace_harness  ←  lock-tests / benchmarks
//! (engine, frontiers)   (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchWorld`](contract::SearchWorld): the domain collaborator
//! - [`ClosedSet`](closed::ClosedSet): first-discovery parent links
//! - [`Frontier`](frontier::Frontier): expansion order policy
//! - [`ResourceGuard`](guard::ResourceGuard): predictive memory abort
//! - [`SearchOutcome`](outcome::SearchOutcome): explicit status + actions

#![forbid(unsafe_code)]

pub mod closed;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod guard;
pub mod heuristic;
pub mod node;
pub mod outcome;
pub mod path;
pub mod policy;
pub mod search;
pub mod strategy;
