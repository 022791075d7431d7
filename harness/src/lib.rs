//! Statespace Harness: domain collaborators and run orchestration.
//!
//! The harness wires a world, a strategy and a policy into one run and binds
//! the result to digests. Worlds provide domain data only; the search crate
//! owns expansion, dedup and path reconstruction.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod replay;
pub mod runner;
pub mod worlds;
