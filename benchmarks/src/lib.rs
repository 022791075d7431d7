//! Shared helpers for statespace benchmark suites.

use statespace_harness::worlds::explicit_graph::ExplicitGraph;
use statespace_harness::worlds::patience::{DealConfig, DealError, Patience};
use statespace_search::policy::SearchPolicy;

/// A named benchmark scenario: a world plus the policy to run it under.
pub struct Regime<W> {
    pub name: String,
    pub world: W,
    pub policy: SearchPolicy,
}

/// Patience deals of increasing size.
///
/// # Errors
///
/// Returns [`DealError`] if a built-in deal config is rejected.
pub fn patience_regimes(seed: u64) -> Result<Vec<Regime<Patience>>, DealError> {
    let sizes = [("2x3", 2, 3, 3), ("2x4", 2, 4, 3), ("2x5", 2, 5, 4)];
    sizes
        .into_iter()
        .map(|(name, suit_count, king_value, stack_count)| {
            let config = DealConfig {
                suit_count,
                king_value,
                free_cell_count: 2,
                stack_count,
            };
            Ok(Regime {
                name: format!("patience_{name}_seed{seed}"),
                world: Patience::deal(config, seed)?,
                policy: SearchPolicy {
                    memory_limit_bytes: Some(256 * 1024 * 1024),
                    ..SearchPolicy::default()
                },
            })
        })
        .collect()
}

/// Complete `branching`-ary tree of the given depth, final at the last leaf.
///
/// Node ids are assigned breadth-first from 0.
#[must_use]
pub fn wide_tree(branching: u32, depth: u32) -> ExplicitGraph {
    let mut graph = ExplicitGraph::new(0);
    let mut level_start = 0u32;
    let mut level_len = 1u32;
    let mut next_id = 1u32;
    for _ in 0..depth {
        for parent in level_start..level_start + level_len {
            for k in 0..branching {
                graph = graph.edge(parent, &format!("c{k}"), next_id);
                next_id += 1;
            }
        }
        level_start += level_len;
        level_len *= branching;
    }
    graph.final_node(next_id - 1)
}
