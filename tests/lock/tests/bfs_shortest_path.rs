//! BFS lock tests: fewest actions, first-discovery parent links, dedup.

use lock_tests::fixtures::{chain, diamond_with_detours, labels, CountingWorld};
use statespace_harness::contract::HarnessWorld;
use statespace_harness::replay::verify_solution;
use statespace_harness::worlds::explicit_graph::ExplicitGraph;
use statespace_harness::worlds::number_line::NumberLine;
use statespace_search::outcome::TerminationReason;
use statespace_search::policy::SearchPolicy;
use statespace_search::strategy::BreadthFirstSearch;

fn bfs() -> BreadthFirstSearch {
    BreadthFirstSearch::new(SearchPolicy::default()).unwrap()
}

#[test]
fn bfs_prefers_shortest_route_over_earlier_longer_ones() {
    let world = diamond_with_detours();
    let outcome = bfs().solve(&world, world.initial_state());
    assert_eq!(outcome.termination, TerminationReason::GoalReached { depth: 2 });
    assert_eq!(labels(&outcome.actions), vec!["b", "e"]);
    verify_solution(&world, world.initial_state(), &outcome.actions).unwrap();
}

#[test]
fn bfs_path_length_matches_chain_length() {
    let world = chain(12);
    let outcome = bfs().solve(&world, 0);
    assert_eq!(outcome.actions.len(), 12);
    assert_eq!(outcome.stats.expansions, 12);
}

#[test]
fn bfs_number_line_is_minimal() {
    // 1 → 2 → 4 → 8 → 16 → 32 → 33 is six steps; nothing shorter exists.
    let world = NumberLine::to_target(1, 33);
    let outcome = bfs().solve(&world, 1);
    assert_eq!(outcome.actions.len(), 6);
    verify_solution(&world, 1, &outcome.actions).unwrap();
}

#[test]
fn each_state_is_expanded_at_most_once() {
    let world = CountingWorld::new(NumberLine::to_target(0, 40));
    let outcome = bfs().solve(&world, 0);
    assert!(outcome.is_solved());
    let counts = world.expansions();
    assert!(!counts.is_empty());
    assert!(counts.values().all(|&n| n == 1), "re-expanded: {counts:?}");
    assert_eq!(counts.len() as u64, outcome.stats.expansions);
}

#[test]
fn cycles_do_not_revisit_states() {
    let world = ExplicitGraph::new(0)
        .edge(0, "to1", 1)
        .edge(1, "to2", 2)
        .edge(1, "back", 0)
        .edge(2, "loop", 0)
        .edge(2, "self", 2);
    let outcome = bfs().solve(&world, 0);
    assert_eq!(outcome.termination, TerminationReason::FrontierExhausted);
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.stats.closed_len, 3);
    assert_eq!(outcome.stats.expansions, 3);
    assert_eq!(outcome.stats.duplicates_suppressed, 3);
}

#[test]
fn dead_ends_are_counted_and_skipped() {
    let world = ExplicitGraph::new(0)
        .edge(0, "dead", 1)
        .edge(0, "live", 2)
        .edge(2, "goal", 3)
        .final_node(3);
    let outcome = bfs().solve(&world, 0);
    assert_eq!(labels(&outcome.actions), vec!["live", "goal"]);
    assert_eq!(outcome.stats.dead_ends, 1);
}
