//! Predictive memory guard: trips on projected growth, reports it as a
//! distinct termination, and never applies to DFS.

use statespace_harness::runner::{run, run_with_probe, StrategyKind};
use statespace_harness::worlds::number_line::NumberLine;
use statespace_search::guard::SearchFootprint;
use statespace_search::outcome::{SearchStatus, TerminationReason};
use statespace_search::policy::SearchPolicy;

fn tight(limit: u64) -> SearchPolicy {
    SearchPolicy {
        memory_limit_bytes: Some(limit),
        ..SearchPolicy::default()
    }
}

#[test]
fn endless_world_trips_guard_for_bfs_and_astar() {
    let world = NumberLine::endless(0);
    for kind in [StrategyKind::Bfs, StrategyKind::AStar] {
        let report = run(&world, kind, &tight(4_096)).unwrap();
        let outcome = &report.outcome;
        assert_eq!(outcome.status(), SearchStatus::ResourceExhausted, "{kind}");
        assert!(outcome.actions.is_empty());
        let TerminationReason::MemoryBudgetExceeded {
            sampled,
            delta,
            limit,
        } = outcome.termination
        else {
            panic!("{kind}: expected guard trip, got {:?}", outcome.termination);
        };
        assert_eq!(limit, 4_096);
        assert!(sampled.saturating_add(delta.saturating_mul(4)) > limit);
    }
}

#[test]
fn guard_trips_before_the_limit_is_reached() {
    // 100 bytes per expansion: the projection is usage + 400, so it crosses
    // 10_000 at a sample of 9_700.
    let world = NumberLine::endless(0);
    let mut probe = |fp: &SearchFootprint| fp.expansions * 100;
    let report = run_with_probe(&world, StrategyKind::Bfs, &tight(10_000), &mut probe).unwrap();
    assert_eq!(
        report.outcome.termination,
        TerminationReason::MemoryBudgetExceeded {
            sampled: 9_700,
            delta: 100,
            limit: 10_000,
        }
    );
    assert_eq!(report.outcome.stats.expansions, 97);
}

#[test]
fn sparse_sampling_takes_fewer_samples() {
    let world = NumberLine::endless(0);
    let every = run(&world, StrategyKind::Bfs, &tight(8_192)).unwrap();
    let sparse = run(
        &world,
        StrategyKind::Bfs,
        &SearchPolicy {
            guard_sample_interval: 8,
            ..tight(8_192)
        },
    )
    .unwrap();
    assert!(every.outcome.stats.guard_samples > 0);
    assert!(sparse.outcome.stats.guard_samples > 0);
    assert!(sparse.outcome.stats.guard_samples < every.outcome.stats.expansions);
}

#[test]
fn reachable_goal_within_budget_is_solved() {
    let report = run(
        &NumberLine::to_target(1, 6),
        StrategyKind::Bfs,
        &tight(1_000_000),
    )
    .unwrap();
    assert!(report.outcome.is_solved());
    assert!(report.outcome.stats.guard_samples > 0);
}

#[test]
fn dfs_ignores_memory_budget() {
    let policy = SearchPolicy {
        depth_limit: 4,
        ..tight(1)
    };
    let report = run(&NumberLine::endless(0), StrategyKind::Dfs, &policy).unwrap();
    assert!(matches!(
        report.outcome.termination,
        TerminationReason::DepthLimitExhausted { .. }
    ));
    assert_eq!(report.outcome.stats.guard_samples, 0);
}

#[test]
fn no_limit_means_no_samples() {
    let report = run(
        &NumberLine::to_target(0, 12),
        StrategyKind::AStar,
        &SearchPolicy::default(),
    )
    .unwrap();
    assert!(report.outcome.is_solved());
    assert_eq!(report.outcome.stats.guard_samples, 0);
}
