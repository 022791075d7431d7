//! Patience lock tests: handcrafted layouts with known move counts, and
//! seeded deals whose solutions must replay.

use lock_tests::fixtures::small_deal;
use statespace_harness::contract::HarnessWorld;
use statespace_harness::replay::verify_solution;
use statespace_harness::runner::{run, StrategyKind};
use statespace_harness::worlds::patience::{
    Card, DealConfig, Patience, PatienceMove, PatienceState, Suit,
};
use statespace_search::outcome::SearchStatus;
use statespace_search::policy::SearchPolicy;

/// Hearts and clubs up to 2, each ace buried under the other suit's two.
fn crossed_aces() -> Patience {
    let config = DealConfig {
        suit_count: 3,
        king_value: 2,
        free_cell_count: 2,
        stack_count: 3,
    };
    let layout = PatienceState::new(
        [0, 2, 0, 0],
        Vec::new(),
        vec![
            vec![Card::new(1, Suit::Hearts), Card::new(2, Suit::Clubs)],
            vec![Card::new(1, Suit::Clubs), Card::new(2, Suit::Hearts)],
            vec![],
        ],
    );
    Patience::new(config, layout).unwrap()
}

#[test]
fn bfs_finds_five_move_solution() {
    let world = crossed_aces();
    let report = run(&world, StrategyKind::Bfs, &SearchPolicy::default()).unwrap();
    assert!(report.outcome.is_solved());
    // Four cards home plus one move to uncover the first ace.
    assert_eq!(report.outcome.actions.len(), 5);
    verify_solution(&world, world.initial_state(), &report.outcome.actions).unwrap();
}

#[test]
fn first_move_uncovers_an_ace() {
    let world = crossed_aces();
    let report = run(&world, StrategyKind::Bfs, &SearchPolicy::default()).unwrap();
    let first = report.outcome.actions[0];
    assert!(
        matches!(
            first,
            PatienceMove::StackToStack { .. } | PatienceMove::StackToFreeCell { .. }
        ),
        "unexpected first move {first}"
    );
}

#[test]
fn bfs_and_astar_solutions_replay() {
    let world = crossed_aces();
    for kind in [StrategyKind::Bfs, StrategyKind::AStar] {
        let report = run(&world, kind, &SearchPolicy::default()).unwrap();
        assert!(report.outcome.is_solved(), "{kind}");
        assert!(report.outcome.actions.len() >= 5, "{kind}");
        verify_solution(&world, world.initial_state(), &report.outcome.actions).unwrap();
    }
}

#[test]
fn dfs_result_replays_or_reports_cutoff() {
    // DFS keeps the first discovery of each state, so a shallow limit may
    // hide every route; a result, when there is one, must still replay.
    let world = crossed_aces();
    for depth_limit in [5, 8, 64] {
        let policy = SearchPolicy {
            depth_limit,
            ..SearchPolicy::default()
        };
        let report = run(&world, StrategyKind::Dfs, &policy).unwrap();
        match report.outcome.status() {
            SearchStatus::Solved => {
                assert!(report.outcome.actions.len() <= depth_limit as usize);
                verify_solution(&world, world.initial_state(), &report.outcome.actions)
                    .unwrap();
            }
            SearchStatus::Unreachable => {}
            other => panic!("depth {depth_limit}: unexpected status {other:?}"),
        }
    }
}

#[test]
fn cards_out_of_home_reaches_zero_at_goal() {
    let world = crossed_aces();
    let start = world.initial_state();
    assert!((world.heuristic(&start) - 4.0).abs() < f64::EPSILON);

    let report = run(&world, StrategyKind::AStar, &SearchPolicy::default()).unwrap();
    let end = verify_solution(&world, start, &report.outcome.actions).unwrap();
    assert!(world.heuristic(&end).abs() < f64::EPSILON);
}

#[test]
fn seeded_deals_end_solved_or_exhausted() {
    for seed in 1..=5 {
        let world = Patience::deal(small_deal(), seed).unwrap();
        let report = run(&world, StrategyKind::AStar, &SearchPolicy::default()).unwrap();
        match report.outcome.status() {
            SearchStatus::Solved => {
                verify_solution(&world, world.initial_state(), &report.outcome.actions)
                    .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
            }
            SearchStatus::Unreachable => {}
            other => panic!("seed {seed}: unexpected status {other:?}"),
        }
    }
}
