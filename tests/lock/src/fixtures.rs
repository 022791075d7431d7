//! Hand-built worlds with known answers, plus the fixed scenario list the
//! cross-process test compares.
//!
//! Node numbering is chosen so that a wrong expansion order shows up as a
//! wrong path, not just a wrong counter.

use std::cell::RefCell;
use std::collections::BTreeMap;

use statespace_harness::contract::HarnessWorld;
use statespace_harness::runner::{run, RunReport, StrategyKind};
use statespace_harness::worlds::explicit_graph::{Edge, ExplicitGraph};
use statespace_harness::worlds::number_line::NumberLine;
use statespace_harness::worlds::patience::{DealConfig, Patience};
use statespace_search::contract::SearchWorld;
use statespace_search::policy::SearchPolicy;

/// Four-level graph with one 2-edge route and several longer ones to node 9.
///
/// ```text
/// 0 ─a→ 1 ─c→ 3 ─f→ 9
/// 0 ─b→ 2 ─e→ 9
/// 1 ─d→ 4 ─g→ 5 ─h→ 9
/// 3 ─i→ 0            (cycle back to root)
/// ```
///
/// The 2-edge route starts with the second root edge.
#[must_use]
pub fn diamond_with_detours() -> ExplicitGraph {
    ExplicitGraph::new(0)
        .edge(0, "a", 1)
        .edge(0, "b", 2)
        .edge(1, "c", 3)
        .edge(1, "d", 4)
        .edge(2, "e", 9)
        .edge(3, "f", 9)
        .edge(3, "i", 0)
        .edge(4, "g", 5)
        .edge(5, "h", 9)
        .final_node(9)
}

/// Chain `0 → 1 → … → len`, final at `len`.
#[must_use]
pub fn chain(len: u32) -> ExplicitGraph {
    (0..len)
        .fold(ExplicitGraph::new(0), |g, n| g.edge(n, "next", n + 1))
        .final_node(len)
}

/// Labels of a graph solution, for readable assertions.
#[must_use]
pub fn labels(actions: &[Edge]) -> Vec<&str> {
    actions.iter().map(|e| e.label.as_str()).collect()
}

/// Wraps a world and counts `actions()` calls per state.
///
/// `actions()` is called exactly once per expansion, so the counts are
/// expansion counts.
pub struct CountingWorld<W: SearchWorld> {
    inner: W,
    expanded: RefCell<BTreeMap<W::State, u32>>,
}

impl<W: SearchWorld> CountingWorld<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            expanded: RefCell::new(BTreeMap::new()),
        }
    }

    /// Expansion count per state.
    #[must_use]
    pub fn expansions(&self) -> BTreeMap<W::State, u32> {
        self.expanded.borrow().clone()
    }
}

impl<W: SearchWorld> SearchWorld for CountingWorld<W> {
    type State = W::State;
    type Action = W::Action;

    fn world_id(&self) -> &str {
        self.inner.world_id()
    }

    fn is_final(&self, state: &W::State) -> bool {
        self.inner.is_final(state)
    }

    fn actions(&self, state: &W::State) -> Vec<W::Action> {
        *self.expanded.borrow_mut().entry(state.clone()).or_insert(0) += 1;
        self.inner.actions(state)
    }

    fn execute(&self, state: &W::State, action: &W::Action) -> W::State {
        self.inner.execute(state, action)
    }
}

impl<W: HarnessWorld> HarnessWorld for CountingWorld<W> {
    fn initial_state(&self) -> W::State {
        self.inner.initial_state()
    }

    fn heuristic(&self, state: &W::State) -> f64 {
        self.inner.heuristic(state)
    }
}

/// Deal dimensions small enough for exhaustive search in tests.
#[must_use]
pub fn small_deal() -> DealConfig {
    DealConfig {
        suit_count: 2,
        king_value: 3,
        free_cell_count: 2,
        stack_count: 3,
    }
}

fn report_lines<A: std::fmt::Display>(name: &str, report: &RunReport<A>) -> Vec<String> {
    vec![
        format!("{name}.world_id={}", report.world_id),
        format!("{name}.strategy={}", report.strategy),
        format!("{name}.status={:?}", report.outcome.status()),
        format!("{name}.actions={}", report.outcome.actions.len()),
        format!("{name}.expansions={}", report.outcome.stats.expansions),
        format!("{name}.policy_digest={}", report.policy_digest),
        format!("{name}.outcome_digest={}", report.outcome_digest),
    ]
}

/// Run the fixed scenario list and render it as `key=value` lines.
///
/// # Errors
///
/// Returns the first error from building a world or running a scenario.
pub fn scenario_lines() -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let policy = SearchPolicy::default();
    let shallow = SearchPolicy {
        depth_limit: 8,
        ..SearchPolicy::default()
    };
    let guarded = SearchPolicy {
        memory_limit_bytes: Some(8_192),
        ..SearchPolicy::default()
    };
    let mut lines = Vec::new();

    let graph = diamond_with_detours();
    for kind in StrategyKind::ALL {
        lines.extend(report_lines(
            &format!("graph_{kind}"),
            &run(&graph, kind, &policy)?,
        ));
    }

    let line = NumberLine::to_target(1, 37);
    for kind in StrategyKind::ALL {
        lines.extend(report_lines(
            &format!("number_line_{kind}"),
            &run(&line, kind, &shallow)?,
        ));
    }

    let endless = NumberLine::endless(0);
    lines.extend(report_lines(
        "endless_bfs",
        &run(&endless, StrategyKind::Bfs, &guarded)?,
    ));

    let deal = Patience::deal(small_deal(), 7)?;
    lines.extend(report_lines(
        "patience_astar",
        &run(&deal, StrategyKind::AStar, &policy)?,
    ));

    Ok(lines)
}
