//! `NumberLine`: an unbounded integer world.
//!
//! From any integer the actions are `+1`, `-1` and `*2`. With no target the
//! state space is infinite, which is what the resource guard and the DFS
//! depth limit are exercised against.

use std::fmt;

use statespace_search::contract::SearchWorld;

use crate::contract::HarnessWorld;

/// A move on the number line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Inc,
    Dec,
    Double,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inc => write!(f, "+1"),
            Self::Dec => write!(f, "-1"),
            Self::Double => write!(f, "*2"),
        }
    }
}

/// Integer world starting at `start`, final at `target` (if any).
#[derive(Debug, Clone, Copy)]
pub struct NumberLine {
    pub start: i64,
    pub target: Option<i64>,
}

impl NumberLine {
    /// World with a reachable target.
    #[must_use]
    pub fn to_target(start: i64, target: i64) -> Self {
        Self {
            start,
            target: Some(target),
        }
    }

    /// World with no final state.
    #[must_use]
    pub fn endless(start: i64) -> Self {
        Self {
            start,
            target: None,
        }
    }
}

impl SearchWorld for NumberLine {
    type State = i64;
    type Action = Step;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "number_line"
    }

    fn is_final(&self, state: &i64) -> bool {
        self.target == Some(*state)
    }

    fn actions(&self, state: &i64) -> Vec<Step> {
        let mut steps = vec![Step::Inc, Step::Dec];
        // Doubling 0 is a self-loop; doubling past i64 range is not legal.
        if *state != 0 && state.checked_mul(2).is_some() {
            steps.push(Step::Double);
        }
        steps
    }

    fn execute(&self, state: &i64, action: &Step) -> i64 {
        match action {
            Step::Inc => state.saturating_add(1),
            Step::Dec => state.saturating_sub(1),
            Step::Double => state.saturating_mul(2),
        }
    }
}

impl HarnessWorld for NumberLine {
    fn initial_state(&self) -> i64 {
        self.start
    }

    /// Distance to the target. Inadmissible: one doubling can cover many units.
    #[allow(clippy::cast_precision_loss)]
    fn heuristic(&self, state: &i64) -> f64 {
        match self.target {
            Some(target) => target.abs_diff(*state) as f64,
            None => 0.0,
        }
    }
}
