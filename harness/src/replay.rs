//! Replay a solution against its world.
//!
//! A returned action sequence is valid when every action is legal in the
//! state it is applied to and the last state is final. Replay re-derives
//! each state from the world itself, so it checks the search result without
//! trusting anything the search recorded.

use std::fmt;

use statespace_search::contract::SearchWorld;

/// Typed replay failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Action `index` is not offered by `actions()` in the state it meets.
    IllegalAction { index: usize, action: String },
    /// Every action was legal but the last state is not final.
    NotFinal { steps: usize },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalAction { index, action } => {
                write!(f, "action {index} ({action}) is not legal in its state")
            }
            Self::NotFinal { steps } => {
                write!(f, "state after {steps} actions is not final")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

/// Apply `actions` from `initial`, checking legality at each step.
///
/// # Errors
///
/// Returns [`ReplayError::IllegalAction`] at the first action the world does
/// not offer.
pub fn replay<W>(world: &W, initial: W::State, actions: &[W::Action]) -> Result<W::State, ReplayError>
where
    W: SearchWorld + ?Sized,
    W::Action: PartialEq,
{
    let mut state = initial;
    for (index, action) in actions.iter().enumerate() {
        if !world.actions(&state).contains(action) {
            return Err(ReplayError::IllegalAction {
                index,
                action: action.to_string(),
            });
        }
        state = world.execute(&state, action);
    }
    Ok(state)
}

/// Replay `actions` and require the final state to satisfy `is_final`.
///
/// # Errors
///
/// Returns [`ReplayError`] if an action is illegal or the end state is not
/// final.
pub fn verify_solution<W>(
    world: &W,
    initial: W::State,
    actions: &[W::Action],
) -> Result<W::State, ReplayError>
where
    W: SearchWorld + ?Sized,
    W::Action: PartialEq,
{
    let end = replay(world, initial, actions)?;
    if world.is_final(&end) {
        Ok(end)
    } else {
        Err(ReplayError::NotFinal {
            steps: actions.len(),
        })
    }
}
