//! Path reconstruction from closed-set parent links.

use crate::closed::ClosedSet;

/// Reconstruct the action sequence from the initial state to `goal`.
///
/// Walks parent links backward from `goal` until the root sentinel, then
/// reverses. The walk is bounded by the goal's recorded depth: each step
/// moves to a state exactly one shallower, so no state is visited twice and
/// the result has exactly `depth` actions.
///
/// Returns `None` if `goal` is not in the closed set or the chain is broken
/// (a missing parent, a depth that does not decrease by one, or a root
/// reached early). Those are closed-set invariant violations.
#[must_use]
pub fn reconstruct_path<S, A>(closed: &ClosedSet<S, A>, goal: &S) -> Option<Vec<A>>
where
    S: Ord,
    A: Clone,
{
    let goal_entry = closed.lookup(goal)?;
    let mut actions = Vec::with_capacity(goal_entry.depth as usize);
    let mut entry = goal_entry;

    while let Some(link) = &entry.link {
        let parent = closed.lookup(&link.parent)?;
        if parent.depth.checked_add(1) != Some(entry.depth) {
            return None;
        }
        actions.push(link.action.clone());
        entry = parent;
    }

    if entry.depth != 0 {
        return None;
    }

    actions.reverse();
    Some(actions)
}
