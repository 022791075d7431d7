//! Search policy: depth and memory budgets.

use serde::Deserialize;

use crate::error::SearchError;

/// Default safety multiplier applied to the memory delta.
pub const DEFAULT_GUARD_MULTIPLIER: u64 = 4;

/// Default depth limit for depth-first search.
pub const DEFAULT_DEPTH_LIMIT: u32 = 64;

/// Budget configuration for one search call.
///
/// Missing fields in a policy document take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// DFS does not expand a node whose depth is at or beyond this value.
    pub depth_limit: u32,
    /// Memory budget in bytes for BFS and A*. `None` disables the guard.
    ///
    /// The default footprint estimate counts shallow state sizes only, so a
    /// state with heap-owned parts is under-counted unless its world reports
    /// a per-entry size.
    pub memory_limit_bytes: Option<u64>,
    /// Multiplier `K` in `current + K * delta > limit`.
    pub guard_multiplier: u64,
    /// Sample the memory probe every N expansion rounds.
    pub guard_sample_interval: u64,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            memory_limit_bytes: None,
            guard_multiplier: DEFAULT_GUARD_MULTIPLIER,
            guard_sample_interval: 1,
        }
    }
}

impl SearchPolicy {
    /// Parse a policy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PolicyParse`] if the document is not valid JSON
    /// or has unknown fields, and [`SearchError::InvalidPolicy`] if it parses
    /// but fails [`SearchPolicy::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, SearchError> {
        let policy: Self = serde_json::from_str(text).map_err(|e| SearchError::PolicyParse {
            detail: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Validate value ranges before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `guard_sample_interval` or
    /// `guard_multiplier` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.guard_sample_interval == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "guard_sample_interval must be >= 1".into(),
            });
        }
        if self.guard_multiplier == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "guard_multiplier must be >= 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON value (sorted keys) used for digests.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limit": self.depth_limit,
            "guard_multiplier": self.guard_multiplier,
            "guard_sample_interval": self.guard_sample_interval,
            "memory_limit_bytes": self.memory_limit_bytes,
        })
    }
}
