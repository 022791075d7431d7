//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhaustion, memory-budget aborts, caught callback
//! panics) are expressed via [`crate::outcome::TerminationReason`] and always
//! produce a [`crate::outcome::SearchOutcome`].

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No outcome is
/// produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy value is out of its valid range.
    InvalidPolicy { detail: String },
    /// A policy document could not be parsed.
    PolicyParse { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::PolicyParse { detail } => write!(f, "failed to parse search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
