//! Search policy files.
//!
//! A policy file is a JSON object with the [`SearchPolicy`] fields. Missing
//! fields take their defaults; unknown fields are rejected. The file is
//! validated before it is returned.

use std::path::Path;

use statespace_search::error::SearchError;
use statespace_search::policy::SearchPolicy;

/// Error loading a policy file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// The file was read but is not a valid policy.
    Policy(SearchError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read policy file {path}: {detail}"),
            Self::Policy(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { .. } => None,
            Self::Policy(err) => Some(err),
        }
    }
}

impl From<SearchError> for ConfigError {
    fn from(err: SearchError) -> Self {
        Self::Policy(err)
    }
}

/// Read and validate a policy file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Policy`] if its content is not a valid policy.
pub fn load_policy(path: &Path) -> Result<SearchPolicy, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    let policy = SearchPolicy::from_json_str(&text)?;
    tracing::debug!(path = %path.display(), ?policy, "loaded search policy");
    Ok(policy)
}
