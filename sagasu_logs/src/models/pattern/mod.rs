use anyhow::{Context, Result};
use regex::Regex;

/// A log-group name, or a name pattern where `*` spans any run of
/// characters. Matching is anchored: `"*service*"` must cover the whole
/// group name.
#[derive(Debug, PartialEq, Clone)]
pub struct GroupPattern(String);

impl GroupPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_wildcard(&self) -> bool {
        self.0.contains('*')
    }

    pub fn to_regex(&self) -> Result<Regex> {
        let literals = self
            .0
            .split('*')
            .map(|part| regex::escape(part))
            .collect::<Vec<_>>()
            .join(".*");
        Regex::new(&format!("^{}$", literals))
            .with_context(|| format!("failed to build a matcher for {:?}", self.0))
    }
}
