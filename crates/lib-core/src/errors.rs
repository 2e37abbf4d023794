use thiserror::Error;

use crate::highlighter::category::TokenCategory;

/// A rule pattern that failed to compile. The only failure path in the
/// crate; classification itself cannot fail.
#[derive(Debug, Error)]
#[error("invalid pattern for '{}': {}", .category.as_str(), .source)]
pub struct RulePatternError {
    pub category: TokenCategory,
    #[source]
    pub source: fancy_regex::Error,
}

/// An error which should be fed back to the user.
#[derive(Debug, Error)]
#[error("{value}")]
pub struct GlintUserError {
    pub value: String,
}

impl GlintUserError {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}
