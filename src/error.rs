//! Error types for URL construction and conversion.

use thiserror::Error;

/// Errors that can occur while building or converting a [`ParsedUrl`](crate::ParsedUrl).
///
/// Construction has a single gate: the input must be non-empty after filtering.
/// Everything else on a constructed URL is total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input was absent, or empty after the filter hook ran.
    #[error("Attempted to parse [{}]: url must exist and be a relative or absolute url after filtering", .input.as_deref().unwrap_or("None"))]
    InvalidUrl {
        /// The filtered input, `None` when no input was given at all.
        input: Option<String>,
    },

    /// The URL has no scheme or no authority and cannot become an absolute `url::Url`.
    #[error("Url is not absolute: {0}")]
    NotAbsolute(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl UrlError {
    pub(crate) fn invalid(input: Option<&str>) -> Self {
        UrlError::InvalidUrl {
            input: input.map(str::to_string),
        }
    }
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::UrlParseError(err.to_string())
    }
}
