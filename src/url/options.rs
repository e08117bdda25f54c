//! Construction options for [`ParsedUrl`](crate::ParsedUrl).

use std::fmt;
use std::sync::Arc;

use crate::url::filter::{TrimFilter, UrlFilter};

/// How a raw string becomes a [`ParsedUrl`](crate::ParsedUrl).
///
/// # Examples
///
/// ```
/// use urlkit::{ParsedUrl, UrlOptions};
///
/// let options = UrlOptions::new()
///     .with_default_authority("ex.org")
///     .with_default_scheme("https");
/// let url = ParsedUrl::with_options("/?id=1&b=2", &options).unwrap();
/// assert_eq!(url.to_string(), "https://ex.org/?id=1&b=2");
/// ```
#[derive(Clone)]
pub struct UrlOptions {
    /// Authority used when the input has none.
    pub default_authority: Option<String>,
    /// Scheme used when the input has none and an authority is known.
    pub default_scheme: Option<String>,
    /// Split `#...` into the fragment. When false it stays in the path or query.
    pub keep_fragment: bool,
    /// Normalization applied to the raw input before splitting.
    pub filter: Arc<dyn UrlFilter + Send + Sync>,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_authority(mut self, authority: impl Into<String>) -> Self {
        self.default_authority = Some(authority.into());
        self
    }

    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = Some(scheme.into());
        self
    }

    pub fn keep_fragment(mut self, keep: bool) -> Self {
        self.keep_fragment = keep;
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: UrlFilter + Send + Sync + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }

    /// A leading `//` on the configured authority is ignored.
    pub(crate) fn default_authority(&self) -> Option<&str> {
        self.default_authority
            .as_deref()
            .map(|a| a.trim_start_matches('/'))
            .filter(|a| !a.is_empty())
    }

    /// Trimmed and lowercased, `None` when blank.
    pub(crate) fn default_scheme(&self) -> Option<String> {
        self.default_scheme
            .as_deref()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
    }
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            default_authority: None,
            default_scheme: None,
            keep_fragment: true,
            filter: Arc::new(TrimFilter),
        }
    }
}

impl fmt::Debug for UrlOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlOptions")
            .field("default_authority", &self.default_authority)
            .field("default_scheme", &self.default_scheme)
            .field("keep_fragment", &self.keep_fragment)
            .finish_non_exhaustive()
    }
}
