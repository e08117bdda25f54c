//! Input normalization applied before a URL is split.

/// Rewrites raw URL input before it is split.
///
/// The default, [`TrimFilter`], only strips surrounding whitespace. Any
/// `Fn(&str) -> String` closure is a filter too.
pub trait UrlFilter {
    fn filter(&self, raw: &str) -> String;
}

/// Strips leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimFilter;

impl UrlFilter for TrimFilter {
    fn filter(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}

impl<F> UrlFilter for F
where
    F: Fn(&str) -> String,
{
    fn filter(&self, raw: &str) -> String {
        self(raw)
    }
}
