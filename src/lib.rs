//! urlkit - mutable parsed URLs and query strings
//!
//! This crate wraps a split URL (scheme, authority, path, query, fragment) in a
//! small mutable model: relative input can be completed with a default authority
//! and scheme, derived values such as the file name or root domain are one call
//! away, and single query parameters can be changed without touching the rest.
//!
//! # Quick Start
//!
//! ```
//! use urlkit::{ParsedUrl, QueryString, UrlOptions};
//!
//! // Complete a relative URL
//! let options = UrlOptions::new()
//!     .with_default_authority("ex.org")
//!     .with_default_scheme("https");
//! let mut url = ParsedUrl::with_options("/docs/index.html?page=1", &options)?;
//! assert_eq!(url.to_string(), "https://ex.org/docs/index.html?page=1");
//!
//! // Derived values
//! assert_eq!(url.filename(), "index.html");
//! assert_eq!(url.file_extension(), ".html");
//! assert_eq!(url.relative(), "/docs/index.html?page=1");
//!
//! // Edit one parameter
//! url.set_param("page", 2);
//! assert_eq!(url.get_param("page").as_deref(), Some("2"));
//!
//! // Query strings on their own
//! let qs = QueryString::new("?token=YWJj==&x=1");
//! assert_eq!(qs.get("token"), Some("YWJj=="));
//! # Ok::<(), urlkit::UrlError>(())
//! ```
//!
//! # Rules
//!
//! - A scheme is never kept without an authority: `ParsedUrl::new("https:/a")`
//!   serializes as `/a`.
//! - Query strings are lenient: segments without `=` are dropped, values may
//!   contain `=`, a repeated key keeps its first position and its last value.
//! - Nothing is percent-encoded or decoded.
//! - [`ParsedUrl::root_domain`] is a two-label heuristic (`foo.co.uk` gives
//!   `co.uk`); [`ParsedUrl::registrable_domain`] consults the Public Suffix List.
//!
//! # Error Handling
//!
//! Only construction can fail, with [`UrlError::InvalidUrl`] when the input is
//! absent or empty after filtering. Conversion to a `url::Url` via
//! [`ParsedUrl::to_absolute`] fails for URLs without scheme or authority.
//!
//! # Naming
//!
//! The crate has a public `url` module. After `use urlkit::*;` the bare name
//! `url` refers to that module, not to the `url` crate; write `::url::Url`
//! or import the items you need by name.

// Re-export the URL model
pub use crate::url::{
    hostname, port, registrable_domain, root_domain, split_url, ParsedUrl, QueryString,
    TrimFilter, UrlFilter, UrlOptions,
};

// Re-export public types
pub use error::UrlError;
pub use types::{UrlComponentType, UrlComponents};

// Module declarations
pub mod error;
pub mod types;
pub mod url;
