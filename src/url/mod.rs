//! URL processing and manipulation.
//!
//! This module contains the URL model:
//! - Lenient splitting of absolute and relative URLs
//! - The ordered query-string model
//! - The mutable parsed URL with defaulting and derived accessors
//! - Root domain heuristics, naive and Public Suffix List aware

pub mod domain;
pub mod filter;
pub mod options;
pub mod parsed;
pub mod query;
pub mod split;

// Re-export main functionality
pub use domain::{registrable_domain, root_domain};
pub use filter::{TrimFilter, UrlFilter};
pub use options::UrlOptions;
pub use parsed::ParsedUrl;
pub use query::QueryString;
pub use split::{hostname, port, split_url};
