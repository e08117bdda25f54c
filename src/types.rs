//! Core data structures for split URLs.

use std::fmt;
use std::str::FromStr;

/// The five components of a split URL.
///
/// Empty strings stand for absent components. This is a plain owned record:
/// setters on [`ParsedUrl`](crate::ParsedUrl) assign fields directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlComponents {
    /// URL scheme without the trailing ':' (https)
    pub scheme: String,
    /// Authority / netloc, `[userinfo@]host[:port]` (localhost:8000)
    pub authority: String,
    /// Path component (/test/index.html)
    pub path: String,
    /// Query string without the '?' (x=1&y=2)
    pub query: String,
    /// Fragment without the '#' (section1)
    pub fragment: String,
}

impl UrlComponents {
    /// Create new URL components.
    pub fn new(
        scheme: impl Into<String>,
        authority: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            authority: authority.into(),
            path: path.into(),
            query: query.into(),
            fragment: fragment.into(),
        }
    }

    /// Check if a scheme is present.
    pub fn has_scheme(&self) -> bool {
        !self.scheme.is_empty()
    }

    /// Check if an authority is present.
    pub fn has_authority(&self) -> bool {
        !self.authority.is_empty()
    }

    /// Check if query parameters are present.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Check if a fragment is present.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// Copy of these components with query and fragment cleared.
    pub fn without_query_and_fragment(&self) -> Self {
        Self {
            query: String::new(),
            fragment: String::new(),
            ..self.clone()
        }
    }

    /// Copy of these components with scheme and authority cleared.
    pub fn without_scheme_and_authority(&self) -> Self {
        Self {
            scheme: String::new(),
            authority: String::new(),
            ..self.clone()
        }
    }
}

/// Joins the components back into a URL string.
///
/// `scheme:` + `//authority` + path + `?query` + `#fragment`, where every empty
/// component is omitted together with its separator. With an authority present
/// a path that does not start with '/' gets one so host and path stay apart.
impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_scheme() {
            write!(f, "{}:", self.scheme)?;
        }
        if self.has_authority() {
            write!(f, "//{}", self.authority)?;
            if !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
        }
        f.write_str(&self.path)?;
        if self.has_query() {
            write!(f, "?{}", self.query)?;
        }
        if self.has_fragment() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Enum for specifying which URL component or derived value to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlComponentType {
    /// URL scheme (https)
    Scheme,
    /// Authority / netloc (www.example.com:8080)
    Authority,
    /// Bare host inside the authority (www.example.com)
    Domain,
    /// Port number
    Port,
    /// Path component (/test/index.html)
    Path,
    /// Query string (foo=bar&baz=qux)
    Query,
    /// Fragment/anchor (section1)
    Fragment,
    /// Last path segment (index.html)
    Filename,
    /// Path without its last segment (/test)
    Filepath,
    /// Extension of the filename including the dot (.html)
    FileExtension,
    /// URL without query and fragment
    Base,
    /// URL without scheme and authority
    Relative,
    /// Two-label root domain heuristic (example.com)
    RootDomain,
}

impl UrlComponentType {
    /// Every component type, in display order.
    pub const ALL: [UrlComponentType; 13] = [
        UrlComponentType::Scheme,
        UrlComponentType::Authority,
        UrlComponentType::Domain,
        UrlComponentType::Port,
        UrlComponentType::Path,
        UrlComponentType::Query,
        UrlComponentType::Fragment,
        UrlComponentType::Filename,
        UrlComponentType::Filepath,
        UrlComponentType::FileExtension,
        UrlComponentType::Base,
        UrlComponentType::Relative,
        UrlComponentType::RootDomain,
    ];

    /// Lowercase name used on the command line and in listings.
    pub fn name(self) -> &'static str {
        match self {
            UrlComponentType::Scheme => "scheme",
            UrlComponentType::Authority => "authority",
            UrlComponentType::Domain => "domain",
            UrlComponentType::Port => "port",
            UrlComponentType::Path => "path",
            UrlComponentType::Query => "query",
            UrlComponentType::Fragment => "fragment",
            UrlComponentType::Filename => "filename",
            UrlComponentType::Filepath => "filepath",
            UrlComponentType::FileExtension => "file_extension",
            UrlComponentType::Base => "base",
            UrlComponentType::Relative => "relative",
            UrlComponentType::RootDomain => "root_domain",
        }
    }
}

impl fmt::Display for UrlComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UrlComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        match wanted.as_str() {
            "netloc" => return Ok(UrlComponentType::Authority),
            "hostname" | "host" => return Ok(UrlComponentType::Domain),
            "qs" => return Ok(UrlComponentType::Query),
            "fileext" | "ext" => return Ok(UrlComponentType::FileExtension),
            "rel" => return Ok(UrlComponentType::Relative),
            _ => {}
        }
        UrlComponentType::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| format!("unknown url component: {}", s))
    }
}
