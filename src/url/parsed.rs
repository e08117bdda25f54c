//! Mutable parsed URL with defaulting and convenience accessors.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::UrlError;
use crate::types::{UrlComponentType, UrlComponents};
use crate::url::domain;
use crate::url::options::UrlOptions;
use crate::url::query::QueryString;
use crate::url::split::{self, split_url};

/// A URL (absolute, scheme-relative or relative) split into mutable components.
///
/// Construction fills in a default authority and scheme when the input lacks
/// them and never leaves a scheme without an authority, so relative input
/// cannot turn into `https:/path`. Every setter writes straight into the
/// components and the next [`to_string`](ToString::to_string) reflects it.
///
/// # Examples
///
/// ```
/// use urlkit::ParsedUrl;
///
/// let mut url = ParsedUrl::new("//localhost:8000/test/index.html?x=1&y=2#test")?;
/// url.set_domain("test.local.net");
/// assert_eq!(url.to_string(), "//test.local.net:8000/test/index.html?x=1&y=2#test");
/// assert_eq!(url.filename(), "index.html");
/// assert_eq!(url.relative(), "/test/index.html?x=1&y=2#test");
///
/// url.set_param("v", 4);
/// assert_eq!(url.query(), "x=1&y=2&v=4");
/// # Ok::<(), urlkit::UrlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    original: String,
    components: UrlComponents,
}

impl ParsedUrl {
    /// Parse `raw` with default [`UrlOptions`].
    pub fn new(raw: &str) -> Result<Self, UrlError> {
        Self::with_options(raw, &UrlOptions::default())
    }

    /// Parse `raw`, applying the defaults and filter in `options`.
    pub fn with_options(raw: &str, options: &UrlOptions) -> Result<Self, UrlError> {
        Self::parse_optional(Some(raw), options)
    }

    /// Like [`with_options`](Self::with_options) but accepts absent input,
    /// which fails the same way empty input does.
    pub fn parse_optional(raw: Option<&str>, options: &UrlOptions) -> Result<Self, UrlError> {
        let filtered = raw.map(|r| options.filter.filter(r));
        let input = match filtered {
            Some(input) if !input.is_empty() => input,
            other => return Err(UrlError::invalid(other.as_deref())),
        };

        let default_scheme = options.default_scheme();
        let mut components = split_url(&input, default_scheme.as_deref(), options.keep_fragment);

        if !components.has_authority() {
            if let Some(authority) = options.default_authority() {
                debug!("using default authority {} for {}", authority, input);
                components.authority = authority.to_string();
            }
        }
        if !components.has_scheme() && components.has_authority() {
            if let Some(scheme) = default_scheme {
                debug!("using default scheme {} for {}", scheme, input);
                components.scheme = scheme;
            }
        }
        drop_orphan_scheme(&mut components, &input);

        Ok(ParsedUrl {
            original: input,
            components,
        })
    }

    /// The input after filtering, as it was before any defaulting.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    /// Direct access to the components. No correction rule is re-applied.
    pub fn components_mut(&mut self) -> &mut UrlComponents {
        &mut self.components
    }

    pub fn set_components(&mut self, components: UrlComponents) {
        trace!("replacing components of {} with {:?}", self, components);
        self.components = components;
    }

    pub fn into_components(self) -> UrlComponents {
        self.components
    }

    /// Full URL string, as much of it as is known.
    pub fn url(&self) -> String {
        self.components.to_string()
    }

    pub fn scheme(&self) -> &str {
        &self.components.scheme
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.components.scheme = scheme.into();
        trace!("scheme set: {}", self);
    }

    /// Authority (netloc): `[userinfo@]host[:port]`.
    pub fn authority(&self) -> &str {
        &self.components.authority
    }

    pub fn set_authority(&mut self, authority: impl Into<String>) {
        self.components.authority = authority.into();
        trace!("authority set: {}", self);
    }

    /// Lowercased host without userinfo or port, `None` without an authority.
    pub fn domain(&self) -> Option<String> {
        split::hostname(&self.components.authority)
    }

    /// Replace the host inside the authority.
    ///
    /// Userinfo is kept. The current port is re-appended unless `domain`
    /// carries a port of its own or the port is 0. An empty `domain` clears
    /// the whole authority, since userinfo and port need a host.
    pub fn set_domain(&mut self, domain: &str) {
        if domain.is_empty() {
            self.components.authority.clear();
            trace!("domain cleared: {}", self);
            return;
        }
        let mut authority = split::userinfo(&self.components.authority).to_string();
        authority.push_str(domain);
        if let Some(port) = self.port().filter(|p| *p != 0) {
            if !has_port_segment(domain) {
                authority.push(':');
                authority.push_str(&port.to_string());
            }
        }
        self.components.authority = authority;
        trace!("domain set: {}", self);
    }

    /// Port from the authority. `None` when absent or not a valid port number.
    pub fn port(&self) -> Option<u16> {
        split::port(&self.components.authority)
    }

    pub fn path(&self) -> &str {
        &self.components.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.components.path = path.into();
        trace!("path set: {}", self);
    }

    /// Raw query string without the '?'.
    pub fn query(&self) -> &str {
        &self.components.query
    }

    /// Replace the whole query string.
    ///
    /// The value is stored as given: it is neither validated nor reformatted,
    /// so the caller controls the exact text after the '?'.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.components.query = query.into();
        trace!("query set: {}", self);
    }

    pub fn fragment(&self) -> &str {
        &self.components.fragment
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.components.fragment = fragment.into();
        trace!("fragment set: {}", self);
    }

    /// Last path segment (`index.html` for `/test/index.html`).
    pub fn filename(&self) -> &str {
        let path = &self.components.path;
        path.rfind('/').map_or(path.as_str(), |i| &path[i + 1..])
    }

    /// Path without its last segment (`/test` for `/test/index.html`).
    ///
    /// Trailing slashes are dropped unless the result is only slashes.
    pub fn filepath(&self) -> &str {
        let path = &self.components.path;
        match path.rfind('/') {
            Some(i) => {
                let head = &path[..=i];
                let stripped = head.trim_end_matches('/');
                if stripped.is_empty() {
                    head
                } else {
                    stripped
                }
            }
            None => "",
        }
    }

    /// Extension of the filename including the dot, or "".
    ///
    /// Leading dots do not start an extension: `.profile` has none.
    pub fn file_extension(&self) -> &str {
        let name = self.filename();
        match name.rfind('.') {
            Some(dot) if name[..dot].bytes().any(|b| b != b'.') => &name[dot..],
            _ => "",
        }
    }

    /// URL without query and fragment.
    pub fn base(&self) -> String {
        self.components.without_query_and_fragment().to_string()
    }

    /// URL without scheme and authority, query and fragment kept.
    pub fn relative(&self) -> String {
        self.components.without_scheme_and_authority().to_string()
    }

    /// Two-label heuristic over [`domain`](Self::domain); see [`domain::root_domain`].
    pub fn root_domain(&self) -> Option<String> {
        domain::root_domain(self.domain().as_deref())
    }

    /// Public Suffix List aware registrable domain of the host.
    pub fn registrable_domain(&self) -> Option<String> {
        self.domain().and_then(|d| domain::registrable_domain(&d))
    }

    /// The current query parsed into a [`QueryString`].
    pub fn query_string(&self) -> QueryString {
        QueryString::new(&self.components.query)
    }

    pub fn get_param(&self, key: &str) -> Option<String> {
        self.query_string().get(key).map(str::to_string)
    }

    /// Add or replace one query parameter, leaving the others in place.
    pub fn set_param(&mut self, key: &str, value: impl fmt::Display) {
        let mut qs = self.query_string();
        qs.set(key, value);
        self.components.query = qs.to_string();
        trace!("param {} set: {}", key, self);
    }

    /// Remove one query parameter. The query is re-serialized even if `key` was absent.
    pub fn del_param(&mut self, key: &str) {
        let mut qs = self.query_string();
        qs.delete(key);
        self.components.query = qs.to_string();
        trace!("param {} deleted: {}", key, self);
    }

    /// Value of a component or derived property as a string.
    ///
    /// `None` when the value is absent or empty.
    pub fn component(&self, kind: UrlComponentType) -> Option<String> {
        let value = match kind {
            UrlComponentType::Scheme => self.scheme().to_string(),
            UrlComponentType::Authority => self.authority().to_string(),
            UrlComponentType::Domain => self.domain()?,
            UrlComponentType::Port => self.port()?.to_string(),
            UrlComponentType::Path => self.path().to_string(),
            UrlComponentType::Query => self.query().to_string(),
            UrlComponentType::Fragment => self.fragment().to_string(),
            UrlComponentType::Filename => self.filename().to_string(),
            UrlComponentType::Filepath => self.filepath().to_string(),
            UrlComponentType::FileExtension => self.file_extension().to_string(),
            UrlComponentType::Base => self.base(),
            UrlComponentType::Relative => self.relative(),
            UrlComponentType::RootDomain => self.root_domain()?,
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Convert into a fully parsed `url::Url`.
    ///
    /// Requires both a scheme and an authority.
    pub fn to_absolute(&self) -> Result<url::Url, UrlError> {
        if !self.components.has_scheme() || !self.components.has_authority() {
            return Err(UrlError::NotAbsolute(self.to_string()));
        }
        Ok(url::Url::parse(&self.to_string())?)
    }
}

/// A scheme without an authority would serialize as `https:/path`; drop it.
fn drop_orphan_scheme(components: &mut UrlComponents, input: &str) {
    if !components.has_authority() && components.has_scheme() {
        debug!("dropping scheme {} from {}: no authority", components.scheme, input);
        components.scheme.clear();
    }
}

fn has_port_segment(host: &str) -> bool {
    match host.rfind(']') {
        Some(close) => host[close..].contains(':'),
        None => host.contains(':'),
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.components, f)
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedUrl::new(s)
    }
}

impl TryFrom<&str> for ParsedUrl {
    type Error = UrlError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        ParsedUrl::new(raw)
    }
}

impl TryFrom<String> for ParsedUrl {
    type Error = UrlError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        ParsedUrl::new(&raw)
    }
}

impl From<&url::Url> for ParsedUrl {
    fn from(url: &url::Url) -> Self {
        use url::Position;

        let mut components = UrlComponents::new(
            url.scheme(),
            &url[Position::BeforeUsername..Position::AfterPort],
            url.path(),
            url.query().unwrap_or(""),
            url.fragment().unwrap_or(""),
        );
        drop_orphan_scheme(&mut components, url.as_str());
        ParsedUrl {
            original: url.as_str().to_string(),
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_defaults() {
        let url = ParsedUrl::new("/?id=1&b=2").unwrap();
        assert_eq!(url.scheme(), "");
        assert_eq!(url.authority(), "");
        assert_eq!(url.path(), "/");
        assert_eq!(url.query(), "id=1&b=2");
        assert_eq!(url.to_string(), "/?id=1&b=2");
    }

    #[test]
    fn test_original_is_filtered_input() {
        let url = ParsedUrl::new("  /index.html ").unwrap();
        assert_eq!(url.original(), "/index.html");
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(ParsedUrl::new(""), Err(UrlError::InvalidUrl { input: Some(String::new()) }));
        assert!(ParsedUrl::new(" \t ").is_err());
        assert_eq!(
            ParsedUrl::parse_optional(None, &UrlOptions::default()),
            Err(UrlError::InvalidUrl { input: None })
        );
    }

    #[test]
    fn test_default_authority_with_leading_slashes() {
        let options = UrlOptions::new().with_default_authority("//www.ex.org");
        let url = ParsedUrl::with_options("test.html", &options).unwrap();
        assert_eq!(url.to_string(), "//www.ex.org/test.html");
    }

    #[test]
    fn test_existing_authority_wins_over_default() {
        let options = UrlOptions::new().with_default_authority("www.ex.org");
        let url = ParsedUrl::with_options("https://www.site2.com/something/", &options).unwrap();
        assert_eq!(url.to_string(), "https://www.site2.com/something/");
    }

    #[test]
    fn test_keep_fragment_false() {
        let options = UrlOptions::new().keep_fragment(false);
        let url = ParsedUrl::with_options("/page?x=1#top", &options).unwrap();
        assert_eq!(url.fragment(), "");
        assert_eq!(url.query(), "x=1#top");
        assert_eq!(url.to_string(), "/page?x=1#top");
    }

    #[test]
    fn test_custom_filter() {
        let options = UrlOptions::new().with_filter(|raw: &str| raw.trim().replace("http:", "https:"));
        let url = ParsedUrl::with_options(" http://ex.org/ ", &options).unwrap();
        assert_eq!(url.scheme(), "https");

        let blank = UrlOptions::new().with_filter(|_: &str| String::new());
        assert!(ParsedUrl::with_options("/x", &blank).is_err());
    }

    #[test]
    fn test_domain_and_port() {
        let url = ParsedUrl::new("https://user:pw@WWW.Ex.org:8443/").unwrap();
        assert_eq!(url.domain(), Some("www.ex.org".to_string()));
        assert_eq!(url.port(), Some(8443));

        let relative = ParsedUrl::new("/a").unwrap();
        assert_eq!(relative.domain(), None);
        assert_eq!(relative.port(), None);
    }

    #[test]
    fn test_set_domain_keeps_userinfo_and_port() {
        let mut url = ParsedUrl::new("//user@localhost:8000/").unwrap();
        url.set_domain("ex.org");
        assert_eq!(url.authority(), "user@ex.org:8000");

        url.set_domain("ex.org:9000");
        assert_eq!(url.authority(), "user@ex.org:9000");
        assert_eq!(url.port(), Some(9000));
    }

    #[test]
    fn test_set_domain_on_relative_url() {
        let mut url = ParsedUrl::new("/?id=1&b=2").unwrap();
        url.set_domain("ex.org");
        assert_eq!(url.to_string(), "//ex.org/?id=1&b=2");
        assert_eq!(url.root_domain(), url.domain());
    }

    #[test]
    fn test_file_properties() {
        let url = ParsedUrl::new("/test/index.html").unwrap();
        assert_eq!(url.filename(), "index.html");
        assert_eq!(url.filepath(), "/test");
        assert_eq!(url.file_extension(), ".html");

        let root = ParsedUrl::new("/index.tar.gz").unwrap();
        assert_eq!(root.filepath(), "/");
        assert_eq!(root.file_extension(), ".gz");

        let dir = ParsedUrl::new("/docs/api/").unwrap();
        assert_eq!(dir.filename(), "");
        assert_eq!(dir.filepath(), "/docs/api");
        assert_eq!(dir.file_extension(), "");

        let bare = ParsedUrl::new("page").unwrap();
        assert_eq!(bare.filename(), "page");
        assert_eq!(bare.filepath(), "");

        let hidden = ParsedUrl::new("/home/.profile").unwrap();
        assert_eq!(hidden.file_extension(), "");
    }

    #[test]
    fn test_params_on_empty_query() {
        let mut url = ParsedUrl::new("https://ex.org/search").unwrap();
        assert_eq!(url.get_param("q"), None);
        url.set_param("q", "rust");
        assert_eq!(url.to_string(), "https://ex.org/search?q=rust");
        url.del_param("q");
        assert_eq!(url.to_string(), "https://ex.org/search");
    }

    #[test]
    fn test_del_param_normalizes_query() {
        let mut url = ParsedUrl::new("/?a=1&junk&b=2").unwrap();
        url.del_param("missing");
        assert_eq!(url.query(), "a=1&b=2");
    }

    #[test]
    fn test_component_lookup() {
        let url = ParsedUrl::new("https://www.ex.org:8080/a/b.txt?x=1#f").unwrap();
        assert_eq!(url.component(UrlComponentType::Port), Some("8080".to_string()));
        assert_eq!(url.component(UrlComponentType::RootDomain), Some("ex.org".to_string()));
        assert_eq!(url.component(UrlComponentType::FileExtension), Some(".txt".to_string()));

        let relative = ParsedUrl::new("/a").unwrap();
        assert_eq!(relative.component(UrlComponentType::Domain), None);
        assert_eq!(relative.component(UrlComponentType::Query), None);
    }

    #[test]
    fn test_to_absolute() {
        let url = ParsedUrl::new("https://ex.org/a?x=1").unwrap();
        let absolute = url.to_absolute().unwrap();
        assert_eq!(absolute.host_str(), Some("ex.org"));
        assert_eq!(absolute.query(), Some("x=1"));

        let relative = ParsedUrl::new("//ex.org/a").unwrap();
        assert_eq!(
            relative.to_absolute(),
            Err(UrlError::NotAbsolute("//ex.org/a".to_string()))
        );
    }

    #[test]
    fn test_from_url_crate() {
        let parsed = url::Url::parse("https://user@ex.org:8443/a/b?x=1#top").unwrap();
        let url = ParsedUrl::from(&parsed);
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.authority(), "user@ex.org:8443");
        assert_eq!(url.path(), "/a/b");
        assert_eq!(url.to_string(), "https://user@ex.org:8443/a/b?x=1#top");
    }

    #[test]
    fn test_from_url_crate_without_authority() {
        let file = url::Url::parse("file:///tmp/a.txt").unwrap();
        let url = ParsedUrl::from(&file);
        assert_eq!(url.scheme(), "");
        assert_eq!(url.authority(), "");
        assert_eq!(url.to_string(), "/tmp/a.txt");

        let mailto = url::Url::parse("mailto:someone@ex.org").unwrap();
        let url = ParsedUrl::from(&mailto);
        assert_eq!(url.scheme(), "");
        assert_eq!(url.to_string(), "someone@ex.org");
    }

    #[test]
    fn test_default_scheme_is_normalized() {
        let blank = UrlOptions::new().with_default_authority("ex.org").with_default_scheme("  ");
        assert_eq!(ParsedUrl::with_options("/a", &blank).unwrap().to_string(), "//ex.org/a");

        let upper = UrlOptions::new().with_default_authority("ex.org").with_default_scheme(" HTTPS ");
        let url = ParsedUrl::with_options("/a", &upper).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.to_string(), "https://ex.org/a");
    }

    #[test]
    fn test_set_domain_skips_zero_port() {
        let mut url = ParsedUrl::new("//localhost:0/").unwrap();
        url.set_domain("ex.org");
        assert_eq!(url.authority(), "ex.org");
    }

    #[test]
    fn test_set_domain_empty_clears_authority() {
        let mut url = ParsedUrl::new("//user@localhost:8000/a").unwrap();
        url.set_domain("");
        assert_eq!(url.authority(), "");
        assert_eq!(url.domain(), None);
        assert_eq!(url.to_string(), "/a");
    }

    #[test]
    fn test_registrable_domain() {
        let url = ParsedUrl::new("https://shop.example.co.uk/").unwrap();
        assert_eq!(url.root_domain(), Some("co.uk".to_string()));
        assert_eq!(url.registrable_domain(), Some("example.co.uk".to_string()));
    }
}
