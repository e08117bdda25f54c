//! Root domain extraction.

use psl::{List, Psl};

/// Naive two-label root domain: `www.ex.org` and `store.ex.org` give `ex.org`.
///
/// Hosts with zero or one dot are returned whole. This does not consult the
/// Public Suffix List, so `foo.co.uk` gives `co.uk`; use
/// [`registrable_domain`] when that matters.
pub fn root_domain(domain: Option<&str>) -> Option<String> {
    let domain = domain?;
    let root = domain
        .rfind('.')
        .and_then(|last| domain[..last].rfind('.'))
        .map_or(domain, |second| &domain[second + 1..]);
    Some(root.to_string())
}

/// Registrable domain according to the Public Suffix List.
///
/// `api.example.co.uk` gives `example.co.uk`. `None` for hosts that are
/// themselves a public suffix or have a single label.
pub fn registrable_domain(host: &str) -> Option<String> {
    let host = host.trim_end_matches('.').to_lowercase();
    let domain = List.domain(host.as_bytes())?;
    std::str::from_utf8(domain.as_bytes()).ok().map(str::to_string)
}
