//! Locator grammar.
//!
//! Turns `<scheme>://<host>/<path>[#<ref>][?<query>]` strings into their
//! components. The raw string is rewritten before decomposition:
//! separators are unified, a fragment munged into the middle of the path is
//! moved to the end, and an empty host becomes [`GLOBAL_PATH_HOST`].

mod normalize;
mod query;

pub use normalize::{
    normalize_separators, relocate_fragment, rewrite_global_host, strip_drive_letter_slash,
    GLOBAL_PATH_HOST,
};
pub use query::Arguments;

use crate::error::{LocatorError, LocatorResult};
use serde::Serialize;

/// Components of a parsed locator. Absent parts are `None`, never `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedComponents {
    pub scheme: String,
    pub host: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Parses a raw locator registered under `scheme`.
///
/// Fails only when the normalized string is not a URI at all.
///
/// # Examples
///
/// - `parse_locator("git:///a/b", "git")` → host `__global__`, path `/a/b`
/// - `parse_locator("git://h/a#rev/file.txt", "git")` → path `/a/file.txt`, fragment `rev`
pub fn parse_locator(raw: &str, scheme: &str) -> LocatorResult<ParsedComponents> {
    let normalized = normalize_separators(raw);
    let relocated = relocate_fragment(&normalized);
    if relocated != normalized {
        tracing::debug!(from = %normalized, to = %relocated, "relocated fragment");
    }
    let rewritten = rewrite_global_host(&relocated, scheme);

    let url = url::Url::parse(&rewritten).map_err(|source| LocatorError::MalformedLocator {
        locator: raw.to_string(),
        source,
    })?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .map(str::to_string);

    let path = Some(percent_decode(url.path()))
        .filter(|p| !p.is_empty())
        .map(|p| strip_drive_letter_slash(&p).map(str::to_string).unwrap_or(p));

    // `#ref?query` is folded into the fragment by URI rules; split it back out.
    let (fragment, query) = match (url.fragment(), url.query()) {
        (Some(fragment), None) => match fragment.split_once('?') {
            Some((fragment, query)) => (Some(fragment), Some(query)),
            None => (Some(fragment), None),
        },
        (fragment, query) => (fragment, query),
    };

    Ok(ParsedComponents {
        scheme: url.scheme().to_string(),
        host,
        path,
        query: query.map(str::to_string),
        fragment: fragment.map(percent_decode),
    })
}

fn percent_decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| s.to_string())
}
