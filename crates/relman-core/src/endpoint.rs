//! Splitting URLs into endpoint and path.

use url::Url;

/// Network location and path of a URL string, copied verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// Text between `//` and the path, empty when the string has no authority.
    pub endpoint: String,
    /// Path component, without query or fragment.
    pub path: String,
}

impl UrlParts {
    /// Split `raw` into endpoint and path.
    ///
    /// Never fails and never rewrites the input: case, percent escapes,
    /// dot segments and ports are kept as written. Strings that are not
    /// absolute URLs (for example `registry.example.com/team/image`) have
    /// no endpoint and keep the whole string as the path.
    pub fn parse(raw: &str) -> Self {
        let without_suffix = strip_query_and_fragment(raw);

        // The url crate only decides whether a scheme prefix is present.
        let rest = Url::parse(raw)
            .ok()
            .and_then(|url| strip_scheme(without_suffix, url.scheme()))
            .unwrap_or(without_suffix);

        match rest.strip_prefix("//") {
            Some(authority) => {
                let end = authority.find('/').unwrap_or(authority.len());
                Self {
                    endpoint: authority[..end].to_string(),
                    path: authority[end..].to_string(),
                }
            }
            None => Self {
                endpoint: String::new(),
                path: rest.to_string(),
            },
        }
    }
}

fn strip_scheme<'a>(raw: &'a str, scheme: &str) -> Option<&'a str> {
    let prefix = raw.get(..scheme.len())?;
    if !prefix.eq_ignore_ascii_case(scheme) {
        return None;
    }
    raw[scheme.len()..].strip_prefix(':')
}

fn strip_query_and_fragment(raw: &str) -> &str {
    match raw.find(['?', '#']) {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}
