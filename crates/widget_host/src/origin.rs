//! Origin and session-parameter sanitization for embedding page URLs.

use url::Url;

/// Query parameter carrying the one-shot session token handed back after sign-in.
pub const SESSION_PARAM: &str = "giscus";

/// Sanitized embedding-page URL paired with its origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginHost {
    /// Full URL with the session parameter removed.
    pub origin: String,
    /// Scheme, host and port of the URL (`"null"` for opaque origins).
    pub origin_host: String,
}

/// Parses `origin`, drops the session parameter, and returns the URL with its origin.
///
/// Malformed input yields empty strings for both fields instead of an error.
pub fn get_origin_host(origin: &str) -> OriginHost {
    origin_host_without(origin, SESSION_PARAM)
}

/// Drops the session parameter from `url`, returning the input unchanged when it does not parse.
pub fn clean_session_param(url: &str) -> String {
    clean_param(url, SESSION_PARAM)
}

pub(crate) fn origin_host_without(origin: &str, param: &str) -> OriginHost {
    match Url::parse(origin) {
        Ok(mut url) => {
            strip_query_param(&mut url, param);
            OriginHost {
                origin: url.to_string(),
                origin_host: url.origin().ascii_serialization(),
            }
        }
        Err(err) => {
            tracing::debug!(%err, origin, "origin is not an absolute url");
            OriginHost::default()
        }
    }
}

pub(crate) fn clean_param(raw: &str, param: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            strip_query_param(&mut url, param);
            url.into()
        }
        Err(err) => {
            tracing::debug!(%err, url = raw, "leaving unparseable url untouched");
            raw.to_string()
        }
    }
}

/// Removes every `param` pair, re-serializing the remaining query as form-urlencoded.
///
/// URLs without a query are left alone; an emptied query drops the `?` entirely.
fn strip_query_param(url: &mut Url, param: &str) {
    if url.query().is_none() {
        return;
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}
