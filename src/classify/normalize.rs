//! Referer and page URL normalization.
//!
//! Parsing follows WHATWG URL semantics via the `url` crate: hosts of special
//! schemes are lowercased, userinfo is split off the host, and default ports
//! are dropped.

use std::borrow::Cow;

use thiserror::Error;
use url::{ParseError, Url};

/// Why a referer could not be normalized.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid URL: {0}")]
    Parse(#[from] ParseError),

    /// Parsed, but there is no hostname to attribute (e.g. `mailto:`).
    #[error("URL has no host")]
    NoHost,
}

/// A parsed URL with a non-empty host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    url: Url,
    hostname: String,
    host: String,
}

impl ParsedUrl {
    pub fn parse(input: &str) -> Result<Self, NormalizeError> {
        Self::from_url(Url::parse(input)?)
    }

    pub fn from_url(url: Url) -> Result<Self, NormalizeError> {
        let hostname = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(NormalizeError::NoHost),
        };
        let host = match url.port() {
            Some(port) => format!("{}:{}", hostname, port),
            None => hostname.clone(),
        };
        Ok(Self {
            url,
            hostname,
            host,
        })
    }

    /// Hostname without port.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Hostname plus `:port` when a non-default port is present.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// First value of a query parameter, form-urlencoded decoded.
    pub fn query_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Result of normalizing a referer against an optional page URL.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub referer: Result<ParsedUrl, NormalizeError>,
    /// `None` when no page URL was given or it failed to parse.
    pub page: Option<ParsedUrl>,
}

/// Parses the referer and page URLs.
///
/// A referer without a scheme is resolved against the page URL when one is
/// given and parses; otherwise it fails. The page URL is parsed independently,
/// so a bad page URL does not invalidate an absolute referer.
pub fn normalize(referer: &str, page: Option<&str>) -> Normalized {
    let page_url = page.map(Url::parse);

    let referer = match Url::parse(referer) {
        Err(ParseError::RelativeUrlWithoutBase) => match &page_url {
            Some(Ok(base)) => base.join(referer).map_err(NormalizeError::from),
            _ => Err(NormalizeError::Parse(ParseError::RelativeUrlWithoutBase)),
        },
        parsed => parsed.map_err(NormalizeError::from),
    }
    .and_then(ParsedUrl::from_url);

    let page = page_url
        .and_then(Result::ok)
        .and_then(|url| ParsedUrl::from_url(url).ok());

    Normalized { referer, page }
}
