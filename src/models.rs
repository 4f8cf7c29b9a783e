//! Attribution record types.
//!
//! `Attribution` is the only value `parse` produces. `Medium` is an open
//! enumeration: catalogs may introduce medium names beyond the well-known ones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level traffic category of a referral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Medium {
    Search,
    Social,
    Email,
    Video,
    Paid,
    Internal,
    Unknown,
    Invalid,
    Direct,
    /// A medium name introduced by the catalog.
    Other(String),
}

impl Medium {
    pub fn as_str(&self) -> &str {
        match self {
            Medium::Search => "search",
            Medium::Social => "social",
            Medium::Email => "email",
            Medium::Video => "video",
            Medium::Paid => "paid",
            Medium::Internal => "internal",
            Medium::Unknown => "unknown",
            Medium::Invalid => "invalid",
            Medium::Direct => "direct",
            Medium::Other(name) => name,
        }
    }
}

impl From<&str> for Medium {
    fn from(name: &str) -> Self {
        match name {
            "search" => Medium::Search,
            "social" => Medium::Social,
            "email" => Medium::Email,
            "video" => Medium::Video,
            "paid" => Medium::Paid,
            "internal" => Medium::Internal,
            "unknown" => Medium::Unknown,
            "invalid" => Medium::Invalid,
            "direct" => Medium::Direct,
            other => Medium::Other(other.to_string()),
        }
    }
}

impl From<String> for Medium {
    fn from(name: String) -> Self {
        match Medium::from(name.as_str()) {
            Medium::Other(_) => Medium::Other(name),
            known => known,
        }
    }
}

impl From<Medium> for String {
    fn from(medium: Medium) -> Self {
        match medium {
            Medium::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic attribution for a single referer.
///
/// `direct`, `internal` and `invalid` always carry no referer and no term.
/// `unknown` carries the bare hostname and no term. Catalog media carry the
/// source display name and, for sources with term parameters, an optional term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub medium: Medium,
    pub referer: Option<String>,
    pub term: Option<String>,
}

impl Attribution {
    pub fn direct() -> Self {
        Self::bare(Medium::Direct)
    }

    pub fn invalid() -> Self {
        Self::bare(Medium::Invalid)
    }

    pub fn internal() -> Self {
        Self::bare(Medium::Internal)
    }

    /// A well-formed external referer with no catalog match.
    pub fn unknown(hostname: impl Into<String>) -> Self {
        Self {
            medium: Medium::Unknown,
            referer: Some(hostname.into()),
            term: None,
        }
    }

    /// A catalog match.
    pub fn matched(medium: Medium, source: impl Into<String>, term: Option<String>) -> Self {
        Self {
            medium,
            referer: Some(source.into()),
            term,
        }
    }

    fn bare(medium: Medium) -> Self {
        Self {
            medium,
            referer: None,
            term: None,
        }
    }
}
