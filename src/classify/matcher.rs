//! Longest-suffix domain matching.
//!
//! Catalog domains are plain suffixes of the lowercased hostname. Several
//! sources can share a trailing fragment (`google.com` and `mail.google.com`),
//! so rules are tried longest first and the first suffix hit wins. Rules of
//! equal length are ordered by medium, source and domain name so the result
//! never depends on map iteration order.

use std::cmp::Ordering;

use super::normalize::ParsedUrl;
use crate::catalog::{Catalog, DomainRule};

/// Order in which rules are tried: longest domain first, then lexically.
pub(crate) fn rule_order(a: &DomainRule, b: &DomainRule) -> Ordering {
    b.domain
        .len()
        .cmp(&a.domain.len())
        .then_with(|| a.medium.as_str().cmp(b.medium.as_str()))
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.domain.cmp(&b.domain))
}

/// Finds the catalog rule with the longest domain that suffixes the hostname.
///
/// Rules come pre-sorted by [`rule_order`], so this is a linear scan.
pub fn find_match<'a>(referer: &ParsedUrl, catalog: &'a Catalog) -> Option<&'a DomainRule> {
    let hostname = referer.hostname();
    catalog
        .rules()
        .iter()
        .find(|rule| hostname.ends_with(rule.domain.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Medium;

    const CATALOG: &str = r#"
search:
  Google:
    domains: [google.com, google.co.uk]
    parameters: [q]
  Generic UK:
    domains: [co.uk]
email:
  Gmail:
    domains: [mail.google.com]
"#;

    fn lookup(catalog: &Catalog, url: &str) -> Option<(Medium, String)> {
        let parsed = ParsedUrl::parse(url).unwrap();
        find_match(&parsed, catalog).map(|r| (r.medium.clone(), r.source.clone()))
    }

    #[test]
    fn test_longest_suffix_wins() {
        let catalog = Catalog::from_yaml(CATALOG).unwrap();
        assert_eq!(
            lookup(&catalog, "http://www.google.co.uk/"),
            Some((Medium::Search, "Google".to_string()))
        );
        assert_eq!(
            lookup(&catalog, "http://www.bbc.co.uk/"),
            Some((Medium::Search, "Generic UK".to_string()))
        );
    }

    #[test]
    fn test_more_specific_medium_wins() {
        let catalog = Catalog::from_yaml(CATALOG).unwrap();
        assert_eq!(
            lookup(&catalog, "http://mail.google.com/mail/u/0"),
            Some((Medium::Email, "Gmail".to_string()))
        );
        assert_eq!(
            lookup(&catalog, "http://www.google.com/"),
            Some((Medium::Search, "Google".to_string()))
        );
    }

    #[test]
    fn test_uppercase_host_matches() {
        let catalog = Catalog::from_yaml(CATALOG).unwrap();
        assert_eq!(
            lookup(&catalog, "http://WWW.GOOGLE.COM/"),
            lookup(&catalog, "http://www.google.com/")
        );
    }

    #[test]
    fn test_port_ignored_for_matching() {
        let catalog = Catalog::from_yaml(CATALOG).unwrap();
        assert!(lookup(&catalog, "http://www.google.com:8080/").is_some());
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::from_yaml(CATALOG).unwrap();
        assert_eq!(lookup(&catalog, "http://example.com/"), None);
    }

    #[test]
    fn test_equal_length_duplicate_resolves_deterministically() {
        let yaml = r#"
social:
  Zulu:
    domains: [share.example]
  Alpha:
    domains: [share.example]
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        for _ in 0..3 {
            assert_eq!(
                lookup(&catalog, "http://share.example/"),
                Some((Medium::Social, "Alpha".to_string()))
            );
        }
    }
}
