//! Internal referral detection.

use super::normalize::ParsedUrl;

/// Whether the referer belongs to the same site as the page.
///
/// Hosts are compared including the port. `internal_domains` entries are exact
/// host strings, not suffixes. Without a page URL nothing is internal.
pub fn is_internal(referer: &ParsedUrl, page: Option<&ParsedUrl>, internal_domains: &[&str]) -> bool {
    match page {
        Some(page) => {
            referer.host() == page.host() || internal_domains.iter().any(|d| *d == referer.host())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> ParsedUrl {
        ParsedUrl::parse(s).unwrap()
    }

    #[test]
    fn test_same_host_is_internal() {
        let page = url("http://example.com/");
        assert!(is_internal(&url("http://example.com/page"), Some(&page), &[]));
    }

    #[test]
    fn test_no_page_is_never_internal() {
        assert!(!is_internal(&url("http://example.com/page"), None, &["example.com"]));
    }

    #[test]
    fn test_listed_host_is_internal() {
        let page = url("http://example.com/");
        assert!(is_internal(
            &url("http://subdomain.example.com/"),
            Some(&page),
            &["subdomain.example.com"]
        ));
    }

    #[test]
    fn test_listed_hosts_are_exact_not_suffix() {
        let page = url("http://example.com/");
        assert!(!is_internal(
            &url("http://deep.subdomain.example.com/"),
            Some(&page),
            &["subdomain.example.com"]
        ));
    }

    #[test]
    fn test_port_is_part_of_host() {
        let page = url("http://example.com:8080/");
        assert!(!is_internal(&url("http://example.com/"), Some(&page), &[]));
        assert!(is_internal(
            &url("http://example.com:9000/"),
            Some(&page),
            &["example.com:9000"]
        ));
    }

    #[test]
    fn test_subdomain_of_page_is_external() {
        let page = url("http://example.com/");
        assert!(!is_internal(&url("http://www.example.com/"), Some(&page), &[]));
    }
}
