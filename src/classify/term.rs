//! Search term extraction.

use super::normalize::ParsedUrl;

/// First non-empty value among `parameters`, checked in order.
///
/// A missing parameter and an empty one are treated the same. Sources with no
/// parameters never carry a term.
pub fn extract_term(referer: &ParsedUrl, parameters: &[String]) -> Option<String> {
    if parameters.is_empty() {
        return None;
    }

    parameters.iter().find_map(|name| {
        referer
            .query_value(name)
            .filter(|value| !value.is_empty())
            .map(|value| value.into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn term(url: &str, names: &[&str]) -> Option<String> {
        extract_term(&ParsedUrl::parse(url).unwrap(), &params(names))
    }

    #[test]
    fn test_first_parameter() {
        assert_eq!(
            term("http://www.google.com/search?q=test&hl=en", &["q", "query"]),
            Some("test".to_string())
        );
    }

    #[test]
    fn test_priority_order_not_query_order() {
        assert_eq!(
            term("http://s.example/?query=second&q=first", &["q", "query"]),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_empty_value_falls_through() {
        assert_eq!(
            term("http://s.example/?q=&query=fallback", &["q", "query"]),
            Some("fallback".to_string())
        );
        assert_eq!(term("http://www.google.com/search?q=", &["q"]), None);
    }

    #[test]
    fn test_absent_parameters() {
        assert_eq!(term("http://www.google.com/", &["q", "query"]), None);
    }

    #[test]
    fn test_no_parameters_means_no_term() {
        assert_eq!(term("http://t.co/abc?q=ignored", &[]), None);
    }

    #[test]
    fn test_parameter_names_are_case_sensitive() {
        assert_eq!(term("http://www.bing.com/?Q=upper", &["q"]), None);
        assert_eq!(
            term("http://www.bing.com/?Q=upper", &["q", "Q"]),
            Some("upper".to_string())
        );
    }

    #[test]
    fn test_decoded_term() {
        assert_eq!(
            term("http://www.google.com/search?q=rust%20async+book", &["q"]),
            Some("rust async book".to_string())
        );
    }
}
