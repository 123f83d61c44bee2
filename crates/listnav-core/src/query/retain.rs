//! Extracting the query string from an href and keeping unmanaged tokens.

use super::{QueryString, Token};

/// Returns the raw query string of `href`: everything after the first `?`,
/// stopping at the fragment.
///
/// `None` when the URL has no `?` before its fragment.
///
/// The fragment never leaks into the last token, and a second `?` is plain
/// query text rather than a new delimiter.
pub fn query_of(href: &str) -> Option<&str> {
    let without_fragment = href.split('#').next().unwrap_or(href);
    without_fragment.split_once('?').map(|(_, query)| query)
}

/// Tokens of the query string in `href` whose name is not in `excludes`,
/// in their original order and original encoding.
pub fn parse_retained(href: &str, excludes: &[&str]) -> Vec<Token> {
    QueryString::parse(query_of(href))
        .retain_excluding(excludes)
        .into_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn query_of_variants() {
        assert_eq!(query_of("https://h/posts?a=1&b=2"), Some("a=1&b=2"));
        assert_eq!(query_of("https://h/posts"), None);
        assert_eq!(query_of("https://h/posts?"), Some(""));
        assert_eq!(query_of("https://h/posts?a=1#top"), Some("a=1"));
        assert_eq!(query_of("https://h/posts#frag?a=1"), None);
        assert_eq!(query_of("/p?a=1?b=2"), Some("a=1?b=2"));
    }

    #[test]
    fn drops_excluded_names_keeps_order() {
        let kept = parse_retained(
            "https://h/posts?tags=a,b&foo=1&sort=new&bar&foo=2",
            &["tags", "sort"],
        );
        assert_eq!(raw(&kept), vec!["foo=1", "bar", "foo=2"]);
    }

    #[test]
    fn duplicates_of_excluded_name_all_go() {
        let kept = parse_retained("/p?page=1&x=y&page=2", &["page"]);
        assert_eq!(raw(&kept), vec!["x=y"]);
    }

    #[test]
    fn no_query_is_empty() {
        assert!(parse_retained("https://h/posts", &["page"]).is_empty());
        assert!(parse_retained("https://h/posts?", &["page"]).is_empty());
    }

    #[test]
    fn empty_tokens_are_kept_verbatim() {
        let kept = parse_retained("/p?a=1&&b=2&", &["page"]);
        assert_eq!(raw(&kept), vec!["a=1", "", "b=2", ""]);
    }

    #[test]
    fn name_match_is_exact() {
        let kept = parse_retained("/p?tagsx=1&tag=2&tags", &["tags"]);
        assert_eq!(raw(&kept), vec!["tagsx=1", "tag=2"]);
    }
}
