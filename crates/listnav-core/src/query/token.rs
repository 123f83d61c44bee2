//! A single raw `name=value` unit of a query string.

use std::fmt;

/// One query-string token, kept exactly as it appeared in the URL.
///
/// The value is never decoded and the name is never re-encoded, so writing a
/// token back out reproduces the original bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    raw: String,
}

impl Token {
    /// Wraps a raw token. The empty token produced by `&&` or a trailing `&`
    /// is kept too, with an empty name and value.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    /// Builds `name=value` without encoding either side.
    pub fn assign(name: &str, value: &str) -> Self {
        Self {
            raw: format!("{name}={value}"),
        }
    }

    /// Everything before the first `=`, or the whole token when there is none.
    pub fn name(&self) -> &str {
        match self.raw.split_once('=') {
            Some((name, _)) => name,
            None => &self.raw,
        }
    }

    /// Everything after the first `=`; empty for a bare name.
    pub fn value(&self) -> &str {
        self.raw.split_once('=').map_or("", |(_, value)| value)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals_only() {
        let t = Token::from_raw("q=a=b");
        assert_eq!(t.name(), "q");
        assert_eq!(t.value(), "a=b");
        assert_eq!(t.as_str(), "q=a=b");
    }

    #[test]
    fn bare_name_has_empty_value() {
        let t = Token::from_raw("draft");
        assert_eq!(t.name(), "draft");
        assert_eq!(t.value(), "");
    }

    #[test]
    fn empty_name_with_value() {
        let t = Token::from_raw("=x");
        assert_eq!(t.name(), "");
        assert_eq!(t.value(), "x");
    }

    #[test]
    fn empty_raw_has_empty_name() {
        let t = Token::from_raw("");
        assert_eq!(t.name(), "");
        assert_eq!(t.value(), "");
        assert_eq!(t.as_str(), "");
    }

    #[test]
    fn encoding_is_left_alone() {
        let t = Token::from_raw("title=hello%20world");
        assert_eq!(t.value(), "hello%20world");
        assert_eq!(Token::assign("tags", "rust,c++").to_string(), "tags=rust,c++");
    }
}
