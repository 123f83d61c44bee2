//! Query-string modeling for listing navigation.
//!
//! A query string is kept as an ordered list of raw tokens. The editor drops
//! the parameters it owns (`tags`, `sort`, `page`), appends fresh ones, and
//! joins the result back onto the current path.

mod page_number;
mod retain;
mod token;

use std::fmt;

pub use page_number::PageNumber;
pub use retain::{parse_retained, query_of};
pub use token::Token;

/// Comma-joined checked filter values.
pub const TAGS: &str = "tags";
/// Selected sort option.
pub const SORT: &str = "sort";
/// Current listing page.
pub const PAGE: &str = "page";

/// Names owned by the filter form; replaced on submit, removed on clear.
pub const FILTER_PARAMS: &[&str] = &[TAGS, SORT];
/// Names owned by the pager.
pub const PAGE_PARAMS: &[&str] = &[PAGE];

/// An ordered sequence of query tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    tokens: Vec<Token>,
}

impl QueryString {
    /// Splits a raw query (without the leading `?`) on `&`. An absent or
    /// empty query has no tokens; empty tokens inside a query are kept.
    pub fn parse(query: Option<&str>) -> Self {
        let tokens = query
            .filter(|q| !q.is_empty())
            .map(|q| q.split('&').map(Token::from_raw).collect())
            .unwrap_or_default();
        Self { tokens }
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Drops every token whose name is in `excludes`.
    pub fn retain_excluding(mut self, excludes: &[&str]) -> Self {
        self.tokens.retain(|t| !excludes.contains(&t.name()));
        self
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.tokens.push(Token::assign(name, value));
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined with `&`, no leading `?`.
    pub fn serialize(&self) -> String {
        self.tokens
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` with `?query` attached, or the bare path when there are no tokens.
    pub fn target(&self, path: &str) -> String {
        if self.tokens.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.serialize())
        }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
