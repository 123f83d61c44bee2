//! Errors raised at the edges: URL input, page numbers, page fixtures.
//!
//! Page behaviours themselves never fail; they degrade to a no-op.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListnavError {
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid page number {0:?}: expected an integer >= 1")]
    InvalidPageNumber(String),

    #[error("parse page fixture: {0}")]
    Fixture(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
