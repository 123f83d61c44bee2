//! CLI command handlers. Each returns the text to print.

mod inspect;
mod navigate;

pub use inspect::run_inspect;
pub use navigate::{run_clear, run_filter, run_page};
