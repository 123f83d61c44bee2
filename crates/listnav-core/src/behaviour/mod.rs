//! Display behaviours wired to page events: active nav link, collapse
//! glyph, back-to-top button.

mod back_to_top;
mod collapse;
mod nav_highlight;

pub use back_to_top::{scroll_back_to_top, update_back_to_top};
pub use collapse::{refresh_collapse_sign, COLLAPSED_GLYPH, EXPANDED_GLYPH};
pub use nav_highlight::highlight_active_links;
