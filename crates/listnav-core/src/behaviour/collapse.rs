//! Plus/minus glyph mirroring a collapse toggle.

use crate::context::BrowserContext;

/// Shown while the section is expanded (U+2796).
pub const EXPANDED_GLYPH: &str = "\u{2796}";
/// Shown while the section is collapsed (U+2795).
pub const COLLAPSED_GLYPH: &str = "\u{2795}";

/// Writes the glyph matching `button_id`'s `aria-expanded` into `sign_id`.
///
/// Anything other than `"true"` (including a missing attribute) counts as
/// collapsed. Returns the glyph written, or `None` when the button or the
/// sign element is missing.
pub fn refresh_collapse_sign<C: BrowserContext + ?Sized>(
    ctx: &mut C,
    button_id: &str,
    sign_id: &str,
) -> Option<&'static str> {
    if !ctx.has_element(button_id) {
        return None;
    }
    let glyph = match ctx.attribute(button_id, "aria-expanded").as_deref() {
        Some("true") => EXPANDED_GLYPH,
        _ => COLLAPSED_GLYPH,
    };
    ctx.set_text(sign_id, glyph).then_some(glyph)
}
