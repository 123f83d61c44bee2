//! Marks the navigation link pointing at the current page.

use crate::context::BrowserContext;

/// Adds `active_class` to every `link_class` link whose resolved href equals
/// the current URL exactly and that is not already active. Several links to
/// the current page (header and sidebar, say) are all marked.
///
/// Returns how many links were newly marked; running it again returns 0.
pub fn highlight_active_links<C: BrowserContext + ?Sized>(
    ctx: &mut C,
    link_class: &str,
    active_class: &str,
) -> usize {
    let current = ctx.href();
    let matches: Vec<usize> = ctx
        .links(link_class)
        .into_iter()
        .filter(|l| l.href == current && !l.has_class(active_class))
        .map(|l| l.index)
        .collect();
    for &index in &matches {
        ctx.add_link_class(index, active_class);
    }
    tracing::debug!(current = %current, marked = matches.len(), "nav highlight");
    matches.len()
}
