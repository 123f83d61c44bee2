//! The host capability every page behaviour runs against.
//!
//! In a real page this is `window.location` plus `document`; tests and the
//! CLI use [`crate::page::StaticPage`].

/// Checked inputs inside a filter container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Values of checked checkboxes, in document order.
    pub checked: Vec<String>,
    /// Value of the first checked radio option, if any.
    pub option: Option<String>,
}

/// A navigation link as the page exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Position in the page's link list; pass back to [`BrowserContext::add_link_class`].
    pub index: usize,
    /// Href resolved against the current URL.
    pub href: String,
    pub classes: Vec<String>,
}

impl Link {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// Location and document access for page behaviours.
///
/// Lookups of missing elements return `None`/`false` instead of failing.
pub trait BrowserContext {
    /// Full current URL.
    fn href(&self) -> String;

    /// Path component of the current URL (`/posts`).
    fn pathname(&self) -> String;

    /// Full document navigation to `target`, which may be relative.
    fn navigate(&mut self, target: &str);

    fn has_element(&self, id: &str) -> bool;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Replaces the text of element `id`. Returns `false` if it does not exist.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Shows or hides element `id`. Returns `false` if it does not exist.
    fn set_visible(&mut self, id: &str, visible: bool) -> bool;

    /// Runs the host-owned default action of element `id`, e.g. a collapse
    /// widget flipping its `aria-expanded` attribute.
    fn activate(&mut self, id: &str);

    /// Checked checkboxes and radio option inside container `id`.
    fn filter_selection(&self, id: &str) -> Option<FilterSelection>;

    /// Links carrying `class`, in document order.
    fn links(&self, class: &str) -> Vec<Link>;

    fn add_link_class(&mut self, index: usize, class: &str);

    /// Vertical scroll offset in CSS pixels.
    fn scroll_top(&self) -> f64;

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}
