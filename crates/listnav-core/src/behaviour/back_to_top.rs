use crate::context::{BrowserContext, ScrollBehavior};

/// Shows `button_id` once the page is scrolled past `threshold` pixels and
/// hides it otherwise. `None` when the button is missing.
pub fn update_back_to_top<C: BrowserContext + ?Sized>(
    ctx: &mut C,
    button_id: &str,
    threshold: f64,
) -> Option<bool> {
    let visible = ctx.scroll_top() > threshold;
    ctx.set_visible(button_id, visible).then_some(visible)
}

/// Smooth-scrolls to the top of the document.
pub fn scroll_back_to_top<C: BrowserContext + ?Sized>(ctx: &mut C) {
    ctx.scroll_to_top(ScrollBehavior::Smooth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageElement, StaticPage};

    fn page(scroll: f64) -> StaticPage {
        let mut p = StaticPage::new("/").unwrap().with_element(PageElement {
            id: "back-to-top".into(),
            hidden: true,
            ..Default::default()
        });
        p.set_scroll_top(scroll);
        p
    }

    #[test]
    fn toggles_at_threshold() {
        let mut p = page(20.0);
        assert_eq!(update_back_to_top(&mut p, "back-to-top", 20.0), Some(false));
        assert_eq!(p.is_visible("back-to-top"), Some(false));

        p.set_scroll_top(21.0);
        assert_eq!(update_back_to_top(&mut p, "back-to-top", 20.0), Some(true));
        assert_eq!(p.is_visible("back-to-top"), Some(true));
    }

    #[test]
    fn missing_button_is_noop() {
        let mut p = StaticPage::new("/").unwrap();
        p.set_scroll_top(500.0);
        assert_eq!(update_back_to_top(&mut p, "back-to-top", 20.0), None);
    }

    #[test]
    fn scroll_back_is_smooth() {
        let mut p = page(300.0);
        scroll_back_to_top(&mut p);
        assert_eq!(p.scroll_top(), 0.0);
        assert_eq!(p.scroll_requests(), &[ScrollBehavior::Smooth]);
    }
}
