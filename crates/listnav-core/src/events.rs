//! Routes page events to the behaviours and the query-string editor, the
//! way the page wires its listeners.

use crate::behaviour::{
    highlight_active_links, refresh_collapse_sign, scroll_back_to_top, update_back_to_top,
};
use crate::config::ListnavConfig;
use crate::context::BrowserContext;
use crate::editor::QueryStringEditor;
use crate::query::PageNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Window finished loading.
    Load,
    Scroll,
    Click { id: String },
    SubmitFilters,
    ClearFilters,
    ChangePage(PageNumber),
}

impl PageEvent {
    pub fn click(id: impl Into<String>) -> Self {
        PageEvent::Click { id: id.into() }
    }
}

/// All listeners of a listing page, configured with its element ids.
#[derive(Debug, Clone)]
pub struct PageScripts {
    config: ListnavConfig,
    editor: QueryStringEditor,
}

impl PageScripts {
    pub fn new(config: ListnavConfig) -> Self {
        let editor = QueryStringEditor::new(config.filter_settings_id.clone());
        Self { config, editor }
    }

    /// Runs every listener for `event`. Returns the navigation target when
    /// the event navigated the page.
    pub fn dispatch<C: BrowserContext + ?Sized>(
        &self,
        ctx: &mut C,
        event: &PageEvent,
    ) -> Option<String> {
        let cfg = &self.config;
        tracing::debug!(?event, "dispatch");
        match event {
            PageEvent::Load => {
                highlight_active_links(ctx, &cfg.nav_link_class, &cfg.active_class);
                refresh_collapse_sign(ctx, &cfg.collapse_button_id, &cfg.collapse_sign_id);
                update_back_to_top(ctx, &cfg.back_to_top_id, cfg.back_to_top_threshold);
                None
            }
            PageEvent::Scroll => {
                update_back_to_top(ctx, &cfg.back_to_top_id, cfg.back_to_top_threshold);
                None
            }
            PageEvent::Click { id } => {
                ctx.activate(id);
                if *id == cfg.collapse_button_id {
                    refresh_collapse_sign(ctx, &cfg.collapse_button_id, &cfg.collapse_sign_id);
                } else if *id == cfg.back_to_top_id {
                    scroll_back_to_top(ctx);
                    update_back_to_top(ctx, &cfg.back_to_top_id, cfg.back_to_top_threshold);
                }
                None
            }
            PageEvent::SubmitFilters => Some(self.editor.submit_filters(ctx)),
            PageEvent::ClearFilters => Some(self.editor.clear_filters(ctx)),
            PageEvent::ChangePage(page) => Some(self.editor.change_page(ctx, *page)),
        }
    }
}
