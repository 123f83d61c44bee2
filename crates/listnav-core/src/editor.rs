//! Filter, sort, and pager navigation for listing pages.
//!
//! Each operation reads the current URL, drops the parameters it owns,
//! appends the new selection, and navigates the whole document to the
//! current path with the rebuilt query string.

use crate::context::{BrowserContext, FilterSelection};
use crate::query::{
    parse_retained, PageNumber, QueryString, FILTER_PARAMS, PAGE, PAGE_PARAMS, SORT, TAGS,
};

/// Navigation target for submitting the filter form.
///
/// `tags` is appended only when at least one value is checked, `sort` only
/// when the chosen option is non-empty. Values are joined with `,` as-is.
pub fn filter_target(href: &str, path: &str, selection: &FilterSelection) -> String {
    let mut query = QueryString::from_tokens(parse_retained(href, FILTER_PARAMS));
    if !selection.checked.is_empty() {
        query.push(TAGS, &selection.checked.join(","));
    }
    if let Some(option) = selection.option.as_deref().filter(|o| !o.is_empty()) {
        query.push(SORT, option);
    }
    query.target(path)
}

/// Navigation target for switching to `page`. Always carries a query string.
pub fn page_target(href: &str, path: &str, page: PageNumber) -> String {
    let mut query = QueryString::from_tokens(parse_retained(href, PAGE_PARAMS));
    query.push(PAGE, &page.to_string());
    query.target(path)
}

/// Navigation target for clearing filter and sort, keeping everything else.
pub fn clear_target(href: &str, path: &str) -> String {
    QueryString::from_tokens(parse_retained(href, FILTER_PARAMS)).target(path)
}

/// Drives the three listing navigations against a [`BrowserContext`].
#[derive(Debug, Clone)]
pub struct QueryStringEditor {
    filter_container_id: String,
}

impl QueryStringEditor {
    pub fn new(filter_container_id: impl Into<String>) -> Self {
        Self {
            filter_container_id: filter_container_id.into(),
        }
    }

    /// Reads the filter form and navigates. A missing form counts as an
    /// empty selection, so only the owned parameters are dropped.
    pub fn submit_filters<C: BrowserContext + ?Sized>(&self, ctx: &mut C) -> String {
        let selection = ctx
            .filter_selection(&self.filter_container_id)
            .unwrap_or_else(|| {
                tracing::debug!(
                    container = %self.filter_container_id,
                    "filter container missing; submitting empty selection"
                );
                FilterSelection::default()
            });
        let target = filter_target(&ctx.href(), &ctx.pathname(), &selection);
        go(ctx, "submit_filters", target)
    }

    pub fn change_page<C: BrowserContext + ?Sized>(&self, ctx: &mut C, page: PageNumber) -> String {
        let target = page_target(&ctx.href(), &ctx.pathname(), page);
        go(ctx, "change_page", target)
    }

    pub fn clear_filters<C: BrowserContext + ?Sized>(&self, ctx: &mut C) -> String {
        let target = clear_target(&ctx.href(), &ctx.pathname());
        go(ctx, "clear_filters", target)
    }
}

fn go<C: BrowserContext + ?Sized>(ctx: &mut C, action: &str, target: String) -> String {
    tracing::debug!(action, from = %ctx.href(), to = %target, "navigating");
    ctx.navigate(&target);
    target
}
