//! `listnav filter|page|clear` – navigation targets for a listing URL.

use anyhow::{Context, Result};
use listnav_core::config::ListnavConfig;
use listnav_core::events::{PageEvent, PageScripts};
use listnav_core::page::{FilterGroup, FilterInput, StaticPage};
use listnav_core::query::PageNumber;

fn navigate(cfg: &ListnavConfig, page: &mut StaticPage, event: PageEvent) -> Result<String> {
    let target = PageScripts::new(cfg.clone())
        .dispatch(page, &event)
        .context("event did not navigate")?;
    tracing::info!(?event, %target, "computed navigation");
    Ok(target)
}

/// Builds the filter form from `tags` (all checked) and `sort`, then submits it.
pub fn run_filter(
    cfg: &ListnavConfig,
    url: &str,
    tags: Vec<String>,
    sort: Option<String>,
) -> Result<String> {
    let form = FilterGroup {
        id: cfg.filter_settings_id.clone(),
        checkboxes: tags.into_iter().map(FilterInput::checked).collect(),
        radios: sort.into_iter().map(FilterInput::checked).collect(),
    };
    let mut page = StaticPage::new(url)?.with_filters(form);
    navigate(cfg, &mut page, PageEvent::SubmitFilters)
}

pub fn run_page(cfg: &ListnavConfig, url: &str, page_number: PageNumber) -> Result<String> {
    let mut page = StaticPage::new(url)?;
    navigate(cfg, &mut page, PageEvent::ChangePage(page_number))
}

pub fn run_clear(cfg: &ListnavConfig, url: &str) -> Result<String> {
    let mut page = StaticPage::new(url)?;
    navigate(cfg, &mut page, PageEvent::ClearFilters)
}
