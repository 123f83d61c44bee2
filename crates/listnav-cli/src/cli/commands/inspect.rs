//! `listnav inspect <fixture>` – run load-time scripts on a page fixture.

use anyhow::{Context, Result};
use listnav_core::config::ListnavConfig;
use listnav_core::events::{PageEvent, PageScripts};
use listnav_core::page::StaticPage;
use std::fmt::Write;
use std::path::Path;

pub fn run_inspect(
    cfg: &ListnavConfig,
    fixture: &Path,
    scroll: Option<f64>,
    json: bool,
) -> Result<String> {
    let mut page = StaticPage::load(fixture)
        .with_context(|| format!("load page fixture: {}", fixture.display()))?;
    let scripts = PageScripts::new(cfg.clone());
    scripts.dispatch(&mut page, &PageEvent::Load);
    if let Some(px) = scroll {
        page.set_scroll_top(px);
        scripts.dispatch(&mut page, &PageEvent::Scroll);
    }

    let snapshot = page.snapshot(&cfg.active_class);
    if json {
        return Ok(snapshot.to_json()?);
    }

    let mut out = String::new();
    writeln!(out, "url:         {}", snapshot.url)?;
    writeln!(out, "scroll:      {}", snapshot.scroll_top)?;
    if snapshot.active_links.is_empty() {
        writeln!(out, "active:      -")?;
    }
    for href in &snapshot.active_links {
        writeln!(out, "active:      {href}")?;
    }
    let sign = page.text(&cfg.collapse_sign_id).unwrap_or("-");
    writeln!(out, "collapse:    {sign}")?;
    let back_to_top = match page.is_visible(&cfg.back_to_top_id) {
        Some(true) => "visible",
        Some(false) => "hidden",
        None => "-",
    };
    write!(out, "back-to-top: {back_to_top}")?;
    Ok(out)
}
