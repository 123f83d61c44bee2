//! Integration test: page fixtures loaded from disk run their load-time
//! behaviours.

use std::fs;

use listnav_core::behaviour::EXPANDED_GLYPH;
use listnav_core::config::ListnavConfig;
use listnav_core::events::{PageEvent, PageScripts};
use listnav_core::page::StaticPage;
use tempfile::tempdir;

const FIXTURE: &str = r#"
url = "https://example.com/projects"
scroll_top = 75.0

[[links]]
href = "/"
classes = ["nav-link"]

[[links]]
href = "/projects"
classes = ["nav-link"]

[[links]]
href = "/posts"
classes = ["nav-link", "active"]

[[elements]]
id = "collapse-button"
attributes = { aria-expanded = "true" }

[[elements]]
id = "collapse-sign"

[[elements]]
id = "back-to-top"
hidden = true
"#;

#[test]
fn load_event_applies_display_behaviours() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.toml");
    fs::write(&path, FIXTURE).unwrap();

    let mut page = StaticPage::load(&path).unwrap();
    let scripts = PageScripts::new(ListnavConfig::default());
    assert_eq!(scripts.dispatch(&mut page, &PageEvent::Load), None);

    assert_eq!(
        page.links_with_class("active"),
        vec!["https://example.com/projects", "https://example.com/posts"]
    );
    assert_eq!(page.text("collapse-sign"), Some(EXPANDED_GLYPH));
    assert_eq!(page.is_visible("back-to-top"), Some(true));
    assert!(page.take_navigations().is_empty());
}

#[test]
fn snapshot_serializes_to_json() {
    let mut page = StaticPage::from_toml_str(FIXTURE).unwrap();
    let cfg = ListnavConfig::default();
    PageScripts::new(cfg.clone()).dispatch(&mut page, &PageEvent::Load);

    let text = page.snapshot(&cfg.active_class).to_json().unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["url"], "https://example.com/projects");
    assert_eq!(json["active_links"][0], "https://example.com/projects");
}

#[test]
fn missing_fixture_is_io_error() {
    let dir = tempdir().unwrap();
    let err = StaticPage::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, listnav_core::error::ListnavError::Io(_)));
}
