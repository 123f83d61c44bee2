//! Deterministic in-memory page used by tests and the CLI.
//!
//! A [`StaticPage`] is built from a TOML fixture describing the current URL,
//! navigation links, plain elements, and filter forms. Navigations are
//! recorded rather than performed so callers can inspect them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::context::{BrowserContext, FilterSelection, Link, ScrollBehavior};
use crate::error::ListnavError;

/// Base for origin-relative URLs given on the command line.
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Parses an absolute URL, or resolves `/path?query` against [`DEFAULT_ORIGIN`].
pub fn resolve_location(input: &str) -> Result<Url, ListnavError> {
    let invalid = |source| ListnavError::InvalidUrl {
        input: input.to_string(),
        source,
    };
    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(DEFAULT_ORIGIN).map_err(invalid)?;
            base.join(input).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElement {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInput {
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl FilterInput {
    pub fn checked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: true,
        }
    }
}

/// A filter form: checkboxes for tags, radios for the sort option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub id: String,
    #[serde(default)]
    pub checkboxes: Vec<FilterInput>,
    #[serde(default)]
    pub radios: Vec<FilterInput>,
}

/// On-disk description of a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageFixture {
    pub url: String,
    #[serde(default)]
    pub scroll_top: f64,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(default)]
    pub elements: Vec<PageElement>,
    #[serde(default)]
    pub filters: Vec<FilterGroup>,
}

/// One recorded `location` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: String,
    /// Target exactly as assigned (usually `path?query`).
    pub to: String,
}

/// Serializable view of a page after its scripts ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub url: String,
    pub scroll_top: f64,
    pub active_links: Vec<String>,
    pub elements: Vec<PageElement>,
}

impl PageSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone)]
pub struct StaticPage {
    url: Url,
    scroll_top: f64,
    links: Vec<PageLink>,
    elements: Vec<PageElement>,
    filters: Vec<FilterGroup>,
    navigations: Vec<Navigation>,
    scrolls: Vec<ScrollBehavior>,
}

impl StaticPage {
    /// Empty page at `url` (absolute or origin-relative).
    pub fn new(url: &str) -> Result<Self, ListnavError> {
        Ok(Self {
            url: resolve_location(url)?,
            scroll_top: 0.0,
            links: Vec::new(),
            elements: Vec::new(),
            filters: Vec::new(),
            navigations: Vec::new(),
            scrolls: Vec::new(),
        })
    }

    pub fn from_fixture(fixture: PageFixture) -> Result<Self, ListnavError> {
        let mut page = Self::new(&fixture.url)?;
        page.scroll_top = fixture.scroll_top;
        page.links = fixture.links;
        page.elements = fixture.elements;
        page.filters = fixture.filters;
        Ok(page)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ListnavError> {
        let fixture: PageFixture = toml::from_str(data)?;
        Self::from_fixture(fixture)
    }

    pub fn load(path: &Path) -> Result<Self, ListnavError> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn with_link(mut self, href: &str, classes: &[&str]) -> Self {
        self.links.push(PageLink {
            href: href.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn with_element(mut self, element: PageElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_filters(mut self, group: FilterGroup) -> Self {
        self.filters.push(group);
        self
    }

    pub fn set_scroll_top(&mut self, px: f64) {
        self.scroll_top = px;
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    /// `None` if the element does not exist.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.element(id).map(|e| !e.hidden)
    }

    /// Resolved hrefs of links carrying `class`.
    pub fn links_with_class(&self, class: &str) -> Vec<String> {
        self.links
            .iter()
            .filter(|l| l.classes.iter().any(|c| c == class))
            .map(|l| self.resolve_href(&l.href))
            .collect()
    }

    /// Drains the navigation log.
    pub fn take_navigations(&mut self) -> Vec<Navigation> {
        std::mem::take(&mut self.navigations)
    }

    pub fn scroll_requests(&self) -> &[ScrollBehavior] {
        &self.scrolls
    }

    pub fn snapshot(&self, active_class: &str) -> PageSnapshot {
        PageSnapshot {
            url: self.url.to_string(),
            scroll_top: self.scroll_top,
            active_links: self.links_with_class(active_class),
            elements: self.elements.clone(),
        }
    }

    fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    fn resolve_href(&self, href: &str) -> String {
        self.url
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    }
}

impl BrowserContext for StaticPage {
    fn href(&self) -> String {
        self.url.to_string()
    }

    fn pathname(&self) -> String {
        self.url.path().to_string()
    }

    fn navigate(&mut self, target: &str) {
        let from = self.url.to_string();
        match self.url.join(target) {
            Ok(next) => self.url = next,
            Err(e) => {
                tracing::warn!(target_url = %target, error = %e, "navigation target did not resolve")
            }
        }
        self.navigations.push(Navigation {
            from,
            to: target.to_string(),
        });
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)?.attributes.get(name).cloned()
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.element_mut(id) {
            Some(e) => {
                e.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.element_mut(id) {
            Some(e) => {
                e.hidden = !visible;
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, id: &str) {
        if let Some(expanded) = self
            .element_mut(id)
            .and_then(|e| e.attributes.get_mut("aria-expanded"))
        {
            let next = if *expanded == "true" { "false" } else { "true" };
            *expanded = next.to_string();
        }
    }

    fn filter_selection(&self, id: &str) -> Option<FilterSelection> {
        let group = self.filters.iter().find(|g| g.id == id)?;
        Some(FilterSelection {
            checked: group
                .checkboxes
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.value.clone())
                .collect(),
            option: group
                .radios
                .iter()
                .find(|r| r.checked)
                .map(|r| r.value.clone()),
        })
    }

    fn links(&self, class: &str) -> Vec<Link> {
        self.links
            .iter()
            .enumerate()
            .filter(|(_, l)| l.classes.iter().any(|c| c == class))
            .map(|(index, l)| Link {
                index,
                href: self.resolve_href(&l.href),
                classes: l.classes.clone(),
            })
            .collect()
    }

    fn add_link_class(&mut self, index: usize, class: &str) {
        if let Some(link) = self.links.get_mut(index) {
            if !link.classes.iter().any(|c| c == class) {
                link.classes.push(class.to_string());
            }
        }
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scroll_top = 0.0;
        self.scrolls.push(behavior);
    }
}
