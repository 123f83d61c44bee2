//! Shared builders for listing-page integration tests.

use listnav_core::config::ListnavConfig;
use listnav_core::page::{FilterGroup, FilterInput, StaticPage};

/// A listing page at `url` with a filter form holding `checked` tags and,
/// optionally, a checked sort option.
pub fn listing_page(url: &str, checked: &[&str], sort: Option<&str>) -> StaticPage {
    let cfg = ListnavConfig::default();
    let mut checkboxes: Vec<FilterInput> = checked.iter().map(|v| FilterInput::checked(*v)).collect();
    checkboxes.push(FilterInput {
        value: "unchecked".to_string(),
        checked: false,
    });
    let mut radios = vec![FilterInput {
        value: "oldest".to_string(),
        checked: false,
    }];
    if let Some(s) = sort {
        radios.push(FilterInput::checked(s));
    }
    StaticPage::new(url).unwrap().with_filters(FilterGroup {
        id: cfg.filter_settings_id,
        checkboxes,
        radios,
    })
}

/// The last navigation target recorded by `page`.
pub fn last_target(page: &mut StaticPage) -> String {
    page.take_navigations()
        .pop()
        .map(|n| n.to)
        .expect("page did not navigate")
}
