// Tabs - Active tab indicator checks for the bottom tab bar
//
// Invariant: exactly one tab has aria-selected="true" together with the
// `active` class, and every other tab has aria-selected="false" without it.

use crate::error::{Error, Result};
use crate::fixture::TestPage;
use crate::locate::{AriaRole, role_attribute_selector};
use crate::routes::MainTab;
use std::fmt;

/// Class that marks the active tab.
pub const ACTIVE_CLASS: &str = "active";

/// Observed state of one tab element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    pub label: String,
    /// `aria-selected="true"`
    pub selected: bool,
    /// Class list contains [`ACTIVE_CLASS`]
    pub marked: bool,
}

impl TabState {
    pub fn from_attributes(label: &str, aria_selected: Option<&str>, class: Option<&str>) -> Self {
        Self {
            label: label.trim().to_string(),
            selected: aria_selected == Some("true"),
            marked: class
                .unwrap_or_default()
                .split_whitespace()
                .any(|token| token == ACTIVE_CLASS),
        }
    }

    fn is_active(&self) -> bool {
        self.selected && self.marked
    }

    fn is_inactive(&self) -> bool {
        !self.selected && !self.marked
    }
}

impl fmt::Display for TabState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (aria-selected={}, active class={})",
            self.label, self.selected, self.marked
        )
    }
}

/// Returns the single active tab, or describes how the invariant is broken.
pub fn single_active(states: &[TabState]) -> std::result::Result<&TabState, String> {
    let active: Vec<&TabState> = states.iter().filter(|s| s.is_active()).collect();
    let inconsistent: Vec<&TabState> = states
        .iter()
        .filter(|s| !s.is_active() && !s.is_inactive())
        .collect();

    if let Some(state) = inconsistent.first() {
        return Err(format!(
            "tab {} has aria-selected and the active class out of sync",
            state
        ));
    }

    match active.as_slice() {
        [single] => Ok(*single),
        [] => Err(format!("no active tab among {} tabs", states.len())),
        many => Err(format!(
            "expected exactly 1 active tab, found {}: {}",
            many.len(),
            many.iter()
                .map(|s| s.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

/// Reads the state of every `[role="tab"]` element on the page.
pub async fn tab_states(page: &TestPage) -> Result<Vec<TabState>> {
    let tabs = page.locator(&role_attribute_selector(AriaRole::Tab)).await;
    let count = tabs.count().await?;
    let mut states = Vec::with_capacity(count);

    for index in 0..count {
        let tab = tabs.nth(index as i32);
        // textContent ignores CSS text-transform
        let label = tab.text_content().await?.unwrap_or_default();
        let aria_selected = tab.get_attribute("aria-selected").await?;
        let class = tab.get_attribute("class").await?;
        states.push(TabState::from_attributes(
            &label,
            aria_selected.as_deref(),
            class.as_deref(),
        ));
    }

    Ok(states)
}

/// Counts tabs carrying the active class.
pub async fn count_active_tabs(page: &TestPage) -> Result<usize> {
    Ok(tab_states(page).await?.iter().filter(|s| s.marked).count())
}

/// Asserts that `expected` is the one and only active tab.
///
/// Attribute and class changes are applied by the app after a route change,
/// so each tab is checked through auto-retrying expectations first, then the
/// whole bar is checked in one snapshot.
pub async fn expect_active_tab(page: &TestPage, expected: MainTab) -> Result<()> {
    for tab in MainTab::ALL {
        let locator = page.get_by_role(AriaRole::Tab, tab.label()).await;
        if tab == expected {
            page.expect(locator.clone())
                .to_have_attribute("aria-selected", "true")
                .await?;
            page.expect(locator).to_have_class(ACTIVE_CLASS).await?;
        } else {
            page.expect(locator.clone())
                .to_have_attribute("aria-selected", "false")
                .await?;
            page.expect(locator).not().to_have_class(ACTIVE_CLASS).await?;
        }
    }

    let states = tab_states(page).await?;
    let active = single_active(&states).map_err(|actual| Error::AssertionFailed {
        subject: "bottom tab bar".to_string(),
        expected: format!("only '{}' active", expected),
        actual,
    })?;

    if MainTab::from_label(&active.label) != Some(expected) {
        return Err(Error::AssertionFailed {
            subject: "bottom tab bar".to_string(),
            expected: format!("'{}' active", expected),
            actual: format!("'{}' active", active.label),
        });
    }

    tracing::debug!(tab = %expected, "Active tab verified");
    Ok(())
}
