// Tab bar scenarios - Bottom tab bar navigation (Social Feed / Map View / Account)
//
// Covers:
// - the tab bar renders fixed to the bottom of the viewport
// - all three tabs are present as role="tab"
// - activating a tab updates the URL and the active indicator
// - deep links select the matching tab
// - each placeholder page shows its heading and description

use super::{expect_body_visible, expect_landmark_interactive, expect_landmark_visible, scenario};
use crate::assertions::computed_style;
use crate::error::{Error, Result};
use crate::fixture::TestPage;
use crate::locate::AriaRole;
use crate::routes::{AppVariant, MainTab};
use crate::runner::Scenario;
use crate::tabs::{self, expect_active_tab};

const TAB_BAR: &str = "#bottom-tab-bar";

/// Every tab bar scenario, in a stable order.
pub fn all() -> Vec<Scenario> {
    vec![
        scenario!(home_page_renders_map_view),
        scenario!(bottom_tab_bar_renders),
        scenario!(all_three_tabs_are_present),
        scenario!(tab_navigation_updates_url),
        scenario!(account_tab_click_selects_account),
        scenario!(active_tab_indicator),
        scenario!(deep_linking_map_view),
        scenario!(deep_linking_account),
        scenario!(deep_linking_social_feed),
        scenario!(map_view_placeholder_displays),
        scenario!(account_view_placeholder_displays),
        scenario!(social_feed_view_placeholder_displays),
        scenario!(only_one_tab_active_at_a_time),
        scenario!(tab_round_trip_restores_state),
        scenario!(layout_is_interactive),
    ]
}

/// Root route: body, tab bar, Map View heading and description are visible.
pub async fn home_page_renders_map_view(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    expect_body_visible(page).await?;
    expect_landmark_visible(page, AppVariant::TabBar).await?;
    expect_placeholder(page, MainTab::MapView).await
}

/// The tab bar is visible and pinned to the bottom of the viewport.
pub async fn bottom_tab_bar_renders(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    expect_landmark_visible(page, AppVariant::TabBar).await?;

    let position = computed_style(page.page(), TAB_BAR, "position").await?;
    expect_style(TAB_BAR, "position", "fixed", position)?;

    let bottom = computed_style(page.page(), TAB_BAR, "bottom").await?;
    expect_style(TAB_BAR, "bottom", "0px", bottom)
}

pub async fn all_three_tabs_are_present(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    for tab in MainTab::ALL {
        let locator = page.get_by_role(AriaRole::Tab, tab.label()).await;
        page.expect(locator).to_be_visible().await?;
    }
    Ok(())
}

/// Clicking each tab moves the browser to that tab's route.
pub async fn tab_navigation_updates_url(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    // Map View is the default route
    page.expect_url(MainTab::MapView.path()).await?;

    for tab in [MainTab::SocialFeed, MainTab::Account, MainTab::MapView] {
        activate_tab(page, tab).await?;
        page.expect_url(tab.path()).await?;
    }
    Ok(())
}

pub async fn account_tab_click_selects_account(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    activate_tab(page, MainTab::Account).await?;
    page.expect_url(MainTab::Account.path()).await?;
    expect_active_tab(page, MainTab::Account).await
}

/// The active indicator follows the selected tab.
pub async fn active_tab_indicator(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    expect_active_tab(page, MainTab::MapView).await?;

    for tab in [MainTab::SocialFeed, MainTab::Account] {
        activate_tab(page, tab).await?;
        expect_active_tab(page, tab).await?;
    }
    Ok(())
}

pub async fn deep_linking_map_view(page: &TestPage) -> Result<()> {
    deep_link(page, MainTab::MapView).await
}

pub async fn deep_linking_account(page: &TestPage) -> Result<()> {
    deep_link(page, MainTab::Account).await
}

pub async fn deep_linking_social_feed(page: &TestPage) -> Result<()> {
    deep_link(page, MainTab::SocialFeed).await
}

/// Map View is the landing page, so no navigation is needed.
pub async fn map_view_placeholder_displays(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;
    expect_placeholder(page, MainTab::MapView).await
}

pub async fn account_view_placeholder_displays(page: &TestPage) -> Result<()> {
    open_directly(page, MainTab::Account).await?;
    expect_placeholder(page, MainTab::Account).await
}

pub async fn social_feed_view_placeholder_displays(page: &TestPage) -> Result<()> {
    open_directly(page, MainTab::SocialFeed).await?;
    expect_placeholder(page, MainTab::SocialFeed).await
}

pub async fn only_one_tab_active_at_a_time(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;
    expect_single_marked_tab(page).await?;

    activate_tab(page, MainTab::SocialFeed).await?;
    expect_active_tab(page, MainTab::SocialFeed).await?;
    expect_single_marked_tab(page).await
}

/// Map View -> Account -> Social Feed -> Map View ends where it started.
pub async fn tab_round_trip_restores_state(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    let initial_url = page.url_for(MainTab::MapView.path())?;
    page.expect_page().to_have_url(&initial_url).await?;
    expect_active_tab(page, MainTab::MapView).await?;

    for tab in [MainTab::Account, MainTab::SocialFeed, MainTab::MapView] {
        activate_tab(page, tab).await?;
        page.expect_url(tab.path()).await?;
        expect_active_tab(page, tab).await?;
    }

    page.expect_page().to_have_url(&initial_url).await?;
    expect_active_tab(page, MainTab::MapView).await
}

pub async fn layout_is_interactive(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    expect_body_visible(page).await?;
    expect_landmark_interactive(page, AppVariant::TabBar).await
}

async fn activate_tab(page: &TestPage, tab: MainTab) -> Result<()> {
    let locator = page.get_by_role(AriaRole::Tab, tab.label()).await;
    page.activate(&locator).await
}

async fn open_directly(page: &TestPage, tab: MainTab) -> Result<()> {
    page.goto(tab.path()).await?;
    page.wait_for_network_idle().await
}

/// Direct navigation selects the same tab in-app navigation would.
async fn deep_link(page: &TestPage, tab: MainTab) -> Result<()> {
    open_directly(page, tab).await?;
    page.expect_url(tab.path()).await?;
    expect_active_tab(page, tab).await
}

async fn expect_placeholder(page: &TestPage, tab: MainTab) -> Result<()> {
    let heading = page.get_by_role(AriaRole::Heading, tab.heading()).await;
    page.expect(heading).to_be_visible().await?;

    let description = page.get_by_text(tab.body_text()).await;
    page.expect(description).to_be_visible().await
}

async fn expect_single_marked_tab(page: &TestPage) -> Result<()> {
    let active = tabs::count_active_tabs(page).await?;
    if active == 1 {
        Ok(())
    } else {
        Err(Error::AssertionFailed {
            subject: "bottom tab bar".to_string(),
            expected: "exactly 1 active tab".to_string(),
            actual: format!("{} active tabs", active),
        })
    }
}

fn expect_style(selector: &str, property: &str, expected: &str, actual: String) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::AssertionFailed {
            subject: format!("computed '{}' of '{}'", property, selector),
            expected: format!("'{}'", expected),
            actual: format!("'{}'", actual),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let scenarios = all();
        let mut names: Vec<&str> = scenarios.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), scenarios.len());
        assert!(names.contains(&"deep_linking_social_feed"));
    }

    #[test]
    fn test_style_mismatch_reports_both_values() {
        assert!(expect_style(TAB_BAR, "position", "fixed", "fixed".to_string()).is_ok());

        let err = expect_style(TAB_BAR, "bottom", "0px", "12px".to_string()).unwrap_err();
        assert!(err.is_failure());
        assert_eq!(
            err.to_string(),
            "Assertion failed for computed 'bottom' of '#bottom-tab-bar': expected '0px', got '12px'"
        );
    }
}
