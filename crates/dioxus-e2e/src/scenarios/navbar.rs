// Navbar scenarios - Layout-only app with Home and Blog links

use super::{expect_body_visible, expect_landmark_interactive, expect_landmark_visible, scenario};
use crate::error::Result;
use crate::fixture::TestPage;
use crate::locate::AriaRole;
use crate::routes::{AppVariant, NavLink};
use crate::runner::Scenario;

pub fn all() -> Vec<Scenario> {
    vec![
        scenario!(home_page_loads_and_displays_content),
        scenario!(navbar_navigation_works),
        scenario!(app_is_fully_hydrated),
        scenario!(blog_route_works),
        scenario!(routing_system_works),
    ]
}

pub async fn home_page_loads_and_displays_content(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    expect_body_visible(page).await?;
    expect_landmark_visible(page, AppVariant::Navbar).await
}

/// Both links are visible, and Blog -> Home lands back on the root URL.
pub async fn navbar_navigation_works(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    for link in NavLink::ALL {
        let locator = page.get_by_role(AriaRole::Link, link.label()).await;
        page.expect(locator).to_be_visible().await?;
    }

    follow_link(page, NavLink::Blog).await?;
    follow_link(page, NavLink::Home).await
}

/// Clicking the navbar dispatches events without breaking the layout.
pub async fn app_is_fully_hydrated(page: &TestPage) -> Result<()> {
    page.wait_for_network_idle().await?;

    expect_body_visible(page).await?;
    expect_landmark_interactive(page, AppVariant::Navbar).await
}

/// Deep link to the first blog post keeps the URL and the layout.
pub async fn blog_route_works(page: &TestPage) -> Result<()> {
    page.goto(NavLink::Blog.path()).await?;
    page.wait_for_network_idle().await?;

    page.expect_url(NavLink::Blog.path()).await?;
    expect_landmark_visible(page, AppVariant::Navbar).await
}

pub async fn routing_system_works(page: &TestPage) -> Result<()> {
    page.goto(NavLink::Home.path()).await?;
    page.wait_for_network_idle().await?;
    page.expect_url(NavLink::Home.path()).await?;

    follow_link(page, NavLink::Blog).await?;
    follow_link(page, NavLink::Home).await
}

async fn follow_link(page: &TestPage, link: NavLink) -> Result<()> {
    let locator = page.get_by_role(AriaRole::Link, link.label()).await;
    page.activate(&locator).await?;
    page.expect_url(link.path()).await
}
