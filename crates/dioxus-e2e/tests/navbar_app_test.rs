// Integration tests for the navbar (layout-only) application shape
//
// Tests cover:
// - every navbar scenario, one test each (e.g. `cargo test scenario::blog_route_works`)
// - GET /blog/1 directly keeps the URL and the navbar


use dioxus_e2e::{AppVariant, AriaRole, NavLink};
use test_server::start_app;

mod scenario {
    use crate::test_server::run_scenario_test;
    use dioxus_e2e::AppVariant;

    scenario_tests!(run_scenario_test, AppVariant::Navbar, navbar: [
        home_page_loads_and_displays_content,
        navbar_navigation_works,
        app_is_fully_hydrated,
        blog_route_works,
        routing_system_works,
    ]);
}

#[tokio::test]
async fn test_blog_deep_link_keeps_url_and_layout() {
    let (server, session) = start_app(AppVariant::Navbar).await;
    let page = session.new_page().await.expect("Failed to open page");

    page.goto(NavLink::Blog.path()).await.expect("Failed to deep link");
    page.wait_for_network_idle().await.expect("Page never idled");

    assert_eq!(page.url(), format!("{}/blog/1", server.url()));
    page.expect_url("/blog/1").await.expect("URL should stay on the post");

    let navbar = page.by_id("navbar").await;
    page.expect(navbar).to_be_visible().await.expect("Navbar should render");

    // Links keep working after a deep link
    let home = page.get_by_role(AriaRole::Link, NavLink::Home.label()).await;
    page.activate(&home).await.expect("Failed to follow Home");
    page.expect_url(NavLink::Home.path())
        .await
        .expect("Home should lead to the root URL");

    page.close().await.expect("Failed to close page");
    session.close().await.expect("Failed to close session");
    server.shutdown();
}
