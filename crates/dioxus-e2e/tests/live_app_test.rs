// Runs the scenarios against a real app instance
//
// Start the app first, then run the ignored tests for its layout:
//   dx serve --platform web
//   BASE_URL=http://localhost:8080 cargo test -p dioxus-e2e --test live_app_test tab_bar:: -- --ignored
//   BASE_URL=http://localhost:8080 cargo test -p dioxus-e2e --test live_app_test navbar:: -- --ignored
//
// test_live_app_suite runs the whole suite selected by APP_VARIANT.
// BROWSER picks the engine.


use dioxus_e2e::runner::run_scenario;
use dioxus_e2e::{AppVariant, Config, Scenario, Session, run_suite_strict, scenarios};
use test_server::init_tracing;

fn live_config() -> Config {
    init_tracing();
    Config::from_env().expect("Invalid e2e environment")
}

/// Runs one scenario against the app at BASE_URL.
async fn run_live_scenario(variant: AppVariant, scenario: Scenario) {
    let session = Session::launch(live_config().with_variant(variant))
        .await
        .expect("Failed to launch browser session");
    let report = run_scenario(&session, &scenario).await;
    session.close().await.expect("Failed to close session");
    assert!(
        report.outcome.is_passed(),
        "{}: {:?}",
        scenario.name,
        report.outcome
    );
}

mod tab_bar {
    use super::run_live_scenario;
    use dioxus_e2e::AppVariant;

    scenario_tests!(
        #[ignore = "requires a running tab bar app at BASE_URL"]
        run_live_scenario, AppVariant::TabBar, tab_bar: [
            home_page_renders_map_view,
            bottom_tab_bar_renders,
            all_three_tabs_are_present,
            tab_navigation_updates_url,
            account_tab_click_selects_account,
            active_tab_indicator,
            deep_linking_map_view,
            deep_linking_account,
            deep_linking_social_feed,
            map_view_placeholder_displays,
            account_view_placeholder_displays,
            social_feed_view_placeholder_displays,
            only_one_tab_active_at_a_time,
            tab_round_trip_restores_state,
            layout_is_interactive,
        ]
    );
}

mod navbar {
    use super::run_live_scenario;
    use dioxus_e2e::AppVariant;

    scenario_tests!(
        #[ignore = "requires a running navbar app at BASE_URL"]
        run_live_scenario, AppVariant::Navbar, navbar: [
            home_page_loads_and_displays_content,
            navbar_navigation_works,
            app_is_fully_hydrated,
            blog_route_works,
            routing_system_works,
        ]
    );
}

#[tokio::test]
#[ignore = "requires a running app at BASE_URL"]
async fn test_live_app_suite() {
    let config = live_config();
    tracing::info!(
        "Testing {} ({}) with {:?}",
        config.base_url,
        config.variant.as_str(),
        config.browser
    );

    let suite = scenarios::for_variant(config.variant);
    let session = Session::launch(config)
        .await
        .expect("Failed to launch browser session");

    let result = run_suite_strict(&session, &suite).await;
    session.close().await.expect("Failed to close session");

    let report = result.unwrap_or_else(|e| panic!("{}", e));
    println!("{}", report.summary());
}
