//! dioxus-e2e: End-to-end browser tests for the Dioxus tab navigation app
//!
//! Drives a real browser through Playwright against a running instance of the
//! app (`dx serve --platform web`) and checks what a user would see: the
//! navigation landmark, tab and link roles, URLs after navigation, and the
//! single active tab indicator.
//!
//! # Examples
//!
//! ## Running one scenario by hand
//!
//! ```ignore
//! use dioxus_e2e::{AriaRole, Config, MainTab, Session};
//!
//! #[tokio::main]
//! async fn main() -> dioxus_e2e::Result<()> {
//!     // BASE_URL, BROWSER, HEADED, APP_VARIANT, E2E_TIMEOUT_MS
//!     let session = Session::launch(Config::from_env()?).await?;
//!     let page = session.new_page().await?;
//!     page.wait_for_network_idle().await?;
//!
//!     let account = page.get_by_role(AriaRole::Tab, "Account").await;
//!     page.activate(&account).await?;
//!     page.expect_url(MainTab::Account.path()).await?;
//!     dioxus_e2e::tabs::expect_active_tab(&page, MainTab::Account).await?;
//!
//!     page.close().await?;
//!     session.close().await
//! }
//! ```
//!
//! ## Running a whole suite
//!
//! ```ignore
//! use dioxus_e2e::{Session, run_suite, scenarios};
//!
//! #[tokio::main]
//! async fn main() -> dioxus_e2e::Result<()> {
//!     let session = Session::from_env().await?;
//!     let suite = scenarios::for_variant(session.config().variant);
//!     let report = run_suite(&session, &suite).await;
//!     println!("{}", report.summary());
//!     session.close().await
//! }
//! ```
//!
//! # Browser installation
//!
//! Browsers must match the Playwright driver bundled with `playwright-rs`:
//!
//! ```bash
//! npx playwright@1.56.1 install chromium
//! ```

pub mod assertions;
pub mod config;
mod error;
pub mod fixture;
pub mod locate;
pub mod routes;
pub mod runner;
pub mod scenarios;
pub mod tabs;
pub mod url_builder;
pub mod wait;

// Re-export error types
pub use error::{Error, Result};

// Re-export the fixture entry points
pub use config::{BrowserKind, Config};
pub use fixture::{Session, TestPage};

// Re-export assertions API
pub use assertions::{expect, expect_page};

// Re-export routing and locator types
pub use locate::AriaRole;
pub use routes::{AppVariant, MainTab, NavLink};
pub use url_builder::{BaseUrl, build_url, urls_match};

// Re-export runner API
pub use runner::{Outcome, Scenario, SuiteReport, run_suite, run_suite_strict};
