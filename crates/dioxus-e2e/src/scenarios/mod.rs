//! Behavioral checks against the running application.
//!
//! Every scenario starts from a page that the fixture has already navigated
//! to the base URL, and follows the same shape: optionally navigate, wait for
//! network idle, locate, assert. Scenarios never depend on each other.

pub mod navbar;
pub mod tab_bar;

use crate::error::Result;
use crate::fixture::TestPage;
use crate::routes::AppVariant;
use crate::runner::Scenario;

/// Registers an async scenario function under its own name.
macro_rules! scenario {
    ($name:ident) => {
        $crate::runner::Scenario::new(stringify!($name), |page| Box::pin($name(page)))
    };
}
pub(crate) use scenario;

/// Scenarios that apply to the given application shape.
pub fn for_variant(variant: AppVariant) -> Vec<Scenario> {
    match variant {
        AppVariant::TabBar => tab_bar::all(),
        AppVariant::Navbar => navbar::all(),
    }
}

/// The document body is rendered and visible.
pub async fn expect_body_visible(page: &TestPage) -> Result<()> {
    let body = page.locator("body").await;
    page.expect(body).to_be_visible().await
}

/// The variant's navigation landmark is rendered and visible.
pub async fn expect_landmark_visible(page: &TestPage, variant: AppVariant) -> Result<()> {
    let landmark = page.locator(variant.landmark_selector()).await;
    page.expect(landmark).to_be_visible().await
}

/// Clicking the layout landmark works and leaves it visible (hydration check).
pub async fn expect_landmark_interactive(page: &TestPage, variant: AppVariant) -> Result<()> {
    let landmark = page.locator(variant.landmark_selector()).await;
    landmark.click(None).await?;
    page.expect(landmark).to_be_visible().await
}
