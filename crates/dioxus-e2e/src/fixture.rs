// Fixture - Browser session and per-test pages
//
// Lifecycle:
// - Session::launch() once per test binary: starts the Playwright driver and
//   launches the configured browser
// - Session::new_page() once per test: fresh browser context (viewport,
//   TLS tolerance, network tracker) + page, already navigated to the base URL
//
// Tests never share a context, so cookies, storage and history are isolated.

use crate::assertions::{self, LocatorExpectation, PageExpectation};
use crate::config::{BrowserKind, Config};
use crate::error::{Error, Result};
use crate::locate::{self, AriaRole};
use crate::url_builder::BaseUrl;
use crate::wait::{self, NETWORK_TRACKER_SCRIPT};
use playwright_rs::{Browser, BrowserContext, GotoOptions, Locator, Page, Playwright, WaitUntil};

/// A launched browser shared by the tests of one run.
pub struct Session {
    config: Config,
    playwright: Playwright,
    browser: Browser,
}

impl Session {
    /// Starts Playwright and launches the configured browser.
    ///
    /// # Errors
    ///
    /// Returns error if the Playwright driver or the browser cannot start
    /// (e.g. browsers not installed).
    pub async fn launch(config: Config) -> Result<Self> {
        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(config.launch_options())
            .await?;

        tracing::info!(
            browser = %config.browser,
            version = browser.version(),
            base_url = %config.base_url,
            "Launched browser session"
        );

        Ok(Self {
            config,
            playwright,
            browser,
        })
    }

    /// Launches a session configured from environment variables.
    pub async fn from_env() -> Result<Self> {
        Self::launch(Config::from_env()?).await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Opens a fresh page and navigates it to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Navigation`] if the application is unreachable.
    pub async fn new_page(&self) -> Result<TestPage> {
        let context = self
            .browser
            .new_context_with_options(self.config.context_options())
            .await?;
        context.add_init_script(NETWORK_TRACKER_SCRIPT).await?;
        let page = context.new_page().await?;

        let test_page = TestPage {
            config: self.config.clone(),
            context,
            page,
        };
        test_page.goto("").await?;
        Ok(test_page)
    }

    /// Closes the browser and stops the Playwright driver.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        tracing::debug!("Browser session closed");
        Ok(())
    }
}

/// A page owned by a single test.
pub struct TestPage {
    config: Config,
    context: BrowserContext,
    page: Page,
}

impl TestPage {
    /// The underlying Playwright page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.config.base_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL of a route path.
    pub fn url_for(&self, path: &str) -> Result<String> {
        self.config.base_url.join(path)
    }

    /// Current document URL as last reported by the browser.
    pub fn url(&self) -> String {
        self.page.url()
    }

    /// Navigates directly to a route path (a deep link).
    ///
    /// Waits for the `load` event only; call [`TestPage::wait_for_network_idle`]
    /// before asserting.
    pub async fn goto(&self, path: &str) -> Result<()> {
        let url = self.url_for(path)?;
        tracing::debug!(url = %url, "Navigating");

        let options = GotoOptions::new()
            .timeout(self.config.navigation_timeout)
            .wait_until(WaitUntil::Load);

        match self.page.goto(&url, Some(options)).await {
            Ok(Some(response)) if !response.ok() => {
                tracing::warn!(url = %url, status = response.status(), "Navigation returned an error status");
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(source) => Err(Error::Navigation { url, source }),
        }
    }

    /// Waits until the page has had no network activity for the idle window.
    pub async fn wait_for_network_idle(&self) -> Result<()> {
        wait::wait_for_network_idle(
            &self.page,
            self.config.idle_window,
            self.config.poll_interval,
            self.config.navigation_timeout,
        )
        .await
    }

    /// Locator for a CSS selector.
    pub async fn locator(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    /// Locator for an element by DOM id.
    pub async fn by_id(&self, id: &str) -> Locator {
        self.page.locator(&locate::id_selector(id)).await
    }

    /// Locator for an element by ARIA role and accessible name.
    pub async fn get_by_role(&self, role: AriaRole, name: &str) -> Locator {
        self.page
            .locator(&locate::role_selector(role, Some(name)))
            .await
    }

    /// Locator for the element containing `text`.
    pub async fn get_by_text(&self, text: &str) -> Locator {
        self.page.locator(&locate::text_selector(text)).await
    }

    /// Clicks a locator, then waits for network idle.
    pub async fn activate(&self, locator: &Locator) -> Result<()> {
        tracing::debug!(selector = locator.selector(), "Activating control");
        locator.click(None).await?;
        self.wait_for_network_idle().await
    }

    /// Expectation for a locator, using the session's assertion timeout.
    pub fn expect(&self, locator: Locator) -> LocatorExpectation {
        assertions::expect(locator)
            .with_timeout(self.config.assertion_timeout)
            .with_poll_interval(self.config.poll_interval)
    }

    /// Expectation for the page, using the session's assertion timeout.
    pub fn expect_page(&self) -> PageExpectation<'_> {
        assertions::expect_page(&self.page).with_timeout(self.config.assertion_timeout)
    }

    /// Asserts that the page is exactly at the URL of `path`.
    pub async fn expect_url(&self, path: &str) -> Result<()> {
        let expected = self.url_for(path)?;
        self.expect_page().to_have_url(&expected).await
    }

    /// Closes the page's browser context.
    pub async fn close(self) -> Result<()> {
        self.page.close().await?;
        self.context.close().await?;
        Ok(())
    }
}
