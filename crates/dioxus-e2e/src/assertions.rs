// Assertions - Auto-retry expectations for locators and pages
//
// Visibility is checked by playwright_rs::expect(). The attribute, class and
// URL expectations it lacks poll the same way: until they match or the
// timeout elapses, reporting expected vs actual on failure.
//
// See: https://playwright.dev/docs/test-assertions

use crate::config::{DEFAULT_ASSERTION_TIMEOUT, DEFAULT_NAVIGATION_TIMEOUT};
use crate::error::{Error, Result};
use crate::url_builder::urls_match;
use playwright_rs::{Locator, Page};
use regex::Regex;
use std::future::Future;
use std::time::{Duration, Instant};

/// Default polling interval for assertions (100ms)
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates an expectation for a locator with auto-retry behavior.
///
/// # Example
///
/// ```ignore
/// use dioxus_e2e::expect;
///
/// let tab = page.locator("internal:role=tab[name=\"Account\"i]").await;
/// expect(tab.clone()).to_have_attribute("aria-selected", "true").await?;
/// expect(tab).to_have_class("active").await?;
/// ```
pub fn expect(locator: Locator) -> LocatorExpectation {
    LocatorExpectation {
        locator,
        polling: Polling::default(),
        negate: false,
    }
}

/// Creates an expectation for the page itself (currently its URL).
pub fn expect_page(page: &Page) -> PageExpectation<'_> {
    PageExpectation {
        page,
        polling: Polling::default(),
    }
}

#[derive(Debug, Clone, Copy)]
struct Polling {
    timeout: Duration,
    interval: Duration,
}

impl Default for Polling {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_ASSERTION_TIMEOUT,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Polling {
    /// Runs one probe, bounded by whatever is left of the timeout.
    ///
    /// Returns `None` if the probe itself did not finish in time.
    async fn probe<T, F>(&self, start: Instant, fut: F) -> Result<Option<T>>
    where
        F: Future<Output = playwright_rs::Result<T>>,
    {
        let remaining = self
            .timeout
            .saturating_sub(start.elapsed())
            .max(self.interval);
        match tokio::time::timeout(remaining, fut).await {
            Ok(result) => Ok(Some(result?)),
            Err(_) => Ok(None),
        }
    }

    fn expired(&self, start: Instant) -> bool {
        start.elapsed() >= self.timeout
    }
}

/// Expectation wraps a locator and provides assertion methods with auto-retry.
pub struct LocatorExpectation {
    locator: Locator,
    polling: Polling,
    negate: bool,
}

// Allow clippy::wrong_self_convention for to_* methods that consume self
#[allow(clippy::wrong_self_convention)]
impl LocatorExpectation {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.polling.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.polling.interval = interval;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Asserts that the element is visible.
    ///
    /// Delegates to `playwright_rs::expect`; a miss surfaces as
    /// `playwright_rs::Error::AssertionTimeout`.
    pub async fn to_be_visible(self) -> Result<()> {
        let expectation = playwright_rs::expect(self.locator)
            .with_timeout(self.polling.timeout)
            .with_poll_interval(self.polling.interval);
        let expectation = if self.negate {
            expectation.not()
        } else {
            expectation
        };
        expectation.to_be_visible().await?;
        Ok(())
    }

    /// Asserts that the element's `name` attribute equals `expected`.
    ///
    /// A missing attribute never matches (and always satisfies `not()`).
    pub async fn to_have_attribute(self, name: &str, expected: &str) -> Result<()> {
        let start = Instant::now();
        let mut last: Option<Option<String>> = None;

        loop {
            if let Some(actual) = self
                .polling
                .probe(start, self.locator.get_attribute(name))
                .await?
            {
                let matches = actual.as_deref() == Some(expected);
                if matches != self.negate {
                    return Ok(());
                }
                last = Some(actual);
            }

            if self.polling.expired(start) {
                return Err(Error::AssertionFailed {
                    subject: format!(
                        "attribute '{}' of '{}'",
                        name,
                        self.locator.selector()
                    ),
                    expected: negatable(self.negate, format!("'{}'", expected)),
                    actual: describe_attribute(last),
                });
            }

            tokio::time::sleep(self.polling.interval).await;
        }
    }

    /// Asserts that the element's `class` attribute matches the regex `pattern`.
    ///
    /// Mirrors `to_have_class(re.compile(pattern))`: the pattern may match
    /// anywhere in the attribute value.
    pub async fn to_have_class(self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern)?;
        let start = Instant::now();
        let mut last: Option<Option<String>> = None;

        loop {
            if let Some(actual) = self
                .polling
                .probe(start, self.locator.get_attribute("class"))
                .await?
            {
                let matches = regex.is_match(actual.as_deref().unwrap_or_default());
                if matches != self.negate {
                    return Ok(());
                }
                last = Some(actual);
            }

            if self.polling.expired(start) {
                return Err(Error::AssertionFailed {
                    subject: format!("class of '{}'", self.locator.selector()),
                    expected: negatable(self.negate, format!("to match /{}/", pattern)),
                    actual: describe_attribute(last),
                });
            }

            tokio::time::sleep(self.polling.interval).await;
        }
    }
}

/// Expectation on page-level state.
pub struct PageExpectation<'a> {
    page: &'a Page,
    polling: Polling,
}

#[allow(clippy::wrong_self_convention)]
impl PageExpectation<'_> {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.polling.timeout = timeout;
        self
    }

    /// Asserts that the document location is exactly `expected`.
    ///
    /// Reads `location.href` from the page rather than the last navigation
    /// event, so history.pushState() routing is observed immediately.
    pub async fn to_have_url(self, expected: &str) -> Result<()> {
        let start = Instant::now();
        let mut last = None;

        loop {
            if let Some(actual) = self
                .polling
                .probe(start, self.page.evaluate_value("window.location.href"))
                .await?
            {
                if urls_match(&actual, expected) {
                    return Ok(());
                }
                last = Some(actual);
            }

            if self.polling.expired(start) {
                return Err(Error::AssertionFailed {
                    subject: "page URL".to_string(),
                    expected: format!("'{}'", expected),
                    actual: last
                        .map(|url| format!("'{}'", url))
                        .unwrap_or_else(|| format!("'{}'", self.page.url())),
                });
            }

            tokio::time::sleep(self.polling.interval).await;
        }
    }
}

/// Reads a computed CSS property of the first element matching a CSS selector.
///
/// # Errors
///
/// Returns [`Error::ElementNotFound`] if nothing matches `selector`.
pub async fn computed_style(page: &Page, selector: &str, property: &str) -> Result<String> {
    let value: Option<String> = tokio::time::timeout(
        DEFAULT_NAVIGATION_TIMEOUT,
        page.evaluate(
            r#"([selector, property]) => {
  const el = document.querySelector(selector);
  return el ? window.getComputedStyle(el).getPropertyValue(property) : null;
}"#,
            Some(&[selector, property]),
        ),
    )
    .await
    .map_err(|_| Error::Timeout(format!("reading '{}' of '{}'", property, selector)))??;

    value.ok_or_else(|| Error::ElementNotFound(selector.to_string()))
}

fn negatable(negate: bool, expected: String) -> String {
    if negate {
        format!("not {}", expected)
    } else {
        expected
    }
}

fn describe_attribute(last: Option<Option<String>>) -> String {
    match last {
        Some(Some(value)) => format!("'{}'", value),
        Some(None) => "no attribute".to_string(),
        None => "no answer".to_string(),
    }
}
