// Config - Session settings resolved from the environment
//
// Environment variables:
// - BASE_URL        application root (default http://localhost:8080)
// - BROWSER         chromium | firefox | webkit (default chromium)
// - HEADED          1/true to show the browser window
// - APP_VARIANT     tab-bar | navbar (default tab-bar)
// - E2E_TIMEOUT_MS  assertion timeout in milliseconds (default 5000)

use crate::error::{Error, Result};
use crate::routes::AppVariant;
use crate::url_builder::BaseUrl;
use playwright_rs::{BrowserContextOptions, LaunchOptions, Viewport};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Base URL used when `BASE_URL` is unset (`dx serve --platform web`).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Viewport width used for every browser context
pub const VIEWPORT_WIDTH: u32 = 1280;

/// Viewport height used for every browser context
pub const VIEWPORT_HEIGHT: u32 = 720;

/// Default timeout for assertions (5 seconds, matching Playwright)
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for navigation and network-idle waits (30 seconds, matching Playwright)
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Quiet period that defines network idle (500ms, matching Playwright's `networkidle`)
pub const DEFAULT_IDLE_WINDOW: Duration = Duration::from_millis(500);

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!(
                "unknown browser '{}' (expected chromium, firefox or webkit)",
                other
            ))),
        }
    }
}

/// Settings shared by every test in a session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root address of the application under test
    pub base_url: BaseUrl,
    /// Browser engine to launch
    pub browser: BrowserKind,
    /// Run without a visible window
    pub headless: bool,
    /// Which application shape is being served
    pub variant: AppVariant,
    /// Viewport applied to every browser context
    pub viewport: Viewport,
    /// Accept self-signed certificates
    pub ignore_https_errors: bool,
    /// How long expectations keep polling
    pub assertion_timeout: Duration,
    /// How often expectations poll
    pub poll_interval: Duration,
    /// Upper bound for navigation and network-idle waits
    pub navigation_timeout: Duration,
    /// Quiet period that counts as network idle
    pub idle_window: Duration,
}

impl Config {
    /// Resolves the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();

        if let Some(base_url) = value("BASE_URL") {
            config.base_url = BaseUrl::parse(&base_url)?;
        }
        if let Some(browser) = value("BROWSER") {
            config.browser = browser.parse()?;
        }
        if let Some(headed) = value("HEADED") {
            config.headless = !parse_flag("HEADED", &headed)?;
        }
        if let Some(variant) = value("APP_VARIANT") {
            config.variant = variant.parse()?;
        }
        if let Some(timeout) = value("E2E_TIMEOUT_MS") {
            let millis: u64 = timeout.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "E2E_TIMEOUT_MS must be a number of milliseconds, got '{}'",
                    timeout
                ))
            })?;
            config.assertion_timeout = Duration::from_millis(millis);
        }

        tracing::debug!(
            base_url = %config.base_url,
            browser = %config.browser,
            headless = config.headless,
            variant = %config.variant,
            "Resolved e2e configuration"
        );
        Ok(config)
    }

    /// Replaces the base URL, e.g. with the address of a local test server.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = BaseUrl::parse(base_url)?;
        Ok(self)
    }

    pub fn with_variant(mut self, variant: AppVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Options for launching the browser.
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions::new().headless(self.headless)
    }

    /// Options applied to each fresh browser context.
    pub fn context_options(&self) -> BrowserContextOptions {
        BrowserContextOptions::builder()
            .viewport(self.viewport.clone())
            .ignore_https_errors(self.ignore_https_errors)
            .build()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            browser: BrowserKind::default(),
            headless: true,
            variant: AppVariant::default(),
            viewport: Viewport {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
            },
            ignore_https_errors: true,
            assertion_timeout: DEFAULT_ASSERTION_TIMEOUT,
            poll_interval: Duration::from_millis(100),
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            idle_window: DEFAULT_IDLE_WINDOW,
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be a boolean flag, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.browser, BrowserKind::Chromium);
        assert!(config.headless);
        assert_eq!(config.variant, AppVariant::TabBar);
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert!(config.ignore_https_errors);
        assert_eq!(config.assertion_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BASE_URL", "https://staging.example.com/app"),
            ("BROWSER", "firefox"),
            ("HEADED", "1"),
            ("APP_VARIANT", "navbar"),
            ("E2E_TIMEOUT_MS", "12000"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://staging.example.com/app/");
        assert_eq!(config.browser, BrowserKind::Firefox);
        assert!(!config.headless);
        assert_eq!(config.variant, AppVariant::Navbar);
        assert_eq!(config.assertion_timeout, Duration::from_millis(12000));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[("BASE_URL", "  "), ("BROWSER", "")])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.browser, BrowserKind::Chromium);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = Config::from_lookup(lookup_from(&[("BROWSER", "netscape")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("HEADED", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("HEADED"));

        let err = Config::from_lookup(lookup_from(&[("E2E_TIMEOUT_MS", "5s")])).unwrap_err();
        assert!(err.to_string().contains("E2E_TIMEOUT_MS"));
    }

    #[test]
    fn test_context_options_carry_viewport_and_tls_tolerance() {
        let options = Config::default().context_options();
        let viewport = options.viewport.expect("viewport should be set");
        assert_eq!((viewport.width, viewport.height), (1280, 720));
        assert_eq!(options.ignore_https_errors, Some(true));
    }
}
