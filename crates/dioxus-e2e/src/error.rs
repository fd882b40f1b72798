// Error types for dioxus-e2e

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the application under test
#[derive(Debug, Error)]
pub enum Error {
    /// Navigating to a URL failed
    ///
    /// Usually means the application server is not running at the base URL.
    /// Start it with `dx serve --platform web` or point `BASE_URL` elsewhere.
    #[error("Failed to navigate to '{url}': {source}")]
    Navigation {
        url: String,
        #[source]
        source: playwright_rs::Error,
    },

    /// An expectation was not met before its timeout elapsed
    #[error("Assertion failed for {subject}: expected {expected}, got {actual}")]
    AssertionFailed {
        subject: String,
        expected: String,
        actual: String,
    },

    /// No element matched the selector before the timeout elapsed
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// The page never settled into the network-idle state
    #[error("Timeout: {0}")]
    Timeout(String),

    /// A base URL or path could not be parsed or joined
    #[error("Invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Invalid regular expression passed to a class assertion
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Environment configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reported by the Playwright bindings
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for errors that mean "the app did not behave as expected",
    /// as opposed to hard errors such as an unreachable server.
    pub fn is_failure(&self) -> bool {
        match self {
            Error::AssertionFailed { .. } | Error::ElementNotFound(_) | Error::Timeout(_) => true,
            Error::Playwright(inner) => matches!(
                inner,
                playwright_rs::Error::AssertionTimeout(_)
                    | playwright_rs::Error::ElementNotFound(_)
                    | playwright_rs::Error::Timeout(_)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_errors_are_failures() {
        let err = Error::AssertionFailed {
            subject: "page URL".to_string(),
            expected: "'http://localhost:8080/account'".to_string(),
            actual: "'http://localhost:8080/'".to_string(),
        };
        assert!(err.is_failure());
        assert_eq!(
            err.to_string(),
            "Assertion failed for page URL: expected 'http://localhost:8080/account', got 'http://localhost:8080/'"
        );

        assert!(Error::ElementNotFound("#navbar".to_string()).is_failure());
        assert!(Error::Timeout("network idle".to_string()).is_failure());
        assert!(
            Error::Playwright(playwright_rs::Error::AssertionTimeout("x".to_string())).is_failure()
        );
    }

    #[test]
    fn test_navigation_and_config_errors_are_hard_errors() {
        let err = Error::Navigation {
            url: "http://localhost:8080/".to_string(),
            source: playwright_rs::Error::ProtocolError("net::ERR_CONNECTION_REFUSED".to_string()),
        };
        assert!(!err.is_failure());
        assert!(err.to_string().contains("http://localhost:8080/"));

        assert!(!Error::Config("BROWSER".to_string()).is_failure());
    }
}
