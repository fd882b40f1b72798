// URL builder - Joins the application base URL with route paths
//
// The base is always treated as a directory (exactly one trailing slash) and
// the path as relative (leading slashes stripped), so bases that carry a
// subpath prefix such as `https://example.com/app` keep their prefix.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Normalizes `base_url` and joins `path` onto it.
///
/// # Example
///
/// ```ignore
/// use dioxus_e2e::build_url;
///
/// assert_eq!(build_url("http://localhost:8080", "/account")?, "http://localhost:8080/account");
/// assert_eq!(build_url("http://localhost:8080/", "")?, "http://localhost:8080/");
/// ```
pub fn build_url(base_url: &str, path: &str) -> Result<String> {
    BaseUrl::parse(base_url)?.join(path)
}

/// Whether the browser's location matches an expected URL.
///
/// `location.href` is already normalized by the browser and `expected` comes
/// from [`build_url`], so the comparison is exact: a missing trailing slash,
/// an extra query or a fragment all count as a different page.
pub fn urls_match(actual: &str, expected: &str) -> bool {
    actual == expected
}

/// Root address of the application under test.
///
/// Always holds a path ending in a single `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    url: Url,
}

impl BaseUrl {
    /// Parses and normalizes a base URL.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = format!("{}/", input.trim().trim_end_matches('/'));
        let url = Url::parse(&normalized).map_err(|source| Error::InvalidUrl {
            input: input.to_string(),
            source,
        })?;
        Ok(Self { url })
    }

    /// Returns the normalized base URL, including its trailing slash.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Joins a route path onto the base URL.
    ///
    /// An empty path (or `/`) yields the base URL itself.
    pub fn join(&self, path: &str) -> Result<String> {
        let relative = path.trim_start_matches('/');
        self.url
            .join(relative)
            .map(String::from)
            .map_err(|source| Error::InvalidUrl {
                input: path.to_string(),
                source,
            })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
