// Locate - Selector builders for role, text and id queries
//
// Produces the same selector strings Playwright's own language clients send
// for get_by_role() and get_by_text(), so matching follows the accessibility
// tree rather than markup details.
//
// See: https://playwright.dev/docs/locators

use std::fmt;

/// ARIA roles queried by the scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    Heading,
    Link,
    Tab,
}

impl AriaRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaRole::Heading => "heading",
            AriaRole::Link => "link",
            AriaRole::Tab => "tab",
        }
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector for elements with `role` whose accessible name contains `name`
/// (case-insensitive), like `page.get_by_role(role, name=...)`.
pub fn role_selector(role: AriaRole, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("internal:role={}[name={}i]", role, quote(name)),
        None => format!("internal:role={}", role),
    }
}

/// Selector for the smallest element containing `text` (case-insensitive).
pub fn text_selector(text: &str) -> String {
    format!("internal:text={}i", quote(text))
}

/// Selector for an element by its DOM id.
pub fn id_selector(id: &str) -> String {
    format!("#{}", id.trim_start_matches('#'))
}

/// Selector for every element carrying an explicit `role` attribute.
pub fn role_attribute_selector(role: AriaRole) -> String {
    format!("[role=\"{}\"]", role)
}

// Playwright parses selector values as JSON strings.
fn quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
