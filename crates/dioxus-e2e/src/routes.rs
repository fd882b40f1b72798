// Routes - Navigation controls exposed by the application under test
//
// The app has shipped in two shapes: the layout-only starter with a top
// navbar (Home / Blog), and the bottom tab bar layout (Social Feed /
// Map View / Account). Only one of them is served at a time.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// The three tabs of the bottom tab bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainTab {
    SocialFeed,
    MapView,
    Account,
}

impl MainTab {
    /// All tabs, left to right.
    pub const ALL: [MainTab; 3] = [MainTab::SocialFeed, MainTab::MapView, MainTab::Account];

    /// Accessible name of the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::SocialFeed => "Social Feed",
            MainTab::MapView => "Map View",
            MainTab::Account => "Account",
        }
    }

    /// Route path relative to the base URL. Map View is the root route.
    pub fn path(&self) -> &'static str {
        match self {
            MainTab::SocialFeed => "social",
            MainTab::MapView => "",
            MainTab::Account => "account",
        }
    }

    /// Heading rendered by the tab's placeholder page.
    pub fn heading(&self) -> &'static str {
        self.label()
    }

    /// Description text rendered by the tab's placeholder page.
    pub fn body_text(&self) -> &'static str {
        match self {
            MainTab::SocialFeed => "Friends' reviews and recommendations will appear here",
            MainTab::MapView => "Restaurant map will appear here",
            MainTab::Account => "Profile and settings will appear here",
        }
    }

    /// Finds the tab whose accessible name is `label`, ignoring case like the
    /// role locators do.
    pub fn from_label(label: &str) -> Option<MainTab> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for MainTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Links in the navbar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    Blog,
}

impl NavLink {
    pub const ALL: [NavLink; 2] = [NavLink::Home, NavLink::Blog];

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Blog => "Blog",
        }
    }

    /// The Blog link always opens the first post.
    pub fn path(&self) -> &'static str {
        match self {
            NavLink::Home => "",
            NavLink::Blog => "blog/1",
        }
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which shape of the application is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppVariant {
    /// Bottom tab bar with Map View, Account and Social Feed routes
    #[default]
    TabBar,
    /// Top navbar with Home and Blog routes
    Navbar,
}

impl AppVariant {
    /// CSS id of the variant's navigation landmark.
    pub fn landmark_selector(&self) -> &'static str {
        match self {
            AppVariant::TabBar => "#bottom-tab-bar",
            AppVariant::Navbar => "#navbar",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppVariant::TabBar => "tab-bar",
            AppVariant::Navbar => "navbar",
        }
    }
}

impl fmt::Display for AppVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tab-bar" | "tabbar" | "tabs" => Ok(AppVariant::TabBar),
            "navbar" => Ok(AppVariant::Navbar),
            other => Err(Error::Config(format!(
                "unknown app variant '{}' (expected 'tab-bar' or 'navbar')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_view_is_root_route() {
        assert_eq!(MainTab::MapView.path(), "");
        assert_eq!(MainTab::Account.path(), "account");
        assert_eq!(MainTab::SocialFeed.path(), "social");
    }

    #[test]
    fn test_tab_labels_round_trip() {
        for tab in MainTab::ALL {
            assert_eq!(MainTab::from_label(tab.label()), Some(tab));
            assert_eq!(tab.heading(), tab.to_string());
        }
        assert_eq!(MainTab::from_label("  Account\n"), Some(MainTab::Account));
        assert_eq!(MainTab::from_label("MAP VIEW"), Some(MainTab::MapView));
        assert_eq!(MainTab::from_label("social feed"), Some(MainTab::SocialFeed));
        assert_eq!(MainTab::from_label("Blog"), None);
    }

    #[test]
    fn test_app_variant_parsing() {
        assert_eq!("tab-bar".parse::<AppVariant>().unwrap(), AppVariant::TabBar);
        assert_eq!("NAVBAR".parse::<AppVariant>().unwrap(), AppVariant::Navbar);
        assert!("sidebar".parse::<AppVariant>().is_err());
        assert_eq!(AppVariant::default(), AppVariant::TabBar);
        assert_eq!(AppVariant::Navbar.landmark_selector(), "#navbar");
    }
}
