//! Render configuration types.

use serde::{Deserialize, Serialize};

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme (site default).
    #[default]
    Dark,
}

impl Theme {
    /// Get the CSS class for this theme.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected 'light' or 'dark')")),
        }
    }
}

/// Page section visibility configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSections {
    /// About section.
    #[serde(default = "default_true")]
    pub about: bool,
    /// Skills section.
    #[serde(default = "default_true")]
    pub skills: bool,
    /// Project card grid.
    #[serde(default = "default_true")]
    pub projects: bool,
    /// Experience timeline.
    #[serde(default = "default_true")]
    pub experience: bool,
    /// Education section.
    #[serde(default = "default_true")]
    pub education: bool,
    /// Contact form.
    #[serde(default = "default_true")]
    pub contact: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PageSections {
    fn default() -> Self {
        Self {
            about: true,
            skills: true,
            projects: true,
            experience: true,
            education: true,
            contact: true,
        }
    }
}

/// Site owner identity shown in the hero and contact sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerProfile {
    /// Display name.
    pub name: String,
    /// One-line tagline under the name.
    pub tagline: String,
    /// Contact address, recipient of the contact form mailto.
    pub email: String,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            name: "Portfolio Owner".to_string(),
            tagline: "Environmental Data & Sustainability".to_string(),
            email: "owner@example.com".to_string(),
        }
    }
}

/// Complete render configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Custom page title; defaults to the owner name.
    pub title: Option<String>,
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
    /// Section visibility.
    #[serde(default)]
    pub sections: PageSections,
    /// Owner identity.
    #[serde(default)]
    pub owner: OwnerProfile,
}

impl RenderConfig {
    /// Create a new render configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the owner profile.
    pub fn with_owner(mut self, owner: OwnerProfile) -> Self {
        self.owner = owner;
        self
    }

    /// Effective page title.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.owner.name)
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.sections.projects);
        assert_eq!(config.title(), "Portfolio Owner");
    }

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new()
            .with_title("Test Portfolio")
            .with_theme(Theme::Light);
        assert_eq!(config.title(), "Test Portfolio");
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_theme_css_class() {
        assert_eq!(Theme::Light.css_class(), "light-mode");
        assert_eq!(Theme::Dark.css_class(), "");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = RenderConfig::default().with_title("X");
        let json = config.to_json().unwrap();
        let parsed = RenderConfig::from_json(&json).unwrap();
        assert_eq!(parsed.title(), "X");
        assert_eq!(parsed.theme, config.theme);
    }
}
