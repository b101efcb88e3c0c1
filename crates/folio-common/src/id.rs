//! Project identity type.
//!
//! A project is addressed everywhere by its slug, the value carried in the
//! page markup (`data-project="coastal"`) and used as the registry key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Project slug wrapper used as the registry key.
///
/// Slugs are lowercase ASCII with `-` separators (`"coastal"`,
/// `"sustainable-ai"`). Construction does not validate: stale or malformed
/// slugs from markup drift must stay representable so a lookup can miss
/// without failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    /// Create a project id from a slug string.
    pub fn new(slug: impl Into<String>) -> Self {
        ProjectId(slug.into())
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the slug is well formed: non-empty, lowercase ASCII
    /// alphanumeric with `-` separators, no leading/trailing/doubled `-`.
    pub fn is_well_formed(&self) -> bool {
        let s = self.0.as_str();
        if s.is_empty() || s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return false;
        }
        s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(slug: &str) -> Self {
        ProjectId(slug.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(slug: String) -> Self {
        ProjectId(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let id = ProjectId::new("coastal");
        assert_eq!(id.to_string(), "coastal");
        assert_eq!(id.as_str(), "coastal");
    }

    #[test]
    fn test_well_formed_slugs() {
        assert!(ProjectId::new("coastal").is_well_formed());
        assert!(ProjectId::new("sustainable-ai").is_well_formed());
        assert!(ProjectId::new("un-disaster").is_well_formed());
    }

    #[test]
    fn test_malformed_slugs() {
        assert!(!ProjectId::new("").is_well_formed());
        assert!(!ProjectId::new("-coastal").is_well_formed());
        assert!(!ProjectId::new("coastal-").is_well_formed());
        assert!(!ProjectId::new("a--b").is_well_formed());
        assert!(!ProjectId::new("Coastal").is_well_formed());
        assert!(!ProjectId::new("a b").is_well_formed());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProjectId::new("wuppertal");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""wuppertal""#);
        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
