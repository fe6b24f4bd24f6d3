//! Theme mode selection
//!
//! The engine does not detect the OS appearance itself. Hosts report it
//! through [`ConfigStore::set_system_appearance`](crate::store::ConfigStore::set_system_appearance)
//! and [`ThemeMode::System`] follows whatever was reported last.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Requested presentation mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host-reported appearance
    #[default]
    System,
}

impl ThemeMode {
    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    }

    /// Parse an id, case-insensitively. `auto` is accepted for `system`.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        if id.eq_ignore_ascii_case("auto") {
            return Some(ThemeMode::System);
        }
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.id().eq_ignore_ascii_case(id))
    }

    /// Whether this mode renders dark given the current system appearance
    pub fn resolve_is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
        }
    }

    /// The explicit opposite of what is currently shown
    pub fn toggled(self, system_is_dark: bool) -> Self {
        if self.resolve_is_dark(system_is_dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_dark() {
        assert!(!ThemeMode::Light.resolve_is_dark(true));
        assert!(ThemeMode::Dark.resolve_is_dark(false));
        assert!(ThemeMode::System.resolve_is_dark(true));
        assert!(!ThemeMode::System.resolve_is_dark(false));
    }

    #[test]
    fn test_toggled_is_explicit() {
        assert_eq!(ThemeMode::System.toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::System.toggled(false), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(false), ThemeMode::Light);
    }

    #[test]
    fn test_from_id() {
        for &mode in ThemeMode::all() {
            assert_eq!(ThemeMode::from_id(mode.id()), Some(mode));
        }
        assert_eq!(ThemeMode::from_id("AUTO"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::from_id("sepia"), None);
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
