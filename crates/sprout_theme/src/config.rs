//! Theme config documents
//!
//! A [`ThemeConfig`] is the serializable form of everything a store is
//! built from: mode, locale, seed and recorded component overrides. The
//! crate only converts to and from strings; reading and writing files is up
//! to the host.
//!
//! ```toml
//! theme = "dark"
//! locale = "en-US"
//!
//! [seed]
//! color_primary = "#722ed1"
//! border_radius = 4.0
//!
//! [overrides.button.icon_gap]
//! number = 10.0
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::{ComponentFamily, ComponentOverrides, TokenValue};
use crate::error::{ConfigError, Result};
use crate::locale::Locale;
use crate::scheme::ThemeMode;
use crate::tokens::SeedToken;

/// Overrides keyed by family name, then field name
pub type OverrideTable = BTreeMap<String, BTreeMap<String, TokenValue>>;

/// Serializable theme configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme: ThemeMode,
    pub locale: Locale,
    pub seed: SeedToken,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: OverrideTable,
}

impl ThemeConfig {
    /// Build a document from store state
    pub fn from_parts(
        theme: ThemeMode,
        locale: Locale,
        seed: SeedToken,
        overrides: &ComponentOverrides,
    ) -> Self {
        let mut table = OverrideTable::new();
        for (family, field, value) in overrides.iter() {
            table
                .entry(family.name().to_string())
                .or_default()
                .insert(field.to_string(), value.clone());
        }

        Self {
            theme,
            locale,
            seed,
            overrides: table,
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the override table against the component families.
    ///
    /// Fails on the first unknown family, unknown field or value of the
    /// wrong kind.
    pub fn component_overrides(&self) -> Result<ComponentOverrides> {
        let mut overrides = ComponentOverrides::new();
        for (family_name, fields) in &self.overrides {
            let family = ComponentFamily::from_name(family_name)
                .ok_or_else(|| ConfigError::UnknownFamily(family_name.clone()))?;
            for (field, value) in fields {
                overrides.set(family, field, value.clone())?;
            }
        }
        Ok(overrides)
    }

    /// Keep every override that still matches a family and field. Stale
    /// entries are logged and dropped.
    pub fn usable_overrides(&self) -> ComponentOverrides {
        let mut overrides = ComponentOverrides::new();
        for (family_name, fields) in &self.overrides {
            let Some(family) = ComponentFamily::from_name(family_name) else {
                tracing::warn!(family = %family_name, "skipping overrides for unknown component family");
                continue;
            };
            for (field, value) in fields {
                if let Err(err) = overrides.set(family, field, value.clone()) {
                    tracing::warn!(%err, "skipping stale component override");
                }
            }
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OverrideError;
    use sprout_core::Color;

    #[test]
    fn test_usable_overrides_drop_stale_entries() {
        let config = ThemeConfig::from_json_str(
            r#"{ "overrides": {
                "carousel": { "speed": { "number": 2.0 } },
                "button": {
                    "icon_gap": { "number": 10.0 },
                    "bogus": { "number": 1.0 },
                    "group_border_color": { "number": 1.0 }
                }
            } }"#,
        )
        .unwrap();

        assert!(config.component_overrides().is_err());

        let overrides = config.usable_overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides.get(ComponentFamily::Button, "icon_gap"),
            Some(&TokenValue::Number(10.0))
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ThemeConfig::from_toml_str(
            r##"
            theme = "dark"

            [seed]
            color_primary = "#722ed1"
            "##,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.locale, Locale::default());
        assert_eq!(config.seed.color_primary, Color::from_hex(0x722ED1));
        assert_eq!(config.seed.font_size, 14.0);
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_override_table_is_validated() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [overrides.button.icon_gap]
            number = 10.0
            "#,
        )
        .unwrap();
        let overrides = config.component_overrides().unwrap();
        assert_eq!(
            overrides.get(ComponentFamily::Button, "icon_gap"),
            Some(&TokenValue::Number(10.0))
        );

        let unknown = ThemeConfig::from_toml_str(
            r#"
            [overrides.carousel.speed]
            number = 1.0
            "#,
        )
        .unwrap();
        assert!(matches!(
            unknown.component_overrides(),
            Err(ConfigError::UnknownFamily(name)) if name == "carousel"
        ));

        let wrong_kind = ThemeConfig::from_toml_str(
            r##"
            [overrides.button.icon_gap]
            color = "#ff0000"
            "##,
        )
        .unwrap();
        assert!(matches!(
            wrong_kind.component_overrides(),
            Err(ConfigError::Override(OverrideError::KindMismatch { .. }))
        ));
    }

    #[test]
    fn test_empty_locale_is_rejected() {
        assert!(ThemeConfig::from_json_str(r#"{ "locale": "  " }"#).is_err());
        assert!(ThemeConfig::from_toml_str("theme = \"sepia\"").is_err());
    }
}
