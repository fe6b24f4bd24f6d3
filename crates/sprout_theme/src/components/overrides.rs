//! Recorded component overrides
//!
//! Overrides are kept apart from the resolved structs so regeneration can
//! rebuild every family from fresh defaults and then lay the recorded values
//! back on top.

use rustc_hash::FxHashMap;

use super::{ComponentFamily, ComponentToken, TokenValue};
use crate::error::OverrideError;

/// Explicit field values per family. Explicit values win over defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentOverrides {
    entries: FxHashMap<ComponentFamily, FxHashMap<String, TokenValue>>,
}

impl ComponentOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an override after checking it against the family's fields
    pub fn set(
        &mut self,
        family: ComponentFamily,
        field: &str,
        value: TokenValue,
    ) -> Result<(), OverrideError> {
        family.check_field(field, &value)?;
        self.entries
            .entry(family)
            .or_default()
            .insert(field.to_string(), value);
        Ok(())
    }

    pub fn get(&self, family: ComponentFamily, field: &str) -> Option<&TokenValue> {
        self.entries.get(&family).and_then(|fields| fields.get(field))
    }

    /// Drop one override. Returns the removed value.
    pub fn remove(&mut self, family: ComponentFamily, field: &str) -> Option<TokenValue> {
        let fields = self.entries.get_mut(&family)?;
        let removed = fields.remove(field);
        if fields.is_empty() {
            self.entries.remove(&family);
        }
        removed
    }

    /// Drop every override for a family. Returns how many were removed.
    pub fn clear_family(&mut self, family: ComponentFamily) -> usize {
        self.entries
            .remove(&family)
            .map(|fields| fields.len())
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn has_family(&self, family: ComponentFamily) -> bool {
        self.entries.contains_key(&family)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of overridden fields
    pub fn len(&self) -> usize {
        self.entries.values().map(|fields| fields.len()).sum()
    }

    /// Every override as `(family, field, value)`
    pub fn iter(&self) -> impl Iterator<Item = (ComponentFamily, &str, &TokenValue)> {
        self.entries.iter().flat_map(|(family, fields)| {
            fields
                .iter()
                .map(move |(name, value)| (*family, name.as_str(), value))
        })
    }

    /// Overrides recorded for one family
    pub fn family(&self, family: ComponentFamily) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries
            .get(&family)
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(name, value)| (name.as_str(), value)))
    }

    /// Lay every recorded override over `components`
    pub fn apply(&self, components: &mut ComponentToken) {
        for (family, field, value) in self.iter() {
            if let Err(err) = components.set_field(family, field, value.clone()) {
                tracing::warn!(%err, "skipping stale component override");
            }
        }
    }

    /// Lay one family's overrides over `components`
    pub fn apply_family(&self, family: ComponentFamily, components: &mut ComponentToken) {
        for (field, value) in self.family(family) {
            if let Err(err) = components.set_field(family, field, value.clone()) {
                tracing::warn!(%err, "skipping stale component override");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::Color;

    #[test]
    fn test_set_rejects_invalid_override() {
        let mut overrides = ComponentOverrides::new();
        assert!(overrides
            .set(ComponentFamily::Tag, "bogus", TokenValue::Number(1.0))
            .is_err());
        assert!(overrides
            .set(ComponentFamily::Tag, "default_bg", TokenValue::Number(1.0))
            .is_err());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_apply_and_remove() {
        let mut overrides = ComponentOverrides::new();
        overrides
            .set(ComponentFamily::Tag, "default_bg", Color::from_hex(0xFF0000).into())
            .unwrap();
        overrides
            .set(ComponentFamily::Badge, "dot_size", TokenValue::Number(12.0))
            .unwrap();
        assert_eq!(overrides.len(), 2);

        let mut components = ComponentToken::default();
        overrides.apply(&mut components);
        assert_eq!(components.tag.default_bg, Color::from_hex(0xFF0000));
        assert_eq!(components.badge.dot_size, 12.0);

        assert_eq!(
            overrides.remove(ComponentFamily::Badge, "dot_size"),
            Some(TokenValue::Number(12.0))
        );
        assert!(!overrides.has_family(ComponentFamily::Badge));
        assert_eq!(overrides.clear_family(ComponentFamily::Tag), 1);
        assert!(overrides.is_empty());
    }
}
