//! Theme configuration store
//!
//! [`ConfigStore`] owns the seed, the theme mode and the recorded component
//! overrides, and publishes the derived tokens as immutable
//! [`ThemeSnapshot`]s.
//!
//! - Seed and theme changes re-run global derivation and every component
//!   resolver, then lay the recorded overrides back on top.
//! - Component overrides patch the current snapshot without derivation.
//!
//! Every transition publishes a new snapshot and notifies subscribers
//! exactly once. Snapshots already handed out are never mutated.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use sprout_theme::{ConfigStore, ThemeMode};
//!
//! let mut store = ConfigStore::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//! store.subscribe(move |event| {
//!     assert!(event.invalidation.repaint);
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! store.apply_theme(ThemeMode::Dark);
//! assert!(store.is_dark());
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::sync::Arc;

use sprout_core::{Color, SubscriptionId, Subscribers};

use crate::components::{
    ComponentFamily, ComponentOverrides, ComponentToken, ComponentTokens, TokenValue, ValueKind,
};
use crate::config::ThemeConfig;
use crate::error::OverrideError;
use crate::locale::Locale;
use crate::scheme::ThemeMode;
use crate::tokens::{SeedField, SeedToken, SeedValue, Token};

// ========== Snapshot ==========

/// Everything a consumer reads, frozen at one revision
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSnapshot {
    /// Increases by one per transition, starting at 0
    pub revision: u64,
    pub seed: SeedToken,
    pub token: Arc<Token>,
    pub components: Arc<ComponentToken>,
    pub theme: ThemeMode,
    /// Last appearance reported by the host
    pub system_is_dark: bool,
    /// Effective appearance for `theme`
    pub is_dark: bool,
    pub locale: Locale,
}

// ========== Events ==========

/// What a transition changed
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeChange {
    /// Seed fields were written. Lists the fields whose value changed.
    Seed { fields: Vec<SeedField> },
    /// Explicit regeneration with an unchanged seed
    Regenerated,
    Theme { mode: ThemeMode, is_dark: bool },
    SystemAppearance { is_dark: bool },
    ComponentOverride { family: ComponentFamily, field: String },
    OverridesCleared { family: ComponentFamily, count: usize },
    Locale(Locale),
    /// A caller-supplied global token replaced the derived one
    TokenReplaced,
    Reset,
}

/// How much consumer work a transition requires
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// Colors or shadows changed
    pub repaint: bool,
    /// Sizes, spacing or text changed
    pub layout: bool,
}

impl Invalidation {
    pub const NONE: Invalidation = Invalidation {
        repaint: false,
        layout: false,
    };
    pub const REPAINT: Invalidation = Invalidation {
        repaint: true,
        layout: false,
    };
    pub const FULL: Invalidation = Invalidation {
        repaint: true,
        layout: true,
    };

    pub fn is_none(&self) -> bool {
        !self.repaint && !self.layout
    }
}

/// Delivered to subscribers once per transition
#[derive(Clone, Debug)]
pub struct ThemeEvent {
    pub change: ThemeChange,
    pub invalidation: Invalidation,
    pub snapshot: Arc<ThemeSnapshot>,
}

// ========== Store ==========

/// Owns theme state and publishes snapshots.
///
/// Single writer: every mutation takes `&mut self`. Share snapshots, not the
/// store, with readers on other threads.
#[derive(Debug)]
pub struct ConfigStore {
    snapshot: Arc<ThemeSnapshot>,
    overrides: ComponentOverrides,
    subscribers: Subscribers<ThemeEvent>,
}

/// Run both derivation stages and apply overrides
fn resolve_tokens(
    seed: &SeedToken,
    is_dark: bool,
    overrides: &ComponentOverrides,
) -> (Arc<Token>, Arc<ComponentToken>) {
    let token = Token::derive(seed, is_dark);
    let mut components = ComponentToken::resolve(&token, is_dark);
    overrides.apply(&mut components);
    (Arc::new(token), Arc::new(components))
}

impl ConfigStore {
    /// Default seed, system mode (reported light until told otherwise),
    /// default locale
    pub fn new() -> Self {
        Self::with_seed(SeedToken::default(), ThemeMode::System)
    }

    /// Start from `seed` in `theme`. The seed is normalized first.
    pub fn with_seed(seed: SeedToken, theme: ThemeMode) -> Self {
        Self::build(seed, theme, Locale::default(), ComponentOverrides::new())
    }

    /// Start from a config document. Overrides naming an unknown family or
    /// field are logged and skipped; see
    /// [`ThemeConfig::component_overrides`] for strict validation.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::build(
            config.seed.clone(),
            config.theme,
            config.locale.clone(),
            config.usable_overrides(),
        )
    }

    fn build(
        seed: SeedToken,
        theme: ThemeMode,
        locale: Locale,
        overrides: ComponentOverrides,
    ) -> Self {
        let seed = seed.normalized();
        let system_is_dark = false;
        let is_dark = theme.resolve_is_dark(system_is_dark);
        let (token, components) = resolve_tokens(&seed, is_dark, &overrides);

        tracing::debug!(%theme, is_dark, %locale, overrides = overrides.len(), "created config store");

        Self {
            snapshot: Arc::new(ThemeSnapshot {
                revision: 0,
                seed,
                token,
                components,
                theme,
                system_is_dark,
                is_dark,
                locale,
            }),
            overrides,
            subscribers: Subscribers::new(),
        }
    }

    /// Current state as a config document
    pub fn to_config(&self) -> ThemeConfig {
        ThemeConfig::from_parts(
            self.snapshot.theme,
            self.snapshot.locale.clone(),
            self.snapshot.seed.clone(),
            &self.overrides,
        )
    }

    // ========== Reads ==========

    pub fn snapshot(&self) -> Arc<ThemeSnapshot> {
        self.snapshot.clone()
    }

    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    pub fn current_token(&self) -> Arc<Token> {
        self.snapshot.token.clone()
    }

    pub fn components(&self) -> Arc<ComponentToken> {
        self.snapshot.components.clone()
    }

    /// Current values for one family, overrides included
    pub fn current_component<T: ComponentTokens>(&self) -> T {
        self.snapshot.components.get::<T>().clone()
    }

    pub fn component_field(&self, family: ComponentFamily, name: &str) -> Option<TokenValue> {
        self.snapshot.components.field(family, name)
    }

    pub fn seed(&self) -> &SeedToken {
        &self.snapshot.seed
    }

    pub fn theme(&self) -> ThemeMode {
        self.snapshot.theme
    }

    pub fn is_dark(&self) -> bool {
        self.snapshot.is_dark
    }

    pub fn system_is_dark(&self) -> bool {
        self.snapshot.system_is_dark
    }

    pub fn locale(&self) -> &Locale {
        &self.snapshot.locale
    }

    pub fn overrides(&self) -> &ComponentOverrides {
        &self.overrides
    }

    // ========== Subscriptions ==========

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeEvent) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Returns `false` if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // ========== Seed ==========

    /// Write one seed field and regenerate.
    ///
    /// A value of the wrong kind for the field is ignored: nothing is
    /// published and `false` is returned.
    pub fn mutate_seed(&mut self, field: SeedField, value: impl Into<SeedValue>) -> bool {
        let mut seed = self.snapshot.seed.clone();
        if !seed.set(field, value) {
            return false;
        }
        self.publish_seed(seed);
        true
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.mutate_seed(SeedField::ColorPrimary, color);
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.mutate_seed(SeedField::FontSize, size);
    }

    pub fn set_border_radius(&mut self, radius: f32) {
        self.mutate_seed(SeedField::BorderRadius, radius);
    }

    pub fn set_control_height(&mut self, height: f32) {
        self.mutate_seed(SeedField::ControlHeight, height);
    }

    /// Edit the seed in place, then regenerate and notify once
    pub fn configure_seed<F>(&mut self, update: F)
    where
        F: FnOnce(&mut SeedToken),
    {
        let mut seed = self.snapshot.seed.clone();
        update(&mut seed);
        self.publish_seed(seed.normalized());
    }

    fn publish_seed(&mut self, seed: SeedToken) {
        let previous = &self.snapshot.seed;
        let fields: Vec<SeedField> = SeedField::all()
            .iter()
            .copied()
            .filter(|&field| previous.get(field) != seed.get(field))
            .collect();

        let invalidation = if fields.iter().any(|field| field.affects_layout()) {
            Invalidation::FULL
        } else {
            Invalidation::REPAINT
        };

        tracing::debug!(changed = ?fields, "seed updated, regenerating tokens");

        let is_dark = self.snapshot.is_dark;
        let (token, components) = resolve_tokens(&seed, is_dark, &self.overrides);
        self.publish(ThemeChange::Seed { fields }, invalidation, |next| {
            next.seed = seed;
            next.token = token;
            next.components = components;
        });
    }

    // ========== Regeneration and theme ==========

    /// Re-derive the global token and every component family from the
    /// current seed. Recorded overrides win over the fresh defaults.
    pub fn regenerate_tokens(&mut self) {
        tracing::debug!(revision = self.snapshot.revision, "regenerating tokens");
        let (token, components) =
            resolve_tokens(&self.snapshot.seed, self.snapshot.is_dark, &self.overrides);
        self.publish(ThemeChange::Regenerated, Invalidation::FULL, |next| {
            next.token = token;
            next.components = components;
        });
    }

    /// Switch mode and regenerate
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        let was_dark = self.snapshot.is_dark;
        let is_dark = mode.resolve_is_dark(self.snapshot.system_is_dark);

        tracing::debug!(from = %self.snapshot.theme, to = %mode, was_dark, is_dark, "applying theme");

        let (token, components) = resolve_tokens(&self.snapshot.seed, is_dark, &self.overrides);
        let invalidation = if was_dark != is_dark {
            Invalidation::REPAINT
        } else {
            Invalidation::NONE
        };
        self.publish(ThemeChange::Theme { mode, is_dark }, invalidation, |next| {
            next.theme = mode;
            next.is_dark = is_dark;
            next.token = token;
            next.components = components;
        });
    }

    /// Flip to the explicit opposite of what is currently shown
    pub fn toggle_theme(&mut self) {
        let mode = self.snapshot.theme.toggled(self.snapshot.system_is_dark);
        self.apply_theme(mode);
    }

    /// Record the host's appearance. Regenerates only in
    /// [`ThemeMode::System`], but always notifies.
    pub fn set_system_appearance(&mut self, is_dark: bool) {
        let theme = self.snapshot.theme;
        let was_dark = self.snapshot.is_dark;
        let effective = theme.resolve_is_dark(is_dark);

        tracing::debug!(system_is_dark = is_dark, %theme, "system appearance reported");

        let regenerated = (theme == ThemeMode::System)
            .then(|| resolve_tokens(&self.snapshot.seed, effective, &self.overrides));
        let invalidation = if effective != was_dark {
            Invalidation::REPAINT
        } else {
            Invalidation::NONE
        };

        self.publish(ThemeChange::SystemAppearance { is_dark }, invalidation, |next| {
            next.system_is_dark = is_dark;
            next.is_dark = effective;
            if let Some((token, components)) = regenerated {
                next.token = token;
                next.components = components;
            }
        });
    }

    // ========== Component overrides ==========

    /// Record an override and apply it to the current components.
    ///
    /// No derivation runs. The override survives later regenerations until
    /// cleared. Values are not range-checked.
    pub fn set_component_field(
        &mut self,
        family: ComponentFamily,
        name: &str,
        value: impl Into<TokenValue>,
    ) -> Result<(), OverrideError> {
        let value = value.into();
        let kind = value.kind();

        let mut components = (*self.snapshot.components).clone();
        components.set_field(family, name, value.clone())?;
        self.overrides.set(family, name, value)?;

        tracing::debug!(%family, field = name, %kind, "component override set");

        let invalidation = match kind {
            ValueKind::Color | ValueKind::Shadow => Invalidation::REPAINT,
            _ => Invalidation::FULL,
        };
        let change = ThemeChange::ComponentOverride {
            family,
            field: name.to_string(),
        };
        self.publish(change, invalidation, |next| {
            next.components = Arc::new(components);
        });
        Ok(())
    }

    /// Drop one override and restore that family's defaults.
    ///
    /// Returns `false` without notifying when nothing was recorded.
    pub fn clear_component_override(&mut self, family: ComponentFamily, name: &str) -> bool {
        if self.overrides.remove(family, name).is_none() {
            return false;
        }
        self.republish_family(family, 1);
        true
    }

    /// Drop every override for `family` and restore its defaults.
    ///
    /// Returns how many overrides were removed. Nothing is published when
    /// the family had none.
    pub fn clear_component_overrides(&mut self, family: ComponentFamily) -> usize {
        let count = self.overrides.clear_family(family);
        if count > 0 {
            self.republish_family(family, count);
        }
        count
    }

    fn republish_family(&mut self, family: ComponentFamily, count: usize) {
        tracing::debug!(%family, count, "component overrides cleared");

        let mut components = (*self.snapshot.components).clone();
        components.reset_family(family, &self.snapshot.token, self.snapshot.is_dark);
        self.overrides.apply_family(family, &mut components);

        self.publish(
            ThemeChange::OverridesCleared { family, count },
            Invalidation::FULL,
            |next| next.components = Arc::new(components),
        );
    }

    // ========== Other state ==========

    /// Store a normalized locale. An empty tag is ignored and nothing is
    /// published.
    pub fn set_locale(&mut self, locale: &str) -> bool {
        let Some(locale) = Locale::new(locale) else {
            tracing::warn!("ignored empty locale");
            return false;
        };

        tracing::debug!(%locale, "locale changed");
        self.publish(
            ThemeChange::Locale(locale.clone()),
            Invalidation::FULL,
            |next| next.locale = locale,
        );
        true
    }

    /// Publish a caller-built global token as is.
    ///
    /// The seed and the component tokens are left alone, so the two can
    /// disagree until the next regeneration, which discards `token`.
    pub fn replace_token(&mut self, token: Token) {
        tracing::debug!("global token replaced by caller");
        self.publish(ThemeChange::TokenReplaced, Invalidation::FULL, |next| {
            next.token = Arc::new(token);
        });
    }

    /// Back to the default seed, system mode and default locale, with every
    /// override cleared
    pub fn reset(&mut self) {
        self.overrides.clear();

        let seed = SeedToken::default();
        let theme = ThemeMode::System;
        let is_dark = theme.resolve_is_dark(self.snapshot.system_is_dark);
        let (token, components) = resolve_tokens(&seed, is_dark, &self.overrides);

        tracing::debug!("config store reset");
        self.publish(ThemeChange::Reset, Invalidation::FULL, |next| {
            next.seed = seed;
            next.theme = theme;
            next.is_dark = is_dark;
            next.locale = Locale::default();
            next.token = token;
            next.components = components;
        });
    }

    /// Build the next snapshot from the current one, store it and notify
    fn publish<F>(&mut self, change: ThemeChange, invalidation: Invalidation, update: F)
    where
        F: FnOnce(&mut ThemeSnapshot),
    {
        let mut next = (*self.snapshot).clone();
        next.revision += 1;
        update(&mut next);
        self.snapshot = Arc::new(next);

        let event = ThemeEvent {
            change,
            invalidation,
            snapshot: self.snapshot.clone(),
        };
        let delivered = self.subscribers.notify(&event);
        tracing::trace!(revision = self.snapshot.revision, delivered, "theme event published");
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ButtonToken, SwitchToken};
    use std::sync::Mutex;

    fn recording_store() -> (ConfigStore, Arc<Mutex<Vec<ThemeEvent>>>) {
        let mut store = ConfigStore::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        (store, events)
    }

    #[test]
    fn test_new_store_matches_pure_derivation() {
        let store = ConfigStore::new();
        assert_eq!(store.revision(), 0);
        assert_eq!(store.theme(), ThemeMode::System);
        assert!(!store.is_dark());
        assert_eq!(*store.current_token(), Token::derive(&SeedToken::default(), false));
        assert_eq!(*store.components(), ComponentToken::default());
    }

    #[test]
    fn test_layout_fields_invalidate_layout() {
        let (mut store, events) = recording_store();
        store.set_primary_color(Color::from_hex(0x722ED1));
        store.set_font_size(16.0);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].invalidation, Invalidation::REPAINT);
        assert_eq!(
            events[0].change,
            ThemeChange::Seed {
                fields: vec![SeedField::ColorPrimary]
            }
        );
        assert_eq!(events[1].invalidation, Invalidation::FULL);
        assert_eq!(events[1].snapshot.revision, 2);
    }

    #[test]
    fn test_wrong_kind_is_ignored() {
        let (mut store, events) = recording_store();
        assert!(!store.mutate_seed(SeedField::FontSize, Color::WHITE));
        assert!(events.lock().unwrap().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_system_appearance_only_regenerates_in_system_mode() {
        let (mut store, events) = recording_store();
        store.set_system_appearance(true);
        assert!(store.is_dark());
        assert!(store.current_token().is_dark);

        store.apply_theme(ThemeMode::Light);
        let light = store.current_token();
        store.set_system_appearance(false);
        store.set_system_appearance(true);
        assert!(!store.is_dark());
        assert!(Arc::ptr_eq(&light, &store.current_token()));
        assert!(store.system_is_dark());

        assert_eq!(events.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_toggle_from_system() {
        let mut store = ConfigStore::new();
        store.set_system_appearance(true);
        store.toggle_theme();
        assert_eq!(store.theme(), ThemeMode::Light);
        store.toggle_theme();
        assert_eq!(store.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_override_is_published_without_regeneration() {
        let mut store = ConfigStore::new();
        let token = store.current_token();
        store
            .set_component_field(ComponentFamily::Button, "icon_gap", 10.0)
            .unwrap();

        assert!(Arc::ptr_eq(&token, &store.current_token()));
        assert_eq!(store.current_component::<ButtonToken>().icon_gap, 10.0);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_rejected_override_publishes_nothing() {
        let (mut store, events) = recording_store();
        let err = store
            .set_component_field(ComponentFamily::Switch, "glow", 1.0)
            .unwrap_err();
        assert!(matches!(err, OverrideError::UnknownField { .. }));
        assert!(store
            .set_component_field(ComponentFamily::Switch, "track_height", Color::BLACK)
            .is_err());
        assert!(store.overrides().is_empty());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clear_override_restores_default() {
        let mut store = ConfigStore::new();
        store
            .set_component_field(ComponentFamily::Switch, "track_height", 40.0)
            .unwrap();
        store
            .set_component_field(ComponentFamily::Switch, "handle_size", 30.0)
            .unwrap();

        assert!(store.clear_component_override(ComponentFamily::Switch, "track_height"));
        let switch = store.current_component::<SwitchToken>();
        assert_eq!(switch.track_height, 22.0);
        assert_eq!(switch.handle_size, 30.0);

        assert!(!store.clear_component_override(ComponentFamily::Switch, "track_height"));
        assert_eq!(store.clear_component_overrides(ComponentFamily::Switch), 1);
        assert_eq!(store.current_component::<SwitchToken>(), SwitchToken::default());
        assert_eq!(store.clear_component_overrides(ComponentFamily::Switch), 0);
    }

    #[test]
    fn test_locale() {
        let (mut store, events) = recording_store();
        assert!(store.set_locale("en_US"));
        assert_eq!(store.locale().as_str(), "en-US");
        assert!(!store.set_locale(""));
        assert_eq!(store.locale().as_str(), "en-US");
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_replace_token_is_discarded_by_regeneration() {
        let mut store = ConfigStore::new();
        let derived = store.current_token();

        let mut custom = (*derived).clone();
        custom.color_text = Color::from_hex(0xFF0000);
        store.replace_token(custom.clone());
        assert_eq!(*store.current_token(), custom);
        assert_eq!(store.seed(), &SeedToken::default());

        store.regenerate_tokens();
        assert_eq!(store.current_token(), derived);
    }

    #[test]
    fn test_published_snapshots_are_immutable() {
        let mut store = ConfigStore::new();
        let before = store.snapshot();
        store.set_border_radius(2.0);
        assert_eq!(before.seed.border_radius, 6.0);
        assert_eq!(before.revision, 0);
        assert_eq!(store.snapshot().seed.border_radius, 2.0);
    }
}
