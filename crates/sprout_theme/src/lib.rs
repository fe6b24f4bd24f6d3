//! Sprout Theme
//!
//! A design-token engine. A handful of seed values (brand colors, base font
//! size, corner radius, control height, size unit) are expanded into a full
//! global token set, and the global token into per-component defaults.
//!
//! # Overview
//!
//! - **Palette**: 10-step color ramps for light and dark presentation, step 6
//!   being the input color
//! - **Tokens**: [`SeedToken`] in, [`Token`] out, pure and deterministic
//! - **Components**: one token struct per component family, every field
//!   readable and overridable by name
//! - **Store**: [`ConfigStore`] ties seed, theme mode, locale and overrides
//!   together and publishes immutable snapshots to subscribers
//!
//! # Quick Start
//!
//! ```
//! use sprout_theme::{ComponentFamily, ConfigStore, SwitchToken, ThemeMode};
//! use sprout_core::Color;
//!
//! let mut store = ConfigStore::new();
//! store.apply_theme(ThemeMode::Dark);
//! store.set_primary_color(Color::from_hex(0x722ED1));
//!
//! // Overrides survive regeneration
//! store
//!     .set_component_field(ComponentFamily::Switch, "track_height", 26.0)
//!     .unwrap();
//! store.set_font_size(16.0);
//!
//! let switch: SwitchToken = store.current_component();
//! assert_eq!(switch.track_height, 26.0);
//! assert_eq!(store.current_token().font_size, 16.0);
//! ```
//!
//! # Architecture
//!
//! Data flows one way: seed → global token → component tokens. Only the
//! store runs both stages together; everything below it is a pure function
//! that never fails. Invalid seed input is normalized and logged through
//! `tracing`.

pub mod components;
pub mod config;
pub mod error;
pub mod locale;
pub mod palette;
pub mod presets;
pub mod scheme;
pub mod store;
pub mod tokens;

// Re-export commonly used types
pub use components::*;
pub use config::ThemeConfig;
pub use error::{ConfigError, OverrideError};
pub use locale::Locale;
pub use palette::{ColorRamp, PaletteTheme};
pub use presets::PresetColor;
pub use scheme::ThemeMode;
pub use store::{ConfigStore, Invalidation, ThemeChange, ThemeEvent, ThemeSnapshot};
pub use tokens::*;

pub use sprout_core::{Color, SubscriptionId};
