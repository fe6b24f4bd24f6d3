//! Built-in brand colors.
//!
//! Each preset is a step-6 seed; call [`PresetColor::palette`] for the full
//! ramp in either theme.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use sprout_core::Color;

use crate::palette::{self, ColorRamp, PaletteTheme};

/// Preset brand color catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetColor {
    Blue,
    Purple,
    Cyan,
    Green,
    Magenta,
    /// Same seed as [`PresetColor::Magenta`].
    Pink,
    Red,
    Orange,
    Yellow,
    Volcano,
    Geekblue,
    Gold,
    Lime,
}

impl PresetColor {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Volcano => "volcano",
            Self::Geekblue => "geekblue",
            Self::Gold => "gold",
            Self::Lime => "lime",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Daybreak Blue",
            Self::Purple => "Golden Purple",
            Self::Cyan => "Cyan",
            Self::Green => "Polar Green",
            Self::Magenta => "Magenta",
            Self::Pink => "Pink",
            Self::Red => "Dust Red",
            Self::Orange => "Sunset Orange",
            Self::Yellow => "Sunrise Yellow",
            Self::Volcano => "Volcano",
            Self::Geekblue => "Geek Blue",
            Self::Gold => "Calendula Gold",
            Self::Lime => "Lime",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [PresetColor] {
        const PRESETS: [PresetColor; 13] = [
            PresetColor::Blue,
            PresetColor::Purple,
            PresetColor::Cyan,
            PresetColor::Green,
            PresetColor::Magenta,
            PresetColor::Pink,
            PresetColor::Red,
            PresetColor::Orange,
            PresetColor::Yellow,
            PresetColor::Volcano,
            PresetColor::Geekblue,
            PresetColor::Gold,
            PresetColor::Lime,
        ];
        &PRESETS
    }

    /// Look a preset up by [`id`](Self::id), case-insensitively.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    /// The step-6 seed color.
    pub fn color(self) -> Color {
        Color::from_hex(match self {
            Self::Blue => 0x1677FF,
            Self::Purple => 0x722ED1,
            Self::Cyan => 0x13C2C2,
            Self::Green => 0x52C41A,
            Self::Magenta | Self::Pink => 0xEB2F96,
            Self::Red => 0xF5222D,
            Self::Orange => 0xFA8C16,
            Self::Yellow => 0xFADB14,
            Self::Volcano => 0xFA541C,
            Self::Geekblue => 0x2F54EB,
            Self::Gold => 0xFAAD14,
            Self::Lime => 0xA0D911,
        })
    }

    /// Ten-step ramp for this preset.
    pub fn palette(self, theme: PaletteTheme) -> ColorRamp {
        palette::generate(self.color(), theme)
    }

    /// Shorthand for `palette(theme).step(step)`.
    pub fn step(self, step: usize, theme: PaletteTheme) -> Color {
        self.palette(theme).step(step)
    }
}

impl Display for PresetColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
