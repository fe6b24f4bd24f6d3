//! Elevation shadow tokens

use serde::{Deserialize, Serialize};
use sprout_core::Color;

/// Elevation levels for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowToken {
    /// Resting surfaces (cards)
    Low,
    /// Dropdowns and popovers
    Mid,
    /// Modals and floating panels
    High,
    None,
}

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Drop shadow straight down with a black tint of `opacity`
    pub const fn drop(offset_y: f32, blur: f32, opacity: f32) -> Self {
        Self::new(0.0, offset_y, blur, 0.0, Color::rgba(0.0, 0.0, 0.0, opacity))
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// The three elevation levels. Constant across seeds and themes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub low: Shadow,
    pub mid: Shadow,
    pub high: Shadow,
}

impl ShadowTokens {
    pub const DEFAULT: ShadowTokens = ShadowTokens {
        low: Shadow::drop(1.0, 2.0, 0.08),
        mid: Shadow::drop(3.0, 8.0, 0.12),
        high: Shadow::drop(6.0, 16.0, 0.16),
    };

    pub fn get(&self, token: ShadowToken) -> Shadow {
        match token {
            ShadowToken::Low => self.low,
            ShadowToken::Mid => self.mid,
            ShadowToken::High => self.high,
            ShadowToken::None => Shadow::none(),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}
