//! Color tokens for theming

use serde::{Deserialize, Serialize};
use sprout_core::Color;

use crate::palette::ColorRamp;

/// Status and brand colors that each get a full [`SemanticColors`] set
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticColor {
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl SemanticColor {
    pub fn all() -> &'static [SemanticColor] {
        const ALL: [SemanticColor; 5] = [
            SemanticColor::Primary,
            SemanticColor::Success,
            SemanticColor::Warning,
            SemanticColor::Error,
            SemanticColor::Info,
        ];
        &ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Interaction slot within a [`SemanticColors`] set
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticSlot {
    Base,
    Hover,
    Active,
    Bg,
    BgHover,
    Border,
    BorderHover,
    Text,
    TextHover,
    TextActive,
}

impl SemanticSlot {
    pub fn all() -> &'static [SemanticSlot] {
        const ALL: [SemanticSlot; 10] = [
            SemanticSlot::Base,
            SemanticSlot::Hover,
            SemanticSlot::Active,
            SemanticSlot::Bg,
            SemanticSlot::BgHover,
            SemanticSlot::Border,
            SemanticSlot::BorderHover,
            SemanticSlot::Text,
            SemanticSlot::TextHover,
            SemanticSlot::TextActive,
        ];
        &ALL
    }

    /// Ramp step each slot reads
    pub fn ramp_step(self) -> usize {
        match self {
            Self::Base => 6,
            Self::Hover => 5,
            Self::Active => 7,
            Self::Bg => 1,
            Self::BgHover => 2,
            Self::Border => 3,
            Self::BorderHover => 4,
            Self::Text => 6,
            Self::TextHover => 5,
            Self::TextActive => 7,
        }
    }

    /// Suffix used in variable names (`""` for the base color)
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Hover => "-hover",
            Self::Active => "-active",
            Self::Bg => "-bg",
            Self::BgHover => "-bg-hover",
            Self::Border => "-border",
            Self::BorderHover => "-border-hover",
            Self::Text => "-text",
            Self::TextHover => "-text-hover",
            Self::TextActive => "-text-active",
        }
    }
}

/// The derived color set every semantic color receives
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    pub base: Color,
    pub hover: Color,
    pub active: Color,
    pub bg: Color,
    pub bg_hover: Color,
    pub border: Color,
    pub border_hover: Color,
    pub text: Color,
    pub text_hover: Color,
    pub text_active: Color,
}

impl SemanticColors {
    /// Read every slot from its fixed ramp step
    pub fn from_ramp(ramp: &ColorRamp) -> Self {
        let at = |slot: SemanticSlot| ramp.step(slot.ramp_step());
        Self {
            base: at(SemanticSlot::Base),
            hover: at(SemanticSlot::Hover),
            active: at(SemanticSlot::Active),
            bg: at(SemanticSlot::Bg),
            bg_hover: at(SemanticSlot::BgHover),
            border: at(SemanticSlot::Border),
            border_hover: at(SemanticSlot::BorderHover),
            text: at(SemanticSlot::Text),
            text_hover: at(SemanticSlot::TextHover),
            text_active: at(SemanticSlot::TextActive),
        }
    }

    pub fn get(&self, slot: SemanticSlot) -> Color {
        match slot {
            SemanticSlot::Base => self.base,
            SemanticSlot::Hover => self.hover,
            SemanticSlot::Active => self.active,
            SemanticSlot::Bg => self.bg,
            SemanticSlot::BgHover => self.bg_hover,
            SemanticSlot::Border => self.border,
            SemanticSlot::BorderHover => self.border_hover,
            SemanticSlot::Text => self.text,
            SemanticSlot::TextHover => self.text_hover,
            SemanticSlot::TextActive => self.text_active,
        }
    }
}

/// Color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand and status colors
    Semantic(SemanticColor, SemanticSlot),

    // Links
    Link,
    LinkHover,
    LinkActive,

    // Text colors
    Text,
    TextSecondary,
    TextTertiary,
    TextQuaternary,
    TextPlaceholder,
    TextDisabled,
    TextLightSolid,

    // Background colors
    BgContainer,
    BgElevated,
    BgLayout,
    BgSpotlight,
    BgMask,
    BgHover,
    BgDisabled,

    // Fill colors
    Fill,
    FillSecondary,
    FillTertiary,
    FillQuaternary,

    // Border colors
    Border,
    BorderSecondary,
    BorderHover,
}

const NEUTRAL_TOKENS: [ColorToken; 24] = [
    ColorToken::Link,
    ColorToken::LinkHover,
    ColorToken::LinkActive,
    ColorToken::Text,
    ColorToken::TextSecondary,
    ColorToken::TextTertiary,
    ColorToken::TextQuaternary,
    ColorToken::TextPlaceholder,
    ColorToken::TextDisabled,
    ColorToken::TextLightSolid,
    ColorToken::BgContainer,
    ColorToken::BgElevated,
    ColorToken::BgLayout,
    ColorToken::BgSpotlight,
    ColorToken::BgMask,
    ColorToken::BgHover,
    ColorToken::BgDisabled,
    ColorToken::Fill,
    ColorToken::FillSecondary,
    ColorToken::FillTertiary,
    ColorToken::FillQuaternary,
    ColorToken::Border,
    ColorToken::BorderSecondary,
    ColorToken::BorderHover,
];

impl ColorToken {
    /// Every color token, semantic sets first
    pub fn all() -> Vec<ColorToken> {
        let mut tokens = Vec::with_capacity(SemanticColor::all().len() * 10 + NEUTRAL_TOKENS.len());
        for &color in SemanticColor::all() {
            for &slot in SemanticSlot::all() {
                tokens.push(ColorToken::Semantic(color, slot));
            }
        }
        tokens.extend_from_slice(&NEUTRAL_TOKENS);
        tokens
    }

    /// Kebab-case variable name, e.g. `primary-bg-hover` or `text-secondary`
    pub fn name(self) -> String {
        let fixed = match self {
            Self::Semantic(color, slot) => {
                return format!("{}{}", color.name(), slot.suffix());
            }
            Self::Link => "link",
            Self::LinkHover => "link-hover",
            Self::LinkActive => "link-active",
            Self::Text => "text",
            Self::TextSecondary => "text-secondary",
            Self::TextTertiary => "text-tertiary",
            Self::TextQuaternary => "text-quaternary",
            Self::TextPlaceholder => "text-placeholder",
            Self::TextDisabled => "text-disabled",
            Self::TextLightSolid => "text-light-solid",
            Self::BgContainer => "bg-container",
            Self::BgElevated => "bg-elevated",
            Self::BgLayout => "bg-layout",
            Self::BgSpotlight => "bg-spotlight",
            Self::BgMask => "bg-mask",
            Self::BgHover => "bg-hover",
            Self::BgDisabled => "bg-disabled",
            Self::Fill => "fill",
            Self::FillSecondary => "fill-secondary",
            Self::FillTertiary => "fill-tertiary",
            Self::FillQuaternary => "fill-quaternary",
            Self::Border => "border",
            Self::BorderSecondary => "border-secondary",
            Self::BorderHover => "border-hover",
        };
        fixed.to_string()
    }

    pub fn from_name(name: &str) -> Option<ColorToken> {
        let name = name.trim().trim_start_matches("--");
        Self::all().into_iter().find(|token| token.name() == name)
    }
}
