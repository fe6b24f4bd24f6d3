//! Seed tokens
//!
//! The small set of human-authored inputs everything else is derived from.

use std::fmt;

use serde::{Deserialize, Serialize};
use sprout_core::Color;

/// Border line style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
}

impl LineType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            _ => None,
        }
    }
}

/// Easing curve hint for consumers that animate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionEase {
    #[default]
    EaseInOut,
    EaseOut,
    EaseIn,
    Linear,
}

impl MotionEase {
    pub fn name(self) -> &'static str {
        match self {
            Self::EaseInOut => "ease_in_out",
            Self::EaseOut => "ease_out",
            Self::EaseIn => "ease_in",
            Self::Linear => "linear",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ease_in_out" | "easeinout" => Some(Self::EaseInOut),
            "ease_out" | "easeout" => Some(Self::EaseOut),
            "ease_in" | "easein" => Some(Self::EaseIn),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }
}

pub const DEFAULT_FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial";
pub const DEFAULT_FONT_FAMILY_CODE: &str =
    "'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, Courier, monospace";

/// Largest accepted z-index seed
pub const Z_INDEX_MAX: i32 = i32::MAX - 1000;

/// Human-authored inputs to token derivation.
///
/// Writing fields directly is allowed, but a store only regenerates when
/// the change goes through one of its mutation methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedToken {
    // Brand and status colors
    pub color_primary: Color,
    pub color_success: Color,
    pub color_warning: Color,
    pub color_error: Color,
    pub color_info: Color,
    pub color_link: Color,

    // Neutral bases
    pub color_text_base: Color,
    pub color_bg_base: Color,

    // Typography
    pub font_size: f32,
    pub font_family: String,
    pub font_family_code: String,

    // Lines and shapes
    pub line_width: f32,
    pub line_type: LineType,
    pub border_radius: f32,

    // Sizing
    pub size_unit: f32,
    pub size_popup_arrow: f32,
    pub control_height: f32,

    // Layering
    pub z_index_base: i32,
    pub z_index_popup_base: i32,

    // Motion
    pub motion: bool,
    pub motion_ease: MotionEase,

    pub opacity_image: f32,
    pub wireframe: bool,
}

impl Default for SeedToken {
    fn default() -> Self {
        Self {
            color_primary: Color::from_hex(0x1677FF),
            color_success: Color::from_hex(0x52C41A),
            color_warning: Color::from_hex(0xFAAD14),
            color_error: Color::from_hex(0xF5222D),
            color_info: Color::from_hex(0x8C8C99),
            color_link: Color::from_hex(0x1677FF),
            color_text_base: Color::BLACK,
            color_bg_base: Color::WHITE,
            font_size: 14.0,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_family_code: DEFAULT_FONT_FAMILY_CODE.to_string(),
            line_width: 1.0,
            line_type: LineType::Solid,
            border_radius: 6.0,
            size_unit: 4.0,
            size_popup_arrow: 16.0,
            control_height: 32.0,
            z_index_base: 0,
            z_index_popup_base: 1000,
            motion: true,
            motion_ease: MotionEase::EaseInOut,
            opacity_image: 1.0,
            wireframe: false,
        }
    }
}

// ========== Field access ==========

/// Every settable seed field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedField {
    ColorPrimary,
    ColorSuccess,
    ColorWarning,
    ColorError,
    ColorInfo,
    ColorLink,
    ColorTextBase,
    ColorBgBase,
    FontSize,
    FontFamily,
    FontFamilyCode,
    LineWidth,
    LineType,
    BorderRadius,
    SizeUnit,
    SizePopupArrow,
    ControlHeight,
    ZIndexBase,
    ZIndexPopupBase,
    Motion,
    MotionEase,
    OpacityImage,
    Wireframe,
}

/// Kind of value a [`SeedField`] holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedKind {
    Color,
    Number,
    Integer,
    Flag,
    Text,
}

impl SeedField {
    pub fn all() -> &'static [SeedField] {
        const FIELDS: [SeedField; 23] = [
            SeedField::ColorPrimary,
            SeedField::ColorSuccess,
            SeedField::ColorWarning,
            SeedField::ColorError,
            SeedField::ColorInfo,
            SeedField::ColorLink,
            SeedField::ColorTextBase,
            SeedField::ColorBgBase,
            SeedField::FontSize,
            SeedField::FontFamily,
            SeedField::FontFamilyCode,
            SeedField::LineWidth,
            SeedField::LineType,
            SeedField::BorderRadius,
            SeedField::SizeUnit,
            SeedField::SizePopupArrow,
            SeedField::ControlHeight,
            SeedField::ZIndexBase,
            SeedField::ZIndexPopupBase,
            SeedField::Motion,
            SeedField::MotionEase,
            SeedField::OpacityImage,
            SeedField::Wireframe,
        ];
        &FIELDS
    }

    /// Field name as it appears in serialized seeds
    pub fn name(self) -> &'static str {
        match self {
            Self::ColorPrimary => "color_primary",
            Self::ColorSuccess => "color_success",
            Self::ColorWarning => "color_warning",
            Self::ColorError => "color_error",
            Self::ColorInfo => "color_info",
            Self::ColorLink => "color_link",
            Self::ColorTextBase => "color_text_base",
            Self::ColorBgBase => "color_bg_base",
            Self::FontSize => "font_size",
            Self::FontFamily => "font_family",
            Self::FontFamilyCode => "font_family_code",
            Self::LineWidth => "line_width",
            Self::LineType => "line_type",
            Self::BorderRadius => "border_radius",
            Self::SizeUnit => "size_unit",
            Self::SizePopupArrow => "size_popup_arrow",
            Self::ControlHeight => "control_height",
            Self::ZIndexBase => "z_index_base",
            Self::ZIndexPopupBase => "z_index_popup_base",
            Self::Motion => "motion",
            Self::MotionEase => "motion_ease",
            Self::OpacityImage => "opacity_image",
            Self::Wireframe => "wireframe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().copied().find(|f| f.name() == name)
    }

    pub fn kind(self) -> SeedKind {
        match self {
            Self::ColorPrimary
            | Self::ColorSuccess
            | Self::ColorWarning
            | Self::ColorError
            | Self::ColorInfo
            | Self::ColorLink
            | Self::ColorTextBase
            | Self::ColorBgBase => SeedKind::Color,
            Self::FontSize
            | Self::LineWidth
            | Self::BorderRadius
            | Self::SizeUnit
            | Self::SizePopupArrow
            | Self::ControlHeight
            | Self::OpacityImage => SeedKind::Number,
            Self::ZIndexBase | Self::ZIndexPopupBase => SeedKind::Integer,
            Self::Motion | Self::Wireframe => SeedKind::Flag,
            Self::FontFamily | Self::FontFamilyCode | Self::LineType | Self::MotionEase => {
                SeedKind::Text
            }
        }
    }

    /// True for fields that change sizes rather than only colors
    pub fn affects_layout(self) -> bool {
        matches!(
            self,
            Self::FontSize
                | Self::FontFamily
                | Self::FontFamilyCode
                | Self::LineWidth
                | Self::BorderRadius
                | Self::SizeUnit
                | Self::SizePopupArrow
                | Self::ControlHeight
        )
    }

    /// Smallest accepted value for numeric fields
    fn minimum(self) -> f32 {
        match self {
            Self::FontSize | Self::ControlHeight | Self::SizeUnit => 1.0,
            Self::LineWidth => 0.5,
            _ => 0.0,
        }
    }

    fn default_number(self) -> f32 {
        let defaults = SeedToken::default();
        match self {
            Self::FontSize => defaults.font_size,
            Self::LineWidth => defaults.line_width,
            Self::BorderRadius => defaults.border_radius,
            Self::SizeUnit => defaults.size_unit,
            Self::SizePopupArrow => defaults.size_popup_arrow,
            Self::ControlHeight => defaults.control_height,
            Self::OpacityImage => defaults.opacity_image,
            _ => 0.0,
        }
    }

    /// Map an arbitrary number onto the field's valid range
    pub fn normalize_number(self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.default_number();
        }
        match self {
            Self::OpacityImage => value.clamp(0.0, 1.0),
            _ => value.max(self.minimum()),
        }
    }

    /// Map an integer write onto the field's valid range. Layers leave
    /// headroom above the popup base for component offsets.
    pub fn normalize_integer(self, value: i32) -> i32 {
        value.clamp(0, Z_INDEX_MAX)
    }
}

impl fmt::Display for SeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value written to a [`SeedField`]
#[derive(Clone, Debug, PartialEq)]
pub enum SeedValue {
    Color(Color),
    Number(f32),
    Integer(i32),
    Flag(bool),
    Text(String),
}

impl SeedValue {
    pub fn kind(&self) -> SeedKind {
        match self {
            Self::Color(_) => SeedKind::Color,
            Self::Number(_) => SeedKind::Number,
            Self::Integer(_) => SeedKind::Integer,
            Self::Flag(_) => SeedKind::Flag,
            Self::Text(_) => SeedKind::Text,
        }
    }

    fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Integer(v) => Some(*v as f32),
            _ => None,
        }
    }

    fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Number(v) if v.is_finite() => Some(v.round() as i32),
            _ => None,
        }
    }
}

impl From<Color> for SeedValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<f32> for SeedValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for SeedValue {
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for SeedValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl SeedToken {
    /// Read a field
    pub fn get(&self, field: SeedField) -> SeedValue {
        match field {
            SeedField::ColorPrimary => SeedValue::Color(self.color_primary),
            SeedField::ColorSuccess => SeedValue::Color(self.color_success),
            SeedField::ColorWarning => SeedValue::Color(self.color_warning),
            SeedField::ColorError => SeedValue::Color(self.color_error),
            SeedField::ColorInfo => SeedValue::Color(self.color_info),
            SeedField::ColorLink => SeedValue::Color(self.color_link),
            SeedField::ColorTextBase => SeedValue::Color(self.color_text_base),
            SeedField::ColorBgBase => SeedValue::Color(self.color_bg_base),
            SeedField::FontSize => SeedValue::Number(self.font_size),
            SeedField::FontFamily => SeedValue::Text(self.font_family.clone()),
            SeedField::FontFamilyCode => SeedValue::Text(self.font_family_code.clone()),
            SeedField::LineWidth => SeedValue::Number(self.line_width),
            SeedField::LineType => SeedValue::Text(self.line_type.name().to_string()),
            SeedField::BorderRadius => SeedValue::Number(self.border_radius),
            SeedField::SizeUnit => SeedValue::Number(self.size_unit),
            SeedField::SizePopupArrow => SeedValue::Number(self.size_popup_arrow),
            SeedField::ControlHeight => SeedValue::Number(self.control_height),
            SeedField::ZIndexBase => SeedValue::Integer(self.z_index_base),
            SeedField::ZIndexPopupBase => SeedValue::Integer(self.z_index_popup_base),
            SeedField::Motion => SeedValue::Flag(self.motion),
            SeedField::MotionEase => SeedValue::Text(self.motion_ease.name().to_string()),
            SeedField::OpacityImage => SeedValue::Number(self.opacity_image),
            SeedField::Wireframe => SeedValue::Flag(self.wireframe),
        }
    }

    /// Write a field, normalizing the value.
    ///
    /// Returns `false` (and leaves the seed untouched) when the value is the
    /// wrong kind for the field.
    pub fn set(&mut self, field: SeedField, value: impl Into<SeedValue>) -> bool {
        let value = value.into();
        let applied = match field.kind() {
            SeedKind::Color => match value {
                SeedValue::Color(color) => {
                    *self.color_slot(field) = color.sanitized();
                    true
                }
                _ => false,
            },
            SeedKind::Number => match value.as_number() {
                Some(number) => {
                    let normalized = field.normalize_number(number);
                    if normalized != number {
                        tracing::debug!(%field, number, normalized, "normalized seed value");
                    }
                    *self.number_slot(field) = normalized;
                    true
                }
                None => false,
            },
            SeedKind::Integer => match value.as_integer() {
                Some(int) => {
                    let int = field.normalize_integer(int);
                    match field {
                        SeedField::ZIndexBase => self.z_index_base = int,
                        _ => self.z_index_popup_base = int,
                    }
                    true
                }
                None => false,
            },
            SeedKind::Flag => match value {
                SeedValue::Flag(flag) => {
                    match field {
                        SeedField::Motion => self.motion = flag,
                        _ => self.wireframe = flag,
                    }
                    true
                }
                _ => false,
            },
            SeedKind::Text => match value {
                SeedValue::Text(text) => self.set_text(field, text),
                _ => false,
            },
        };

        if !applied {
            tracing::warn!(%field, "ignored seed value of the wrong kind");
        }
        applied
    }

    fn set_text(&mut self, field: SeedField, text: String) -> bool {
        match field {
            SeedField::FontFamily => {
                self.font_family = text;
                true
            }
            SeedField::FontFamilyCode => {
                self.font_family_code = text;
                true
            }
            SeedField::LineType => match LineType::from_name(&text) {
                Some(line_type) => {
                    self.line_type = line_type;
                    true
                }
                None => false,
            },
            SeedField::MotionEase => match MotionEase::from_name(&text) {
                Some(ease) => {
                    self.motion_ease = ease;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn color_slot(&mut self, field: SeedField) -> &mut Color {
        match field {
            SeedField::ColorSuccess => &mut self.color_success,
            SeedField::ColorWarning => &mut self.color_warning,
            SeedField::ColorError => &mut self.color_error,
            SeedField::ColorInfo => &mut self.color_info,
            SeedField::ColorLink => &mut self.color_link,
            SeedField::ColorTextBase => &mut self.color_text_base,
            SeedField::ColorBgBase => &mut self.color_bg_base,
            _ => &mut self.color_primary,
        }
    }

    fn number_slot(&mut self, field: SeedField) -> &mut f32 {
        match field {
            SeedField::LineWidth => &mut self.line_width,
            SeedField::BorderRadius => &mut self.border_radius,
            SeedField::SizeUnit => &mut self.size_unit,
            SeedField::SizePopupArrow => &mut self.size_popup_arrow,
            SeedField::ControlHeight => &mut self.control_height,
            SeedField::OpacityImage => &mut self.opacity_image,
            _ => &mut self.font_size,
        }
    }

    /// Copy of this seed with every field mapped onto its valid range
    pub fn normalized(&self) -> SeedToken {
        let mut seed = self.clone();
        for &field in SeedField::all() {
            match field.kind() {
                SeedKind::Color => {
                    let slot = seed.color_slot(field);
                    *slot = slot.sanitized();
                }
                SeedKind::Number => {
                    let slot = seed.number_slot(field);
                    *slot = field.normalize_number(*slot);
                }
                SeedKind::Integer => {
                    let slot = match field {
                        SeedField::ZIndexBase => &mut seed.z_index_base,
                        _ => &mut seed.z_index_popup_base,
                    };
                    *slot = field.normalize_integer(*slot);
                }
                _ => {}
            }
        }
        seed
    }

    /// True if [`normalized`](Self::normalized) would change nothing
    pub fn is_normalized(&self) -> bool {
        self.normalized() == *self
    }
}
