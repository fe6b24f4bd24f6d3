//! Global token derivation
//!
//! [`Token::derive`] expands a [`SeedToken`] into the full global token set:
//! semantic color sets from generated ramps, neutral text/surface/fill/border
//! colors, and the typography, spacing, radius and control-height scales.
//!
//! Derivation is pure and total. The same seed and theme always produce a
//! field-for-field identical token.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sprout_core::Color;

use super::color::{ColorToken, SemanticColor, SemanticColors};
use super::scale;
use super::seed::{LineType, MotionEase, SeedToken};
use super::shadow::ShadowTokens;
use crate::palette::{self, ColorRamp, PaletteTheme};

// ========== Neutral tables ==========

/// Text alphas: primary, secondary, tertiary, quaternary
const TEXT_ALPHAS: [f32; 4] = [0.88, 0.65, 0.45, 0.25];

/// Fill alphas: fill, secondary, tertiary, quaternary
const FILL_ALPHAS_LIGHT: [f32; 4] = [0.15, 0.06, 0.04, 0.02];
const FILL_ALPHAS_DARK: [f32; 4] = [0.18, 0.12, 0.08, 0.04];

/// How far surfaces are blended from the background base toward the text base
struct SurfaceMix {
    container: f32,
    elevated: f32,
    layout: f32,
    border: f32,
    border_secondary: f32,
    hover_alpha: f32,
}

const SURFACE_LIGHT: SurfaceMix = SurfaceMix {
    container: 0.0,
    elevated: 0.0,
    layout: 0.04,
    border: 0.15,
    border_secondary: 0.06,
    hover_alpha: 0.04,
};

const SURFACE_DARK: SurfaceMix = SurfaceMix {
    container: 0.08,
    elevated: 0.12,
    layout: 0.0,
    border: 0.26,
    border_secondary: 0.19,
    hover_alpha: 0.08,
};

const MASK_ALPHA: f32 = 0.45;
const SPOTLIGHT_ALPHA_LIGHT: f32 = 0.85;
const SPOTLIGHT_MIX_DARK: f32 = 0.26;

/// Fully derived global token set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub is_dark: bool,

    // ========== Ramps ==========
    pub primary_palette: ColorRamp,
    pub success_palette: ColorRamp,
    pub warning_palette: ColorRamp,
    pub error_palette: ColorRamp,
    pub info_palette: ColorRamp,
    pub link_palette: ColorRamp,

    // ========== Semantic colors ==========
    pub primary: SemanticColors,
    pub success: SemanticColors,
    pub warning: SemanticColors,
    pub error: SemanticColors,
    pub info: SemanticColors,

    pub color_link: Color,
    pub color_link_hover: Color,
    pub color_link_active: Color,

    // ========== Text ==========
    pub color_text: Color,
    pub color_text_secondary: Color,
    pub color_text_tertiary: Color,
    pub color_text_quaternary: Color,
    pub color_text_placeholder: Color,
    pub color_text_disabled: Color,
    pub color_text_light_solid: Color,

    // ========== Backgrounds ==========
    pub color_bg_container: Color,
    pub color_bg_elevated: Color,
    pub color_bg_layout: Color,
    pub color_bg_spotlight: Color,
    pub color_bg_mask: Color,
    pub color_bg_hover: Color,
    pub color_bg_disabled: Color,

    // ========== Fills ==========
    pub color_fill: Color,
    pub color_fill_secondary: Color,
    pub color_fill_tertiary: Color,
    pub color_fill_quaternary: Color,

    // ========== Borders ==========
    pub color_border: Color,
    pub color_border_secondary: Color,
    pub color_border_hover: Color,

    // ========== Typography ==========
    pub font_family: String,
    pub font_family_code: String,
    pub font_size: f32,
    pub font_size_sm: f32,
    pub font_size_lg: f32,
    pub font_size_xl: f32,
    pub font_size_heading1: f32,
    pub font_size_heading2: f32,
    pub font_size_heading3: f32,
    pub font_size_heading4: f32,
    pub font_size_heading5: f32,
    pub line_height: f32,
    pub line_height_sm: f32,
    pub line_height_lg: f32,
    pub line_height_heading1: f32,
    pub line_height_heading2: f32,
    pub line_height_heading3: f32,
    pub line_height_heading4: f32,
    pub line_height_heading5: f32,

    // ========== Control heights ==========
    pub control_height: f32,
    pub control_height_xs: f32,
    pub control_height_sm: f32,
    pub control_height_lg: f32,

    // ========== Radius ==========
    pub border_radius: f32,
    pub border_radius_xs: f32,
    pub border_radius_sm: f32,
    pub border_radius_lg: f32,
    pub border_radius_outer: f32,

    // ========== Spacing ==========
    pub size_unit: f32,
    pub padding_xxs: f32,
    pub padding_xs: f32,
    pub padding_sm: f32,
    pub padding: f32,
    pub padding_md: f32,
    pub padding_lg: f32,
    pub padding_xl: f32,
    pub margin_xxs: f32,
    pub margin_xs: f32,
    pub margin_sm: f32,
    pub margin: f32,
    pub margin_md: f32,
    pub margin_lg: f32,
    pub margin_xl: f32,
    pub margin_xxl: f32,
    pub size_popup_arrow: f32,

    // ========== Lines ==========
    pub line_width: f32,
    pub line_width_bold: f32,
    pub line_type: LineType,

    // ========== Motion ==========
    pub motion: bool,
    pub motion_duration_fast: f32,
    pub motion_duration_mid: f32,
    pub motion_duration_slow: f32,
    pub motion_ease: MotionEase,

    // ========== Elevation ==========
    pub shadows: ShadowTokens,

    // ========== Misc ==========
    pub opacity_image: f32,
    pub wireframe: bool,
    pub z_index_base: i32,
    pub z_index_popup_base: i32,
}

/// Derive the global token from a seed
pub fn derive(seed: &SeedToken, is_dark: bool) -> Token {
    Token::derive(seed, is_dark)
}

impl Token {
    /// Derive the global token from a seed. The seed is normalized first.
    pub fn derive(seed: &SeedToken, is_dark: bool) -> Token {
        let seed = seed.normalized();
        let theme = PaletteTheme::from_is_dark(is_dark);

        // Dark mode swaps the neutral bases
        let (text_base, bg_base) = if is_dark {
            (seed.color_bg_base, seed.color_text_base)
        } else {
            (seed.color_text_base, seed.color_bg_base)
        };
        let surface = if is_dark { &SURFACE_DARK } else { &SURFACE_LIGHT };
        let fills = if is_dark {
            FILL_ALPHAS_DARK
        } else {
            FILL_ALPHAS_LIGHT
        };
        let blend = |amount: f32| bg_base.mix(text_base.with_alpha(bg_base.a), amount);

        let color_bg_container = blend(surface.container);
        let ramp = |color: Color| palette::generate_with_background(color, theme, color_bg_container);

        let primary_palette = ramp(seed.color_primary);
        let success_palette = ramp(seed.color_success);
        let warning_palette = ramp(seed.color_warning);
        let error_palette = ramp(seed.color_error);
        let info_palette = ramp(seed.color_info);
        let link_palette = ramp(seed.color_link);

        let fs = seed.font_size;
        let headings = scale::HEADING_RATIOS.map(|ratio| fs * ratio);
        let font_size_sm = fs * scale::FONT_SIZE_SM_RATIO;
        let font_size_lg = fs * scale::FONT_SIZE_LG_RATIO;

        let unit = seed.size_unit;
        let r = seed.border_radius;
        let ch = seed.control_height;

        let token = Token {
            is_dark,

            primary: SemanticColors::from_ramp(&primary_palette),
            success: SemanticColors::from_ramp(&success_palette),
            warning: SemanticColors::from_ramp(&warning_palette),
            error: SemanticColors::from_ramp(&error_palette),
            info: SemanticColors::from_ramp(&info_palette),

            color_link: link_palette.step(6),
            color_link_hover: link_palette.step(5),
            color_link_active: link_palette.step(7),

            color_text: text_base.with_alpha(TEXT_ALPHAS[0]),
            color_text_secondary: text_base.with_alpha(TEXT_ALPHAS[1]),
            color_text_tertiary: text_base.with_alpha(TEXT_ALPHAS[2]),
            color_text_quaternary: text_base.with_alpha(TEXT_ALPHAS[3]),
            color_text_placeholder: text_base.with_alpha(TEXT_ALPHAS[3]),
            color_text_disabled: text_base.with_alpha(TEXT_ALPHAS[3]),
            color_text_light_solid: Color::WHITE,

            color_bg_container,
            color_bg_elevated: blend(surface.elevated),
            color_bg_layout: blend(surface.layout),
            color_bg_spotlight: if is_dark {
                blend(SPOTLIGHT_MIX_DARK)
            } else {
                text_base.with_alpha(SPOTLIGHT_ALPHA_LIGHT)
            },
            color_bg_mask: Color::BLACK.with_alpha(MASK_ALPHA),
            color_bg_hover: text_base.with_alpha(surface.hover_alpha),
            color_bg_disabled: text_base.with_alpha(surface.hover_alpha),

            color_fill: text_base.with_alpha(fills[0]),
            color_fill_secondary: text_base.with_alpha(fills[1]),
            color_fill_tertiary: text_base.with_alpha(fills[2]),
            color_fill_quaternary: text_base.with_alpha(fills[3]),

            color_border: blend(surface.border),
            color_border_secondary: blend(surface.border_secondary),
            color_border_hover: primary_palette.step(5),

            font_family: seed.font_family.clone(),
            font_family_code: seed.font_family_code.clone(),
            font_size: fs,
            font_size_sm,
            font_size_lg,
            font_size_xl: fs * scale::FONT_SIZE_XL_RATIO,
            font_size_heading1: headings[0],
            font_size_heading2: headings[1],
            font_size_heading3: headings[2],
            font_size_heading4: headings[3],
            font_size_heading5: headings[4],
            line_height: scale::line_height(fs),
            line_height_sm: scale::line_height(font_size_sm),
            line_height_lg: scale::line_height(font_size_lg),
            line_height_heading1: scale::line_height(headings[0]),
            line_height_heading2: scale::line_height(headings[1]),
            line_height_heading3: scale::line_height(headings[2]),
            line_height_heading4: scale::line_height(headings[3]),
            line_height_heading5: scale::line_height(headings[4]),

            control_height: ch,
            control_height_xs: ch * scale::CONTROL_HEIGHT_XS_RATIO,
            control_height_sm: ch * scale::CONTROL_HEIGHT_SM_RATIO,
            control_height_lg: ch * scale::CONTROL_HEIGHT_LG_RATIO,

            border_radius: r,
            border_radius_xs: scale::radius_xs(r),
            border_radius_sm: scale::radius_sm(r),
            border_radius_lg: scale::radius_lg(r),
            border_radius_outer: scale::radius_outer(r),

            size_unit: unit,
            padding_xxs: unit * scale::PADDING_XXS,
            padding_xs: unit * scale::PADDING_XS,
            padding_sm: unit * scale::PADDING_SM,
            padding: unit * scale::PADDING,
            padding_md: unit * scale::PADDING_MD,
            padding_lg: unit * scale::PADDING_LG,
            padding_xl: unit * scale::PADDING_XL,
            margin_xxs: unit * scale::MARGIN_XXS,
            margin_xs: unit * scale::MARGIN_XS,
            margin_sm: unit * scale::MARGIN_SM,
            margin: unit * scale::MARGIN,
            margin_md: unit * scale::MARGIN_MD,
            margin_lg: unit * scale::MARGIN_LG,
            margin_xl: unit * scale::MARGIN_XL,
            margin_xxl: unit * scale::MARGIN_XXL,
            size_popup_arrow: seed.size_popup_arrow,

            line_width: seed.line_width,
            line_width_bold: seed.line_width + 1.0,
            line_type: seed.line_type,

            motion: seed.motion,
            motion_duration_fast: scale::MOTION_DURATION_FAST,
            motion_duration_mid: scale::MOTION_DURATION_MID,
            motion_duration_slow: scale::MOTION_DURATION_SLOW,
            motion_ease: seed.motion_ease,

            shadows: ShadowTokens::DEFAULT,

            opacity_image: seed.opacity_image,
            wireframe: seed.wireframe,
            z_index_base: seed.z_index_base,
            z_index_popup_base: seed.z_index_popup_base,

            primary_palette,
            success_palette,
            warning_palette,
            error_palette,
            info_palette,
            link_palette,
        };

        tracing::trace!(is_dark, font_size = fs, "derived global token");
        token
    }

    // ========== Dynamic access ==========

    pub fn semantic(&self, color: SemanticColor) -> &SemanticColors {
        match color {
            SemanticColor::Primary => &self.primary,
            SemanticColor::Success => &self.success,
            SemanticColor::Warning => &self.warning,
            SemanticColor::Error => &self.error,
            SemanticColor::Info => &self.info,
        }
    }

    pub fn palette(&self, color: SemanticColor) -> &ColorRamp {
        match color {
            SemanticColor::Primary => &self.primary_palette,
            SemanticColor::Success => &self.success_palette,
            SemanticColor::Warning => &self.warning_palette,
            SemanticColor::Error => &self.error_palette,
            SemanticColor::Info => &self.info_palette,
        }
    }

    /// Look up a color token
    pub fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Semantic(color, slot) => self.semantic(color).get(slot),
            ColorToken::Link => self.color_link,
            ColorToken::LinkHover => self.color_link_hover,
            ColorToken::LinkActive => self.color_link_active,
            ColorToken::Text => self.color_text,
            ColorToken::TextSecondary => self.color_text_secondary,
            ColorToken::TextTertiary => self.color_text_tertiary,
            ColorToken::TextQuaternary => self.color_text_quaternary,
            ColorToken::TextPlaceholder => self.color_text_placeholder,
            ColorToken::TextDisabled => self.color_text_disabled,
            ColorToken::TextLightSolid => self.color_text_light_solid,
            ColorToken::BgContainer => self.color_bg_container,
            ColorToken::BgElevated => self.color_bg_elevated,
            ColorToken::BgLayout => self.color_bg_layout,
            ColorToken::BgSpotlight => self.color_bg_spotlight,
            ColorToken::BgMask => self.color_bg_mask,
            ColorToken::BgHover => self.color_bg_hover,
            ColorToken::BgDisabled => self.color_bg_disabled,
            ColorToken::Fill => self.color_fill,
            ColorToken::FillSecondary => self.color_fill_secondary,
            ColorToken::FillTertiary => self.color_fill_tertiary,
            ColorToken::FillQuaternary => self.color_fill_quaternary,
            ColorToken::Border => self.color_border,
            ColorToken::BorderSecondary => self.color_border_secondary,
            ColorToken::BorderHover => self.color_border_hover,
        }
    }

    /// Flatten every color token into a `name -> hex` map.
    ///
    /// Keys are kebab-case without a `--` prefix, e.g. `primary-bg-hover`.
    pub fn to_variable_map(&self) -> FxHashMap<String, String> {
        ColorToken::all()
            .into_iter()
            .map(|token| (token.name(), self.color(token).to_hex()))
            .collect()
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::derive(&SeedToken::default(), false)
    }
}
