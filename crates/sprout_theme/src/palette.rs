//! Color ramp generation
//!
//! Turns one seed color into a ten-step ramp. Step 1 is the subtlest tint,
//! step 10 the strongest shade, and step 6 is always the seed itself.
//!
//! The light ramp walks the seed through HSV space: tints rotate the hue a
//! little, drop saturation and raise value; shades do the opposite. The dark
//! ramp takes those light patterns and mixes them into the page background
//! so low steps sit close to the surface and high steps stand out.
//!
//! A final pass walks outward from step 6 and pins every step whose luma
//! breaks the theme direction, so lightness is monotonic for any input.

use serde::{Deserialize, Serialize};
use sprout_core::{Color, Hsv};

/// Number of steps in a ramp
pub const RAMP_LEN: usize = 10;

/// Step that reproduces the seed color
pub const PRIMARY_STEP: usize = 6;

/// Default dark page background
pub const DARK_BACKGROUND: Color = Color::rgb(20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0);

/// How far a step is pushed past its neighbor when it breaks monotonic luma
const MONOTONIC_NUDGE: f32 = 0.06;

/// Below this saturation a seed is treated as gray
const MONOCHROME_SATURATION: f32 = 1e-3;

/// Dark steps 1-5 as `(light pattern step, amount mixed from the background)`
const DARK_TINT_MIX: [(usize, f32); 5] = [(7, 0.15), (6, 0.25), (5, 0.30), (5, 0.45), (5, 0.65)];

/// Dark steps 7-10
const DARK_SHADE_MIX: [(usize, f32); 4] = [(4, 0.90), (3, 0.95), (2, 0.97), (1, 0.98)];

/// Which presentation a ramp is generated for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteTheme {
    #[default]
    Light,
    Dark,
}

impl PaletteTheme {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Tunable HSV step table for the light ramp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampCurve {
    /// Hue rotation per step, in degrees
    pub hue_step: f32,
    /// Saturation lost per tint step
    pub saturation_step: f32,
    /// Saturation gained per shade step
    pub saturation_step_shade: f32,
    /// Saturation gained by the deepest shade
    pub saturation_step_deepest: f32,
    /// Value gained per tint step
    pub brightness_step_tint: f32,
    /// Value lost per shade step
    pub brightness_step_shade: f32,
    /// Saturation cap for step 1
    pub lightest_saturation_max: f32,
    /// Saturation floor for every non-gray step
    pub saturation_min: f32,
}

impl RampCurve {
    pub const DEFAULT: RampCurve = RampCurve {
        hue_step: 2.0,
        saturation_step: 0.16,
        saturation_step_shade: 0.05,
        saturation_step_deepest: 0.16,
        brightness_step_tint: 0.05,
        brightness_step_shade: 0.15,
        lightest_saturation_max: 0.1,
        saturation_min: 0.06,
    };
}

impl Default for RampCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Ten colors, addressed by 1-based step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRamp {
    colors: [Color; RAMP_LEN],
}

impl ColorRamp {
    pub fn from_colors(colors: [Color; RAMP_LEN]) -> Self {
        Self { colors }
    }

    /// Color at `step` (1..=10). Out-of-range steps clamp to the nearest end.
    pub fn step(&self, step: usize) -> Color {
        self.colors[step.clamp(1, RAMP_LEN) - 1]
    }

    pub fn get(&self, step: usize) -> Option<Color> {
        if (1..=RAMP_LEN).contains(&step) {
            Some(self.colors[step - 1])
        } else {
            None
        }
    }

    /// The seed color (step 6)
    pub fn primary(&self) -> Color {
        self.step(PRIMARY_STEP)
    }

    pub fn colors(&self) -> &[Color; RAMP_LEN] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Hex strings for every step, in order
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }
}

/// Generate a ramp against the default dark background
pub fn generate(seed: Color, theme: PaletteTheme) -> ColorRamp {
    generate_with_background(seed, theme, DARK_BACKGROUND)
}

/// Generate a ramp; `background` only matters for the dark theme
pub fn generate_with_background(seed: Color, theme: PaletteTheme, background: Color) -> ColorRamp {
    generate_with_curve(seed, theme, background, &RampCurve::DEFAULT)
}

/// Generate a ramp with a custom HSV step table
pub fn generate_with_curve(
    seed: Color,
    theme: PaletteTheme,
    background: Color,
    curve: &RampCurve,
) -> ColorRamp {
    let seed = seed.sanitized();
    let patterns = light_patterns(seed, curve);

    let mut colors = match theme {
        PaletteTheme::Light => patterns,
        PaletteTheme::Dark => {
            let background = background.sanitized();
            let mut colors = [seed; RAMP_LEN];
            for (i, (pattern_step, amount)) in DARK_TINT_MIX.iter().enumerate() {
                colors[i] = background.mix(patterns[pattern_step - 1], *amount);
            }
            for (i, (pattern_step, amount)) in DARK_SHADE_MIX.iter().enumerate() {
                colors[PRIMARY_STEP + i] = background.mix(patterns[pattern_step - 1], *amount);
            }
            colors
        }
    };

    enforce_monotonic_luma(&mut colors, theme);

    tracing::trace!(seed = %seed, ?theme, "generated color ramp");
    ColorRamp { colors }
}

// ========== Light patterns ==========

fn light_patterns(seed: Color, curve: &RampCurve) -> [Color; RAMP_LEN] {
    let hsv = seed.to_hsv();
    let mut colors = [seed; RAMP_LEN];

    // Tints: i = 5 (step 1) down to 1 (step 5)
    for i in (1..=5).rev() {
        colors[5 - i] = tint_or_shade(hsv, i, true, curve).to_color();
    }
    // Shades: i = 1 (step 7) up to 4 (step 10)
    for i in 1..=4 {
        colors[PRIMARY_STEP - 1 + i] = tint_or_shade(hsv, i, false, curve).to_color();
    }

    colors
}

fn tint_or_shade(hsv: Hsv, i: usize, is_tint: bool, curve: &RampCurve) -> Hsv {
    let monochrome = hsv.s < MONOCHROME_SATURATION;
    Hsv::new(
        if monochrome {
            hsv.h
        } else {
            step_hue(hsv.h, i, is_tint, curve)
        },
        if monochrome {
            hsv.s
        } else {
            step_saturation(hsv.s, i, is_tint, curve)
        },
        step_value(hsv.v, i, is_tint, curve),
    )
}

fn step_hue(h: f32, i: usize, is_tint: bool, curve: &RampCurve) -> f32 {
    let base = h.round();
    let delta = curve.hue_step * i as f32;
    // Cool hues rotate down for tints, warm hues rotate up
    let toward_lower = (60.0..=240.0).contains(&base) == is_tint;
    let hue = if toward_lower { base - delta } else { base + delta };
    hue.rem_euclid(360.0)
}

fn step_saturation(s: f32, i: usize, is_tint: bool, curve: &RampCurve) -> f32 {
    let mut saturation = if is_tint {
        s - curve.saturation_step * i as f32
    } else if i == 4 {
        s + curve.saturation_step_deepest
    } else {
        s + curve.saturation_step_shade * i as f32
    };

    saturation = saturation.min(1.0);
    if is_tint && i == 5 {
        saturation = saturation.min(curve.lightest_saturation_max);
    }
    saturation = saturation.max(curve.saturation_min);

    round2(saturation)
}

fn step_value(v: f32, i: usize, is_tint: bool, curve: &RampCurve) -> f32 {
    let value = if is_tint {
        v + curve.brightness_step_tint * i as f32
    } else {
        v - curve.brightness_step_shade * i as f32
    };
    round2(value).clamp(0.0, 1.0)
}

fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

// ========== Monotonic luma ==========

/// Light ramps get darker from step 1 to 10, dark ramps get lighter.
fn enforce_monotonic_luma(colors: &mut [Color; RAMP_LEN], theme: PaletteTheme) {
    let (low_side_target, high_side_target) = match theme {
        PaletteTheme::Light => (Color::WHITE, Color::BLACK),
        PaletteTheme::Dark => (Color::BLACK, Color::WHITE),
    };
    let ascending = theme.is_dark();

    let mut pinned = 0usize;

    // Steps 5..=1, each compared with its inner neighbor
    for idx in (0..PRIMARY_STEP - 1).rev() {
        let inner = colors[idx + 1];
        let in_order = if ascending {
            colors[idx].luma() <= inner.luma()
        } else {
            colors[idx].luma() >= inner.luma()
        };
        if !in_order {
            colors[idx] = inner.mix(low_side_target, MONOTONIC_NUDGE);
            pinned += 1;
        }
    }

    // Steps 7..=10
    for idx in PRIMARY_STEP..RAMP_LEN {
        let inner = colors[idx - 1];
        let in_order = if ascending {
            colors[idx].luma() >= inner.luma()
        } else {
            colors[idx].luma() <= inner.luma()
        };
        if !in_order {
            colors[idx] = inner.mix(high_side_target, MONOTONIC_NUDGE);
            pinned += 1;
        }
    }

    if pinned > 0 {
        tracing::trace!(pinned, ?theme, "pinned ramp steps to keep luma monotonic");
    }
}
