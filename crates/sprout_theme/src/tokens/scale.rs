//! Scale tables
//!
//! Ratios and multipliers that turn the scalar seeds into full size scales.
//! Typography scales by ratio so changing the base font size moves every
//! step proportionally.

// ========== Typography ==========

pub const FONT_SIZE_SM_RATIO: f32 = 12.0 / 14.0;
pub const FONT_SIZE_LG_RATIO: f32 = 16.0 / 14.0;
pub const FONT_SIZE_XL_RATIO: f32 = 20.0 / 14.0;

/// Heading 1-5 sizes relative to the base font size
pub const HEADING_RATIOS: [f32; 5] = [38.0 / 14.0, 30.0 / 14.0, 24.0 / 14.0, 20.0 / 14.0, 16.0 / 14.0];

/// Extra leading added to a font size to get its line box
pub const LINE_HEIGHT_LEADING: f32 = 8.0;

/// Unitless line height for a font size: `(size + 8) / size`
pub fn line_height(font_size: f32) -> f32 {
    (font_size + LINE_HEIGHT_LEADING) / font_size
}

// ========== Control heights ==========

pub const CONTROL_HEIGHT_XS_RATIO: f32 = 0.5;
pub const CONTROL_HEIGHT_SM_RATIO: f32 = 0.75;
pub const CONTROL_HEIGHT_LG_RATIO: f32 = 1.25;

// ========== Spacing (multiples of the size unit) ==========

pub const PADDING_XXS: f32 = 1.0;
pub const PADDING_XS: f32 = 2.0;
pub const PADDING_SM: f32 = 3.0;
pub const PADDING: f32 = 4.0;
pub const PADDING_MD: f32 = 5.0;
pub const PADDING_LG: f32 = 6.0;
pub const PADDING_XL: f32 = 8.0;

pub const MARGIN_XXS: f32 = 1.0;
pub const MARGIN_XS: f32 = 2.0;
pub const MARGIN_SM: f32 = 3.0;
pub const MARGIN: f32 = 4.0;
pub const MARGIN_MD: f32 = 5.0;
pub const MARGIN_LG: f32 = 6.0;
pub const MARGIN_XL: f32 = 8.0;
pub const MARGIN_XXL: f32 = 12.0;

// ========== Radius ==========

/// `max(r - 4, min(r, 1))`
pub fn radius_xs(r: f32) -> f32 {
    (r - 4.0).max(r.min(1.0))
}

/// `max(r - 2, min(r, 2))`
pub fn radius_sm(r: f32) -> f32 {
    (r - 2.0).max(r.min(2.0))
}

pub fn radius_lg(r: f32) -> f32 {
    r + 2.0
}

pub fn radius_outer(r: f32) -> f32 {
    r + 4.0
}

// ========== Motion (seconds) ==========

pub const MOTION_DURATION_FAST: f32 = 0.1;
pub const MOTION_DURATION_MID: f32 = 0.2;
pub const MOTION_DURATION_SLOW: f32 = 0.3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_scale_matches_reference_sizes() {
        let fs = 14.0_f32;
        assert!((fs * FONT_SIZE_SM_RATIO - 12.0).abs() < 1e-4);
        assert!((fs * FONT_SIZE_LG_RATIO - 16.0).abs() < 1e-4);
        assert!((fs * FONT_SIZE_XL_RATIO - 20.0).abs() < 1e-4);
        assert!((fs * HEADING_RATIOS[0] - 38.0).abs() < 1e-4);
    }

    #[test]
    fn test_line_height() {
        assert!((line_height(14.0) - 22.0 / 14.0).abs() < 1e-6);
        assert_eq!(line_height(16.0), 1.5);
    }

    #[test]
    fn test_radius_scale_is_ordered() {
        for r in [0.0, 0.5, 1.0, 2.0, 3.0, 6.0, 12.0, 40.0] {
            assert!(radius_xs(r) <= radius_sm(r), "r = {}", r);
            assert!(radius_sm(r) <= r, "r = {}", r);
            assert!(r <= radius_lg(r));
            assert!(radius_lg(r) <= radius_outer(r));
            assert!(radius_xs(r) >= 0.0);
        }
        assert_eq!(radius_xs(6.0), 2.0);
        assert_eq!(radius_sm(6.0), 4.0);
        assert_eq!(radius_xs(2.0), 1.0);
    }
}
