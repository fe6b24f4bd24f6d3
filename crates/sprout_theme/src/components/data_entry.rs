//! Data entry components

use sprout_core::Color;

use crate::presets::PresetColor;

component_tokens! {
    pub struct CheckboxToken for Checkbox in checkbox {
        pub checkbox_size: f32,
        pub border_radius: f32,
        pub line_width: f32,
        pub line_width_bold: f32,
        pub color_primary: Color,
        pub color_primary_hover: Color,
        pub color_border: Color,
        pub color_bg_container: Color,
        pub color_check: Color,
        pub color_bg_container_disabled: Color,
        pub color_border_disabled: Color,
        pub color_text_disabled: Color,
        pub label_gap: f32,
        pub motion_duration_slow: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            checkbox_size: 16.0,
            border_radius: token.border_radius_sm,
            line_width: token.line_width,
            line_width_bold: token.line_width_bold,
            color_primary: token.primary.base,
            color_primary_hover: token.primary.hover,
            color_border: token.color_border,
            color_bg_container: token.color_bg_container,
            color_check: Color::WHITE,
            color_bg_container_disabled: token.color_bg_disabled,
            color_border_disabled: token.color_border,
            color_text_disabled: token.color_text_disabled,
            label_gap: token.padding_xs,
            motion_duration_slow: token.motion_duration_slow,
        }
    }
}

component_tokens! {
    pub struct RadioToken for Radio in radio {
        pub radio_size: f32,
        pub dot_size: f32,
        pub line_width: f32,
        pub color_primary: Color,
        pub color_border: Color,
        pub radio_color: Color,
        pub radio_bg_color: Color,
        pub color_bg_container_disabled: Color,
        pub color_border_disabled: Color,
        pub color_text_disabled: Color,
        pub dot_color_disabled: Color,
        pub wrapper_margin_inline_end: f32,
        pub motion_duration_mid: f32,
        pub motion_duration_slow: f32,
        pub button_padding_inline_sm: f32,
        pub button_padding_block_sm: f32,
        pub button_padding_inline: f32,
        pub button_padding_block: f32,
        pub button_padding_inline_lg: f32,
        pub button_padding_block_lg: f32,
        pub button_bg: Color,
        pub button_color: Color,
        pub button_checked_bg: Color,
        pub button_checked_bg_disabled: Color,
        pub button_checked_color_disabled: Color,
        pub button_solid_checked_bg: Color,
        pub button_solid_checked_hover_bg: Color,
        pub button_solid_checked_active_bg: Color,
        pub button_solid_checked_color: Color,
    }

    fn resolve(token, is_dark) {
        let lw = token.line_width;
        Self {
            radio_size: 16.0,
            dot_size: 8.0,
            line_width: lw,
            color_primary: token.primary.base,
            color_border: token.color_border,
            radio_color: token.primary.base,
            radio_bg_color: token.color_bg_container,
            color_bg_container_disabled: token.color_bg_disabled,
            color_border_disabled: token.color_border,
            color_text_disabled: token.color_text_disabled,
            dot_color_disabled: token.color_text_disabled,
            wrapper_margin_inline_end: token.padding_xs,
            motion_duration_mid: token.motion_duration_mid,
            motion_duration_slow: token.motion_duration_slow,
            // Button-style radios share the button's bordered paddings
            button_padding_inline_sm: token.padding_sm - lw,
            button_padding_block_sm: (token.control_height_sm - token.font_size_sm * token.line_height_sm) / 2.0 - lw,
            button_padding_inline: token.padding - lw,
            button_padding_block: (token.control_height - token.font_size * token.line_height) / 2.0 - lw,
            button_padding_inline_lg: token.padding_lg - lw,
            button_padding_block_lg: (token.control_height_lg - token.font_size_lg * token.line_height_lg) / 2.0 - lw,
            button_bg: token.color_bg_container,
            button_color: token.color_text,
            button_checked_bg: token.color_bg_container,
            button_checked_bg_disabled: token.color_bg_disabled,
            button_checked_color_disabled: token.color_text_disabled,
            button_solid_checked_bg: token.primary.base,
            button_solid_checked_hover_bg: token.primary.hover,
            button_solid_checked_active_bg: token.primary.active,
            button_solid_checked_color: token.color_text_light_solid,
        }
    }
}

component_tokens! {
    pub struct RateToken for Rate in rate {
        pub star_color: Color,
        pub star_bg: Color,
        pub star_size: f32,
        pub star_size_sm: f32,
        pub star_size_lg: f32,
        pub star_hover_scale: f32,
        pub star_gap: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            star_color: PresetColor::Yellow.color(),
            star_bg: token.color_fill_tertiary,
            star_size: token.control_height * 0.625,
            star_size_sm: token.control_height_sm * 0.625,
            star_size_lg: token.control_height_lg * 0.625,
            star_hover_scale: 1.1,
            star_gap: token.margin_xs,
        }
    }
}

component_tokens! {
    pub struct SliderToken for Slider in slider {
        pub control_size: f32,
        pub rail_size: f32,
        pub handle_size: f32,
        pub handle_size_hover: f32,
        pub handle_line_width: f32,
        pub handle_line_width_hover: f32,
        pub dot_size: f32,
        pub rail_bg: Color,
        pub rail_hover_bg: Color,
        pub track_bg: Color,
        pub track_hover_bg: Color,
        pub track_bg_disabled: Color,
        pub handle_color: Color,
        pub handle_hover_color: Color,
        pub handle_active_color: Color,
        pub handle_active_outline_color: Color,
        pub handle_color_disabled: Color,
        pub dot_border_color: Color,
        pub dot_active_border_color: Color,
    }

    fn resolve(token, is_dark) {
        let control_size = token.control_height_lg / 4.0;
        let handle_line_width = token.line_width + 1.0;
        Self {
            control_size,
            rail_size: 4.0,
            handle_size: control_size,
            handle_size_hover: token.control_height_sm / 2.0,
            handle_line_width,
            handle_line_width_hover: handle_line_width + 0.5,
            dot_size: 8.0,
            rail_bg: token.color_fill_tertiary,
            rail_hover_bg: token.color_fill_secondary,
            track_bg: token.primary.border,
            track_hover_bg: token.primary.border_hover,
            track_bg_disabled: token.color_bg_disabled,
            handle_color: token.primary.border,
            handle_hover_color: token.primary.border_hover,
            handle_active_color: token.primary.base,
            handle_active_outline_color: token.primary.base.with_alpha(0.3),
            handle_color_disabled: token.color_border,
            dot_border_color: token.color_border_secondary,
            dot_active_border_color: token.primary.border,
        }
    }
}

component_tokens! {
    /// Switch track and handle. The handle and the off-state track change
    /// with the theme rather than following the neutral text colors.
    pub struct SwitchToken for Switch in switch {
        pub track_height: f32,
        pub track_min_width: f32,
        pub handle_size: f32,
        pub handle_shadow: Color,
        pub handle_bg: Color,
        pub inner_margin: f32,
        pub color_primary: Color,
        pub color_primary_hover: Color,
        /// Track color when off
        pub color_off: Color,
        /// Track color when off and hovered
        pub color_off_hover: Color,
        pub color_text_disabled: Color,
        pub color_bg_disabled: Color,
    }

    fn resolve(token, is_dark) {
        let track_height = token.control_height_sm - 2.0;
        let handle_size = token.control_height_sm - 6.0;
        if is_dark {
            Self {
                track_height,
                track_min_width: 44.0,
                handle_size,
                handle_shadow: Color::BLACK.with_alpha(0.4),
                handle_bg: token.color_bg_container,
                inner_margin: 2.0,
                color_primary: token.primary.base,
                color_primary_hover: token.primary.hover,
                color_off: Color::WHITE.with_alpha(0.25),
                color_off_hover: Color::WHITE.with_alpha(0.35),
                color_text_disabled: token.color_text_disabled,
                color_bg_disabled: Color::WHITE.with_alpha(0.15),
            }
        } else {
            Self {
                track_height,
                track_min_width: 44.0,
                handle_size,
                handle_shadow: Color::BLACK.with_alpha(0.12),
                handle_bg: Color::WHITE,
                inner_margin: 2.0,
                color_primary: token.primary.base,
                color_primary_hover: token.primary.hover,
                color_off: Color::BLACK.with_alpha(0.25),
                color_off_hover: Color::BLACK.with_alpha(0.45),
                color_text_disabled: token.color_text_disabled,
                color_bg_disabled: token.color_bg_disabled,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentTokens;
    use crate::tokens::{SeedToken, Token};

    #[test]
    fn test_switch_sizes_follow_small_control_height() {
        let token = Token::default();
        let switch = SwitchToken::resolve(&token, false);
        assert_eq!(switch.track_height, 22.0);
        assert_eq!(switch.handle_size, 18.0);
        assert!(switch.handle_size < switch.track_height);
    }

    #[test]
    fn test_switch_dark_variant() {
        let token = Token::derive(&SeedToken::default(), true);
        let dark = SwitchToken::resolve(&token, true);
        let light = SwitchToken::resolve(&token, false);
        assert_eq!(dark.handle_bg, token.color_bg_container);
        assert_eq!(light.handle_bg, Color::WHITE);
        assert_ne!(dark.color_off, light.color_off);
        assert_eq!(dark.track_height, light.track_height);
    }

    #[test]
    fn test_rate_star_sizes() {
        let token = Token::default();
        let rate = RateToken::resolve(&token, false);
        assert_eq!(rate.star_size, 20.0);
        assert_eq!(rate.star_size_sm, 15.0);
        assert_eq!(rate.star_size_lg, 25.0);
        assert_eq!(rate.star_color, Color::from_hex(0xFADB14));
    }

    #[test]
    fn test_radio_button_paddings_match_button() {
        let token = Token::default();
        let radio = RadioToken::resolve(&token, false);
        assert_eq!(radio.button_padding_inline, 15.0);
        assert_eq!(radio.button_padding_inline_lg, 23.0);
        assert_eq!(radio.button_padding_inline_sm, 11.0);
        assert!((radio.button_padding_block - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_slider_handle() {
        let token = Token::default();
        let slider = SliderToken::resolve(&token, false);
        assert_eq!(slider.control_size, 10.0);
        assert_eq!(slider.handle_line_width, 2.0);
        assert_eq!(slider.handle_line_width_hover, 2.5);
        assert_eq!(slider.track_bg, token.primary.border);
    }
}
