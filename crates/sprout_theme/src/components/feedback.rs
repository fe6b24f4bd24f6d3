//! Feedback components

use sprout_core::Color;

component_tokens! {
    pub struct AlertToken for Alert in alert {
        pub color_success_bg: Color,
        pub color_success_border: Color,
        pub color_success: Color,
        pub color_info_bg: Color,
        pub color_info_border: Color,
        pub color_info: Color,
        pub color_warning_bg: Color,
        pub color_warning_border: Color,
        pub color_warning: Color,
        pub color_error_bg: Color,
        pub color_error_border: Color,
        pub color_error: Color,
        pub color_text_heading: Color,
        pub color_text: Color,
        pub color_icon: Color,
        pub color_icon_hover: Color,
        pub default_padding_block: f32,
        pub default_padding_inline: f32,
        pub with_description_padding_block: f32,
        pub with_description_padding_inline: f32,
        pub with_description_icon_size: f32,
        pub font_size: f32,
        pub font_size_lg: f32,
        pub line_height: f32,
        pub line_height_lg: f32,
        pub icon_size: f32,
        pub line_width: f32,
        pub border_radius_lg: f32,
        pub margin_xs: f32,
        pub margin_sm: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            color_success_bg: token.success.bg,
            color_success_border: token.success.border,
            color_success: token.success.base,
            color_info_bg: token.info.bg,
            color_info_border: token.info.border,
            color_info: token.info.base,
            color_warning_bg: token.warning.bg,
            color_warning_border: token.warning.border,
            color_warning: token.warning.base,
            color_error_bg: token.error.bg,
            color_error_border: token.error.border,
            color_error: token.error.base,
            color_text_heading: token.color_text,
            color_text: token.color_text,
            color_icon: token.color_text_tertiary,
            color_icon_hover: token.color_text,
            default_padding_block: token.padding_xs,
            default_padding_inline: token.padding_sm,
            with_description_padding_block: token.padding_md,
            with_description_padding_inline: token.padding_lg,
            with_description_icon_size: token.font_size_heading3,
            font_size: token.font_size,
            font_size_lg: token.font_size_lg,
            line_height: token.line_height,
            line_height_lg: token.line_height_lg,
            icon_size: token.font_size_lg,
            line_width: token.line_width,
            border_radius_lg: token.border_radius_lg,
            margin_xs: token.margin_xs,
            margin_sm: token.margin_sm,
        }
    }
}

component_tokens! {
    pub struct ProgressToken for Progress in progress {
        pub default_color: Color,
        pub remaining_color: Color,
        pub circle_text_color: Color,
        pub line_border_radius: f32,
        pub circle_text_font_size: String,
        /// Relative size of status icons inside a circle, e.g. `1.17em`
        pub circle_icon_font_size: String,
        pub success_color: Color,
        pub exception_color: Color,
    }

    fn resolve(token, is_dark) {
        Self {
            default_color: token.info.base,
            remaining_color: token.color_fill_secondary,
            circle_text_color: token.color_text,
            line_border_radius: 100.0,
            circle_text_font_size: "1em".to_string(),
            circle_icon_font_size: format!("{:.2}em", token.font_size / token.font_size_sm),
            success_color: token.success.base,
            exception_color: token.error.base,
        }
    }
}

component_tokens! {
    pub struct ResultToken for Result in result {
        pub title_font_size: f32,
        pub subtitle_font_size: f32,
        pub icon_font_size: f32,
        pub extra_margin: f32,
        pub padding: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            title_font_size: token.font_size_heading3,
            subtitle_font_size: token.font_size,
            icon_font_size: token.font_size_heading3 * 3.0,
            extra_margin: token.padding_lg,
            padding: token.padding_lg * 2.0,
        }
    }
}

component_tokens! {
    pub struct SkeletonToken for Skeleton in skeleton {
        pub gradient_from_color: Color,
        pub gradient_to_color: Color,
        pub title_height: f32,
        pub block_radius: f32,
        pub paragraph_margin_top: f32,
        pub paragraph_li_height: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            gradient_from_color: token.color_fill_secondary,
            gradient_to_color: token.color_fill,
            title_height: token.control_height / 2.0,
            block_radius: token.border_radius_sm,
            paragraph_margin_top: token.margin_lg + token.margin_xxs,
            paragraph_li_height: token.control_height / 2.0,
        }
    }
}

component_tokens! {
    pub struct SpinToken for Spin in spin {
        pub dot_size: f32,
        pub dot_size_sm: f32,
        pub dot_size_lg: f32,
        pub content_height: f32,
        /// One full rotation, in seconds
        pub motion_duration: f32,
        pub color: Color,
    }

    fn resolve(token, is_dark) {
        Self {
            dot_size: token.control_height_lg / 2.0,
            dot_size_sm: token.control_height_lg * 0.35,
            dot_size_lg: token.control_height,
            content_height: 400.0,
            motion_duration: 1.2,
            color: token.primary.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentTokens;
    use crate::tokens::{SeedField, SeedToken, Token};

    #[test]
    fn test_skeleton_title_height_is_half_control_height() {
        let mut seed = SeedToken::default();
        seed.set(SeedField::ControlHeight, 40.0);
        let token = Token::derive(&seed, false);
        assert_eq!(SkeletonToken::resolve(&token, false).title_height, 20.0);
    }

    #[test]
    fn test_result_icon_is_three_headings() {
        let token = Token::default();
        let result = ResultToken::resolve(&token, false);
        assert_eq!(result.icon_font_size, token.font_size_heading3 * 3.0);
        assert_eq!(result.padding, 48.0);
    }

    #[test]
    fn test_progress_icon_font_size_text() {
        let progress = ProgressToken::resolve(&Token::default(), false);
        assert_eq!(progress.circle_icon_font_size, "1.17em");
        assert_eq!(progress.circle_text_font_size, "1em");
    }

    #[test]
    fn test_alert_reads_status_sets() {
        let token = Token::derive(&SeedToken::default(), true);
        let alert = AlertToken::resolve(&token, true);
        assert_eq!(alert.color_warning_bg, token.warning.bg);
        assert_eq!(alert.color_error, token.error.base);
        assert_eq!(alert.default_padding_inline, 12.0);
    }

    #[test]
    fn test_spin_sizes() {
        let spin = SpinToken::resolve(&Token::default(), false);
        assert_eq!(spin.dot_size, 20.0);
        assert_eq!(spin.dot_size_lg, 32.0);
        assert!((spin.dot_size_sm - 14.0).abs() < 1e-4);
    }
}
