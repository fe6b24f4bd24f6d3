//! General components: button, divider, space

use sprout_core::Color;

use crate::tokens::Shadow;

component_tokens! {
    /// Button sizes, paddings and the few colors buttons do not take
    /// straight from the global token.
    pub struct ButtonToken for Button in button {
        pub font_weight: i32,
        pub content_font_size: f32,
        pub content_font_size_lg: f32,
        pub content_font_size_sm: f32,
        pub content_line_height: f32,
        pub content_line_height_lg: f32,
        pub content_line_height_sm: f32,
        pub padding_inline: f32,
        pub padding_inline_lg: f32,
        pub padding_inline_sm: f32,
        pub padding_block: f32,
        pub padding_block_lg: f32,
        pub padding_block_sm: f32,
        pub icon_gap: f32,
        pub only_icon_size: f32,
        pub only_icon_size_lg: f32,
        pub only_icon_size_sm: f32,
        pub group_border_color: Color,
        pub default_shadow: Shadow,
        pub primary_shadow: Shadow,
        pub danger_shadow: Shadow,
        pub text_text_color: Color,
    }

    fn resolve(token, is_dark) {
        Self {
            font_weight: 500,
            content_font_size: token.font_size,
            content_font_size_lg: token.font_size_lg,
            content_font_size_sm: token.font_size_sm,
            content_line_height: token.line_height,
            content_line_height_lg: token.line_height_lg,
            content_line_height_sm: token.line_height_sm,
            // Inner width excludes the border
            padding_inline: token.padding - token.line_width,
            padding_inline_lg: token.padding_lg - token.line_width,
            padding_inline_sm: token.padding_xs - token.line_width,
            padding_block: 0.0,
            padding_block_lg: 0.0,
            padding_block_sm: 0.0,
            icon_gap: 6.0,
            only_icon_size: 16.0,
            only_icon_size_lg: 18.0,
            only_icon_size_sm: 14.0,
            group_border_color: token.primary.hover,
            default_shadow: Shadow::drop(2.0, 0.0, if is_dark { 0.0 } else { 0.02 }),
            primary_shadow: Shadow::new(
                0.0,
                2.0,
                0.0,
                0.0,
                token.primary.base.with_alpha(0.1),
            ),
            danger_shadow: Shadow::new(0.0, 2.0, 0.0, 0.0, token.error.base.with_alpha(0.06)),
            text_text_color: token.color_text,
        }
    }
}

component_tokens! {
    pub struct DividerToken for Divider in divider {
        pub text_padding: f32,
        /// Fraction of the line length before left/right aligned text
        pub orientation_margin: f32,
        pub dash_length: f32,
        pub dash_gap: f32,
        pub color_split: Color,
        pub line_width: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            text_padding: token.padding,
            orientation_margin: 0.05,
            dash_length: 4.0,
            dash_gap: 4.0,
            color_split: token.color_border_secondary,
            line_width: token.line_width,
        }
    }
}

component_tokens! {
    /// Space has no tokens of its own; gaps come from the global spacing scale.
    pub struct SpaceToken for Space in space {}

    fn resolve(token, is_dark) {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentTokens;
    use crate::tokens::{SeedToken, Token};

    #[test]
    fn test_button_defaults() {
        let token = Token::default();
        let button = ButtonToken::resolve(&token, false);
        assert_eq!(button.padding_inline, 15.0);
        assert_eq!(button.padding_inline_lg, 23.0);
        assert_eq!(button.padding_inline_sm, 7.0);
        assert_eq!(button.group_border_color, token.primary.hover);
        assert_eq!(button.content_font_size, 14.0);
    }

    #[test]
    fn test_button_tracks_size_unit() {
        let mut seed = SeedToken::default();
        seed.size_unit = 5.0;
        let token = Token::derive(&seed, false);
        let button = ButtonToken::resolve(&token, false);
        assert_eq!(button.padding_inline, 19.0);
    }

    #[test]
    fn test_space_has_no_fields() {
        assert!(SpaceToken::field_names().is_empty());
        assert_eq!(SpaceToken::default().field("gap"), None);
    }

    #[test]
    fn test_divider_uses_secondary_border() {
        let dark = Token::derive(&SeedToken::default(), true);
        let divider = DividerToken::resolve(&dark, true);
        assert_eq!(divider.color_split, dark.color_border_secondary);
    }
}
