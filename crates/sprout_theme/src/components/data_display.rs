//! Data display components

use sprout_core::Color;

component_tokens! {
    pub struct AvatarToken for Avatar in avatar {
        pub container_bg: Color,
        pub color_text: Color,
        pub size: f32,
        pub size_lg: f32,
        pub size_sm: f32,
        pub font_size: f32,
        pub font_size_lg: f32,
        pub font_size_sm: f32,
        pub border_radius: f32,
        pub border_radius_lg: f32,
        pub border_radius_sm: f32,
        /// Positive values space avatars apart, negative values overlap them
        pub group_spacing: f32,
        pub group_border_color: Color,
        pub group_border_width: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            container_bg: token.color_text_placeholder,
            color_text: token.color_text_light_solid,
            size: token.control_height,
            size_lg: token.control_height_lg,
            size_sm: token.control_height_sm,
            font_size: token.font_size_heading5,
            font_size_lg: token.font_size_heading3,
            font_size_sm: token.font_size,
            border_radius: token.border_radius,
            border_radius_lg: token.border_radius_lg,
            border_radius_sm: token.border_radius_sm,
            group_spacing: 4.0,
            group_border_color: token.color_bg_container,
            group_border_width: token.line_width * 2.0,
        }
    }
}

component_tokens! {
    pub struct BadgeToken for Badge in badge {
        pub indicator_height: f32,
        pub indicator_height_sm: f32,
        pub dot_size: f32,
        pub dot_size_sm: f32,
        pub text_font_size: f32,
        pub text_font_size_sm: f32,
        pub text_font_weight: i32,
        pub status_size: f32,
        pub shadow_radius: f32,
        pub shadow_opacity: f32,
        pub padding_inline: f32,
        pub padding_inline_sm: f32,
        pub text_color: Color,
        pub badge_color: Color,
        pub badge_shadow_color: Color,
    }

    fn resolve(token, is_dark) {
        Self {
            indicator_height: 18.0,
            indicator_height_sm: 14.0,
            dot_size: 8.0,
            dot_size_sm: 6.0,
            text_font_size: 11.0,
            text_font_size_sm: 10.0,
            text_font_weight: 500,
            status_size: 6.0,
            shadow_radius: 2.0,
            shadow_opacity: 0.3,
            padding_inline: 6.0,
            padding_inline_sm: 4.0,
            text_color: token.color_text_light_solid,
            badge_color: token.error.base,
            badge_shadow_color: token.color_bg_container,
        }
    }
}

component_tokens! {
    pub struct EmptyToken for Empty in empty {
        pub image_height: f32,
        pub image_height_sm: f32,
        pub image_opacity: f32,
        pub color_description: Color,
    }

    fn resolve(token, is_dark) {
        Self {
            image_height: 100.0,
            image_height_sm: 40.0,
            image_opacity: token.opacity_image,
            color_description: token.color_text_tertiary,
        }
    }
}

component_tokens! {
    pub struct StatisticToken for Statistic in statistic {
        pub title_font_size: f32,
        pub content_font_size: f32,
        pub title_color: Color,
        pub content_color: Color,
    }

    fn resolve(token, is_dark) {
        Self {
            title_font_size: token.font_size,
            content_font_size: token.font_size_heading3,
            title_color: token.color_text_secondary,
            content_color: token.color_text,
        }
    }
}

component_tokens! {
    pub struct TagToken for Tag in tag {
        pub default_bg: Color,
        pub default_color: Color,
        pub solid_text_color: Color,
        pub icon_size_lg: f32,
        pub icon_size: f32,
        pub icon_size_sm: f32,
        pub close_icon_size_lg: f32,
        pub close_icon_size: f32,
        pub close_icon_size_sm: f32,
        pub icon_gap_lg: f32,
        pub icon_gap: f32,
        pub icon_gap_sm: f32,
        pub padding_inline_lg: f32,
        pub padding_inline: f32,
        pub padding_inline_sm: f32,
        pub padding_block_lg: f32,
        pub padding_block: f32,
        pub padding_block_sm: f32,
        pub border_radius: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            default_bg: token.color_fill_secondary,
            default_color: token.color_text,
            solid_text_color: token.color_text_light_solid,
            icon_size_lg: 12.0,
            icon_size: 10.0,
            icon_size_sm: 8.0,
            close_icon_size_lg: 9.0,
            close_icon_size: 8.0,
            close_icon_size_sm: 7.0,
            icon_gap_lg: token.padding_xs,
            icon_gap: token.padding_xxs,
            icon_gap_sm: 2.0,
            padding_inline_lg: token.padding_md,
            padding_inline: token.padding_sm,
            padding_inline_sm: token.padding_xs,
            padding_block_lg: token.padding_xxs + 2.0,
            padding_block: token.padding_xxs,
            padding_block_sm: 1.0,
            border_radius: token.border_radius_sm,
        }
    }
}

component_tokens! {
    pub struct TimelineToken for Timeline in timeline {
        pub tail_color: Color,
        pub tail_width: f32,
        pub dot_size: f32,
        pub dot_border_width: f32,
        pub dot_bg: Color,
        pub item_padding_bottom: f32,
        pub content_inset_start: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            tail_color: token.color_border_secondary,
            tail_width: token.line_width_bold,
            dot_size: token.line_width_bold * 2.0 + token.control_height_xs / 4.0,
            dot_border_width: token.line_width_bold,
            dot_bg: token.color_bg_container,
            item_padding_bottom: token.padding_lg + token.padding_sm,
            content_inset_start: token.padding_md,
        }
    }
}

component_tokens! {
    pub struct TooltipToken for Tooltip in tooltip {
        pub max_width: f32,
        pub z_index_popup: i32,
        pub color_bg: Color,
        pub color_text: Color,
        pub border_radius: f32,
        pub padding_block: f32,
        pub padding_inline: f32,
        pub arrow_size: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            max_width: 250.0,
            z_index_popup: token.z_index_popup_base.saturating_add(70),
            color_bg: token.color_bg_spotlight,
            color_text: token.color_text_light_solid,
            border_radius: token.border_radius,
            padding_block: token.padding_xs - 2.0,
            padding_inline: token.padding_xs,
            arrow_size: token.size_popup_arrow / 2.0,
        }
    }
}

component_tokens! {
    pub struct PopoverToken for Popover in popover {
        pub title_min_width: f32,
        pub z_index_popup: i32,
        pub inner_padding: f32,
        pub title_margin_bottom: f32,
        pub color_bg: Color,
        pub border_radius: f32,
    }

    fn resolve(token, is_dark) {
        Self {
            title_min_width: 177.0,
            z_index_popup: token.z_index_popup_base.saturating_add(30),
            inner_padding: 12.0,
            title_margin_bottom: token.margin_xs,
            color_bg: token.color_bg_elevated,
            border_radius: token.border_radius_lg,
        }
    }
}
