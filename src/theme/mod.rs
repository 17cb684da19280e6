use gpui::{FontWeight, Hsla, Pixels, px, rgb};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

fn hex(value: u32) -> Hsla {
    rgb(value).into()
}

mod palette {
    pub const GRAY: [u32; 10] = [
        0xf8f9fa, 0xf1f3f5, 0xe9ecef, 0xdee2e6, 0xced4da, 0xadb5bd, 0x868e96, 0x495057, 0x343a40,
        0x212529,
    ];
    pub const DARK: [u32; 10] = [
        0xc9c9c9, 0xb8b8b8, 0x828282, 0x696969, 0x424242, 0x3b3b3b, 0x2e2e2e, 0x242424, 0x1f1f1f,
        0x141414,
    ];
    pub const BLUE: [u32; 10] = [
        0xe7f5ff, 0xd0ebff, 0xa5d8ff, 0x74c0fc, 0x4dabf7, 0x339af0, 0x228be6, 0x1c7ed6, 0x1971c2,
        0x1864ab,
    ];
    pub const YELLOW: [u32; 10] = [
        0xfff9db, 0xfff3bf, 0xffec99, 0xffe066, 0xffd43b, 0xfcc419, 0xfab005, 0xf59f00, 0xf08c00,
        0xe67700,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectTokens {
    pub bg: Hsla,
    pub fg: Hsla,
    pub placeholder: Hsla,
    pub border: Hsla,
    pub border_focus: Hsla,
    pub focus_ring: Hsla,
    pub disabled_bg: Hsla,
    pub dropdown_bg: Hsla,
    pub dropdown_border: Hsla,
    pub option_fg: Hsla,
    pub option_hover_bg: Hsla,
    pub option_selected_bg: Hsla,
    pub tag_bg: Hsla,
    pub tag_fg: Hsla,
    pub highlight_bg: Hsla,
    pub highlight_fg: Hsla,
    pub icon: Hsla,
    pub label: Hsla,
    pub label_size: Pixels,
    pub label_weight: FontWeight,
    pub highlight_weight: FontWeight,
    pub root_gap: Pixels,
    pub text_size: Pixels,
    pub control_padding_x: Pixels,
    pub control_padding_y: Pixels,
    pub control_radius: Pixels,
    pub control_min_height: Pixels,
    pub icon_size: Pixels,
    pub option_size: Pixels,
    pub option_padding_x: Pixels,
    pub option_padding_y: Pixels,
    pub option_check_size: Pixels,
    pub dropdown_padding: Pixels,
    pub dropdown_radius: Pixels,
    pub dropdown_min_width: Pixels,
    pub dropdown_max_height: Pixels,
    pub dropdown_anchor_offset: Pixels,
    pub search_padding: Pixels,
    pub search_icon_size: Pixels,
    pub search_caret_width: Pixels,
    pub tag_size: Pixels,
    pub tag_padding_x: Pixels,
    pub tag_padding_y: Pixels,
    pub tag_gap: Pixels,
    pub tag_remove_size: Pixels,
}

impl SelectTokens {
    fn metrics_with(colors: SelectColors) -> Self {
        Self {
            bg: colors.bg,
            fg: colors.fg,
            placeholder: colors.placeholder,
            border: colors.border,
            border_focus: colors.border_focus,
            focus_ring: colors.border_focus.opacity(0.3),
            disabled_bg: colors.disabled_bg,
            dropdown_bg: colors.dropdown_bg,
            dropdown_border: colors.dropdown_border,
            option_fg: colors.option_fg,
            option_hover_bg: colors.option_hover_bg,
            option_selected_bg: colors.option_selected_bg,
            tag_bg: colors.tag_bg,
            tag_fg: colors.tag_fg,
            highlight_bg: colors.highlight_bg,
            highlight_fg: colors.highlight_fg,
            icon: colors.icon,
            label: colors.label,
            label_size: px(14.0),
            label_weight: FontWeight::MEDIUM,
            highlight_weight: FontWeight::MEDIUM,
            root_gap: px(8.0),
            text_size: px(14.0),
            control_padding_x: px(8.0),
            control_padding_y: px(6.0),
            control_radius: px(4.0),
            control_min_height: px(36.0),
            icon_size: px(16.0),
            option_size: px(14.0),
            option_padding_x: px(16.0),
            option_padding_y: px(8.0),
            option_check_size: px(14.0),
            dropdown_padding: px(4.0),
            dropdown_radius: px(4.0),
            dropdown_min_width: px(160.0),
            dropdown_max_height: px(280.0),
            dropdown_anchor_offset: px(4.0),
            search_padding: px(8.0),
            search_icon_size: px(16.0),
            search_caret_width: px(1.0),
            tag_size: px(13.0),
            tag_padding_x: px(8.0),
            tag_padding_y: px(2.0),
            tag_gap: px(6.0),
            tag_remove_size: px(16.0),
        }
    }
}

struct SelectColors {
    bg: Hsla,
    fg: Hsla,
    placeholder: Hsla,
    border: Hsla,
    border_focus: Hsla,
    disabled_bg: Hsla,
    dropdown_bg: Hsla,
    dropdown_border: Hsla,
    option_fg: Hsla,
    option_hover_bg: Hsla,
    option_selected_bg: Hsla,
    tag_bg: Hsla,
    tag_fg: Hsla,
    highlight_bg: Hsla,
    highlight_fg: Hsla,
    icon: Hsla,
    label: Hsla,
}

impl SelectColors {
    fn for_scheme(scheme: ColorScheme) -> Self {
        use palette::{BLUE, DARK, GRAY, YELLOW};

        match scheme {
            ColorScheme::Light => Self {
                bg: hex(0xffffff),
                fg: hex(DARK[9]),
                placeholder: hex(GRAY[6]),
                border: hex(GRAY[4]),
                border_focus: hex(BLUE[6]),
                disabled_bg: hex(GRAY[2]),
                dropdown_bg: hex(0xffffff),
                dropdown_border: hex(GRAY[3]),
                option_fg: hex(DARK[9]),
                option_hover_bg: hex(GRAY[1]),
                option_selected_bg: hex(BLUE[0]),
                tag_bg: hex(GRAY[1]),
                tag_fg: hex(GRAY[7]),
                highlight_bg: hex(YELLOW[2]),
                highlight_fg: hex(DARK[9]),
                icon: hex(GRAY[7]),
                label: hex(DARK[8]),
            },
            ColorScheme::Dark => Self {
                bg: hex(DARK[8]),
                fg: hex(GRAY[0]),
                placeholder: hex(DARK[2]),
                border: hex(DARK[4]),
                border_focus: hex(BLUE[5]),
                disabled_bg: hex(DARK[6]),
                dropdown_bg: hex(DARK[8]),
                dropdown_border: hex(DARK[4]),
                option_fg: hex(GRAY[0]),
                option_hover_bg: hex(DARK[7]),
                option_selected_bg: hex(BLUE[9]),
                tag_bg: hex(DARK[6]),
                tag_fg: hex(GRAY[2]),
                highlight_bg: hex(YELLOW[9]).opacity(0.45),
                highlight_fg: hex(GRAY[0]),
                icon: hex(GRAY[4]),
                label: hex(GRAY[1]),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub color_scheme: ColorScheme,
    pub select: SelectTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_scheme(ColorScheme::Light)
    }
}

impl Theme {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        Self {
            color_scheme: scheme,
            select: SelectTokens::metrics_with(SelectColors::for_scheme(scheme)),
        }
    }

    pub fn light() -> Self {
        Self::for_scheme(ColorScheme::Light)
    }

    pub fn dark() -> Self {
        Self::for_scheme(ColorScheme::Dark)
    }

    pub fn with_select(mut self, configure: impl FnOnce(SelectTokens) -> SelectTokens) -> Self {
        self.select = configure(self.select);
        self
    }
}
