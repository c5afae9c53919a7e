//! Tui theme

use std::sync::LazyLock;

use palette::Hsl;
use ratatui::style::Color;

pub struct Theme {
    pub palette: ThemePalette,
}

pub struct ThemePalette {
    pub ui_text: Color,
    pub ui_highlight: Color,
    pub ui_selected: Color,
    pub ui_disabled: Color,

    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub countdown: Color,

    pub rank_top: Color,
    pub page_info: Color,
}

pub static THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    palette: ThemePalette {
        ui_text: Color::from_hsl(Hsl::new(0.0, 0.0, 0.8)),
        ui_highlight: Color::White,
        ui_selected: Color::from_hsl(Hsl::new(115.0, 1.0, 0.5)),
        ui_disabled: Color::from_hsl(Hsl::new(0.0, 0.0, 0.5)),

        accent: Color::from_hsl(Hsl::new(220.0, 1.0, 0.6)),
        success: Color::from_hsl(Hsl::new(115.0, 0.7, 0.4)),
        danger: Color::from_hsl(Hsl::new(0.0, 1.0, 0.5)),
        countdown: Color::from_hsl(Hsl::new(40.0, 1.0, 0.5)),

        rank_top: Color::from_hsl(Hsl::new(55.0, 1.0, 0.55)),
        page_info: Color::Gray,
    },
});
