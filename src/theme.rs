use crate::error::ConfigError;
use crate::option_renderer::{DISABLED_OPTION_CLASS, FOCUSED_OPTION_CLASS};
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTheme {
    pub bg: Color,
    pub fg: Option<Color>,
    pub accent: Color,
    pub muted: Color,
}

impl Default for RenderTheme {
    fn default() -> Self {
        dark_theme()
    }
}

pub fn dark_theme() -> RenderTheme {
    RenderTheme {
        bg: Color::Black,
        fg: None,
        accent: Color::Cyan,
        muted: Color::DarkGray,
    }
}

pub fn light_theme() -> RenderTheme {
    RenderTheme {
        bg: Color::White,
        fg: Some(Color::Black),
        accent: Color::Blue,
        muted: Color::Gray,
    }
}

pub fn theme_from_name(name: &str) -> Result<RenderTheme, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "dark" => Ok(dark_theme()),
        "light" => Ok(light_theme()),
        _ => Err(ConfigError::Invalid(format!("theme 不支持 {name}"))),
    }
}

pub fn base_fg(theme: &RenderTheme) -> Color {
    theme.fg.unwrap_or(Color::White)
}

pub fn base_style(theme: &RenderTheme) -> Style {
    Style::default().bg(theme.bg).fg(base_fg(theme))
}

pub fn focus_border_style(theme: &RenderTheme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(base_fg(theme))
    }
}

pub fn selection_bg(bg: Color) -> Color {
    match bg {
        Color::White => Color::Gray,
        _ => Color::DarkGray,
    }
}

pub fn placeholder_style(theme: &RenderTheme) -> Style {
    base_style(theme).fg(theme.muted)
}

/// 行样式由 class 名决定：基础样式，叠加聚焦背景与禁用的暗淡效果。
pub fn option_style(theme: &RenderTheme, class_names: &[&str]) -> Style {
    let mut style = base_style(theme);
    if class_names.contains(&FOCUSED_OPTION_CLASS) {
        style = style.bg(selection_bg(theme.bg));
    }
    if class_names.contains(&DISABLED_OPTION_CLASS) {
        style = style.fg(theme.muted).add_modifier(Modifier::DIM);
    }
    style
}
