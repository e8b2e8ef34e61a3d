#[cfg(test)]
mod tests {
    use crate::option_renderer::{DISABLED_OPTION_CLASS, FOCUSED_OPTION_CLASS, OPTION_CLASS};
    use crate::theme::{base_style, option_style, selection_bg, theme_from_name};
    use ratatui::style::{Color, Modifier};

    #[test]
    fn resolves_known_themes() {
        assert_eq!(theme_from_name("Dark").unwrap().bg, Color::Black);
        assert_eq!(theme_from_name(" light ").unwrap().bg, Color::White);
        assert!(theme_from_name("solarized").is_err());
    }

    #[test]
    fn option_style_follows_classes() {
        let theme = theme_from_name("dark").unwrap();
        assert_eq!(option_style(&theme, &[OPTION_CLASS]), base_style(&theme));
        let focused = option_style(&theme, &[OPTION_CLASS, FOCUSED_OPTION_CLASS]);
        assert_eq!(focused.bg, Some(selection_bg(theme.bg)));
        let disabled = option_style(&theme, &[OPTION_CLASS, DISABLED_OPTION_CLASS]);
        assert_eq!(disabled.fg, Some(theme.muted));
        assert!(disabled.add_modifier.contains(Modifier::DIM));
    }
}
