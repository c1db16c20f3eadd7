use ratatui::style::Color;

use mathdrill::session::Theme;

/// Terminal colours for one mascot theme, as hex strings.
#[derive(Clone, Debug)]
pub struct Palette {
    pub bg: &'static str,
    pub fg: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub header_bg: &'static str,
    pub header_fg: &'static str,
    pub text_pending: &'static str,
    pub bar_filled: &'static str,
    pub bar_empty: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
}

static PANDA: Palette = Palette {
    bg: "#1b1b1d",
    fg: "#f2f2f2",
    accent: "#9bd37a",
    border: "#5a5a5e",
    header_bg: "#f2f2f2",
    header_fg: "#1b1b1d",
    text_pending: "#8a8a8f",
    bar_filled: "#9bd37a",
    bar_empty: "#2e2e31",
    success: "#7fd36b",
    error: "#ef6b73",
    warning: "#f5d76e",
};

static SQUIRTLE: Palette = Palette {
    bg: "#0d2436",
    fg: "#e6f4fb",
    accent: "#5cc8f0",
    border: "#2f6d8c",
    header_bg: "#5cc8f0",
    header_fg: "#0d2436",
    text_pending: "#7ea6ba",
    bar_filled: "#f0b35c",
    bar_empty: "#173a52",
    success: "#6fe3a5",
    error: "#ff7a7a",
    warning: "#f0b35c",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Panda => &PANDA,
            Theme::Squirtle => &SQUIRTLE,
        }
    }

    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(self.fg) }
    pub fn accent(&self) -> Color { Self::parse_color(self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(self.header_fg) }
    pub fn text_pending(&self) -> Color { Self::parse_color(self.text_pending) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(self.bar_empty) }
    pub fn success(&self) -> Color { Self::parse_color(self.success) }
    pub fn error(&self) -> Color { Self::parse_color(self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(self.warning) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(Palette::parse_color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(Palette::parse_color("zzzzzz"), Color::White);
        assert_eq!(Palette::parse_color("#fff"), Color::White);
    }

    #[test]
    fn test_palettes_differ_by_theme() {
        let panda = Palette::for_theme(Theme::Panda);
        let squirtle = Palette::for_theme(Theme::Squirtle);
        assert_ne!(panda.bg(), squirtle.bg());
    }
}
