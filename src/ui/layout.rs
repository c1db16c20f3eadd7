use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥80 cols: question + sidebar with score and achievements
    Narrow, // <80 cols: question only, score folded into the header
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 80 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub sidebar: Option<Rect>,
    pub progress: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        let (main, sidebar) = if tier.show_sidebar() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(vertical[1]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (vertical[1], None)
        };

        Self {
            header: vertical[0],
            main,
            sidebar,
            progress: vertical[2],
            footer: vertical[3],
            tier,
        }
    }
}

/// Footer hints, indented and wrapped greedily to `width` columns.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for hint in hints {
        if !current.is_empty() && current.chars().count() + 2 + hint.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        current.push_str("  ");
        current.push_str(hint);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Rectangle of `width` x `height` centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let left = area.x.saturating_add(area.width.saturating_sub(w) / 2);
    let top = area.y.saturating_add(area.height.saturating_sub(h) / 2);
    Rect::new(left, top, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_by_width() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 120, 30)), LayoutTier::Wide);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 60, 30)), LayoutTier::Narrow);
    }

    #[test]
    fn test_sidebar_only_when_wide() {
        assert!(AppLayout::new(Rect::new(0, 0, 100, 30), 1).sidebar.is_some());
        assert!(AppLayout::new(Rect::new(0, 0, 50, 30), 1).sidebar.is_none());
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[Enter] submit", "[m] multiply", "[d] divide"], 32);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  [Enter] submit"));
        assert_eq!(lines[1], "  [d] divide");
    }

    #[test]
    fn test_pack_hint_lines_empty() {
        assert!(pack_hint_lines(&[], 40).is_empty());
        assert!(pack_hint_lines(&["x"], 0).is_empty());
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(20, 4, area);
        assert_eq!(r, Rect::new(10, 3, 20, 4));
        let clipped = centered_rect(80, 40, area);
        assert_eq!(clipped, area);
    }
}
