use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use mathdrill::session::SessionState;

use crate::ui::theme::Palette;

pub struct Scoreboard<'a> {
    state: &'a SessionState,
    palette: &'a Palette,
}

impl<'a> Scoreboard<'a> {
    pub fn new(state: &'a SessionState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for Scoreboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = self.palette;

        let block = Block::bordered()
            .title(" Score ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default().fg(colors.text_pending());
        let value = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);
        let fast = if self.state.fast_mode { "on" } else { "off" };

        let lines = vec![
            Line::from(vec![
                Span::styled("  Correct:  ", label),
                Span::styled(self.state.correct_count.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("  Total:    ", label),
                Span::styled(self.state.total_count.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("  Accuracy: ", label),
                Span::styled(format!("{:.0}%", self.state.accuracy()), value),
            ]),
            Line::from(vec![
                Span::styled("  Fast:     ", label),
                Span::styled(fast, Style::default().fg(colors.fg())),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
