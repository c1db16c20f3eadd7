use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use mathdrill::session::messages;
use mathdrill::store::AchievementRecord;

use crate::ui::theme::Palette;

/// Achievements, newest first. Two lines per record.
pub struct AchievementList<'a> {
    records: &'a [AchievementRecord],
    step: u32,
    palette: &'a Palette,
}

impl<'a> AchievementList<'a> {
    pub fn new(records: &'a [AchievementRecord], step: u32, palette: &'a Palette) -> Self {
        Self {
            records,
            step,
            palette,
        }
    }
}

impl Widget for AchievementList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = self.palette;

        let block = Block::bordered()
            .title(" Achievements ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            Paragraph::new(Span::styled(
                messages::no_achievements(self.step),
                Style::default().fg(colors.text_pending()),
            ))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let visible = (inner.height / 2) as usize;
        let lines: Vec<Line> = self
            .records
            .iter()
            .take(visible)
            .flat_map(|r| {
                [
                    Line::from(Span::styled(
                        r.summary(),
                        Style::default()
                            .fg(colors.fg())
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  Date: {}", r.date),
                        Style::default().fg(colors.text_pending()),
                    )),
                ]
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
