use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Palette;

/// Correct answers this sitting against the next achievement threshold.
pub struct ProgressBar<'a> {
    pub label: String,
    pub done: u32,
    pub goal: u32,
    pub palette: &'a Palette,
}

impl<'a> ProgressBar<'a> {
    /// Thresholds already on record are skipped, so after a reload the goal
    /// is the first multiple of `step` above `last_persisted`.
    pub fn toward_next_milestone(
        correct: u32,
        last_persisted: u32,
        step: u32,
        palette: &'a Palette,
    ) -> Self {
        let step = step.max(1);
        let reached = (correct / step * step).max(last_persisted);
        let next = reached + step;
        Self {
            label: format!("Next achievement: {next}"),
            done: correct,
            goal: next,
            palette,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (self.done as f64 / self.goal as f64).clamp(0.0, 1.0)
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = self.palette;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio() * inner.width as f64) as u16;
        let label = format!("{}/{}", self.done, self.goal);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}
