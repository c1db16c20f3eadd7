use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use mathdrill::session::{Feedback, FlashKind, SessionState};

use crate::ui::theme::Palette;

const SPARKLES: [&str; 4] = ["\u{2728}", "\u{1f389}", "\u{2b50}", "\u{1f38a}"];

pub struct QuestionCard<'a> {
    state: &'a SessionState,
    flash: Option<FlashKind>,
    motivation: Option<&'a str>,
    confetti_frame: Option<u64>,
    palette: &'a Palette,
}

impl<'a> QuestionCard<'a> {
    pub fn new(
        state: &'a SessionState,
        flash: Option<FlashKind>,
        motivation: Option<&'a str>,
        confetti_frame: Option<u64>,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            flash,
            motivation,
            confetti_frame,
            palette,
        }
    }
}

/// A row of sparkles that shifts every frame.
fn confetti_line(frame: u64, width: u16) -> String {
    let slots = (width / 3).max(1) as u64;
    (0..slots)
        .map(|i| {
            if (i + frame) % 3 == 0 {
                SPARKLES[((i + frame / 2) % SPARKLES.len() as u64) as usize]
            } else {
                "  "
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = self.palette;

        let question_bg = match self.flash {
            Some(FlashKind::Correct) => colors.success(),
            Some(FlashKind::Incorrect) => colors.error(),
            None => colors.bg(),
        };
        let question_fg = if self.flash.is_some() {
            colors.bg()
        } else {
            colors.fg()
        };

        let block = Block::bordered()
            .title(format!(" {} ", self.state.mode.label()))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        if let Some(frame) = self.confetti_frame {
            Paragraph::new(confetti_line(frame, inner.width))
                .alignment(Alignment::Center)
                .render(layout[0], buf);
        }

        let question = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.state.current_problem.display_text.as_str(),
                Style::default()
                    .fg(question_fg)
                    .bg(question_bg)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        question.render(layout[1], buf);

        let cursor = if self.state.awaiting_advance { "" } else { "_" };
        let input_line = Line::from(vec![
            Span::styled("Answer: ", Style::default().fg(colors.text_pending())),
            Span::styled(
                format!("{}{cursor}", self.state.input),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(input_line)
            .alignment(Alignment::Center)
            .render(layout[2], buf);

        if let Some(feedback) = &self.state.feedback {
            let color = match feedback {
                Feedback::Correct { .. } => colors.success(),
                Feedback::Incorrect { .. } | Feedback::InvalidInput { .. } => colors.error(),
            };
            Paragraph::new(Line::from(Span::styled(
                feedback.message(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .render(layout[3], buf);
        }

        if let Some(text) = self.motivation {
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .render(layout[4], buf);
        }

        if let Some(next) = self.state.queued_problem() {
            Paragraph::new(Line::from(vec![
                Span::styled("Next up: ", Style::default().fg(colors.text_pending())),
                Span::styled(next.display_text.as_str(), Style::default().fg(colors.fg())),
            ]))
            .alignment(Alignment::Center)
            .render(layout[5], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_moves_between_frames() {
        assert_ne!(confetti_line(0, 30), confetti_line(1, 30));
        assert!(!confetti_line(0, 0).is_empty());
    }
}
