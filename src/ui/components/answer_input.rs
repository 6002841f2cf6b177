use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// The typed romaji buffer with a block cursor, or a placeholder while
/// empty.
pub struct AnswerInput<'a> {
    value: &'a str,
    theme: &'a Theme,
}

impl<'a> AnswerInput<'a> {
    pub fn new(value: &'a str, theme: &'a Theme) -> Self {
        Self { value, theme }
    }
}

impl Widget for AnswerInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" answer ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.value.is_empty() {
            Line::from(vec![
                Span::styled(
                    " ",
                    Style::default()
                        .fg(colors.text_cursor_fg())
                        .bg(colors.text_cursor_bg()),
                ),
                Span::styled(
                    " type the romaji...",
                    Style::default().fg(colors.text_pending()),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.value, Style::default().fg(colors.fg())),
                Span::styled(
                    " ",
                    Style::default()
                        .fg(colors.text_cursor_fg())
                        .bg(colors.text_cursor_bg()),
                ),
            ])
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
