use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::catalog::ScriptKind;
use crate::ui::recent::{RecentItem, Status};
use crate::ui::theme::Theme;

const CARD_WIDTH: u16 = 10;

/// The row of cards: the current glyph plus recently answered cards on
/// their way out. Demoted cards show their romaji beneath the glyph,
/// colored by how they were answered.
pub struct CardRow<'a> {
    items: &'a [RecentItem],
    script: ScriptKind,
    revealed: bool,
    shaking: bool,
    show_history: bool,
    theme: &'a Theme,
}

impl<'a> CardRow<'a> {
    pub fn new(items: &'a [RecentItem], script: ScriptKind, theme: &'a Theme) -> Self {
        Self {
            items,
            script,
            revealed: false,
            shaking: false,
            show_history: true,
            theme,
        }
    }

    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    pub fn shaking(mut self, shaking: bool) -> Self {
        self.shaking = shaking;
        self
    }

    pub fn show_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }
}

/// Pick the items that fit: the newest card is always last, so keep the
/// tail of the list. Without history only the newest card is shown.
fn take_visible(items: &[RecentItem], show_history: bool, max: usize) -> &[RecentItem] {
    if items.is_empty() || max == 0 {
        return &[];
    }
    let count = if show_history {
        items.len().min(max)
    } else {
        1
    };
    &items[items.len() - count..]
}

impl Widget for CardRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let max = (area.width / CARD_WIDTH) as usize;
        let visible = take_visible(self.items, self.show_history, max);
        if visible.is_empty() {
            return;
        }

        let total = CARD_WIDTH * visible.len() as u16;
        let left = area.x + (area.width.saturating_sub(total)) / 2;
        let top = area.y + area.height.saturating_sub(2) / 2;

        for (i, item) in visible.iter().enumerate() {
            let is_current = item.status == Status::Current;

            let glyph_style = if is_current {
                let fg = if self.shaking {
                    colors.error()
                } else {
                    colors.fg()
                };
                Style::default().fg(fg).add_modifier(Modifier::BOLD)
            } else {
                let fg = match (item.status, item.correct) {
                    (Status::Removing, _) => colors.text_pending(),
                    (_, Some(true)) => colors.text_correct(),
                    (_, Some(false)) => colors.text_incorrect(),
                    (_, None) => colors.text_pending(),
                };
                Style::default().fg(fg)
            };

            // The current card shows its romaji only when revealed;
            // demoted cards always show theirs.
            let glyph = if is_current && self.revealed {
                item.entry.romaji
            } else {
                item.entry.glyph(self.script)
            };
            let caption = if is_current {
                String::new()
            } else {
                item.entry.romaji.to_string()
            };

            let lines = vec![
                Line::from(Span::styled(glyph, glyph_style)),
                Line::from(Span::styled(
                    caption,
                    Style::default().fg(colors.text_pending()),
                )),
            ];

            let card_area = Rect::new(
                left + i as u16 * CARD_WIDTH,
                top,
                CARD_WIDTH,
                2.min(area.height),
            );
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(card_area, buf);
        }
    }
}
