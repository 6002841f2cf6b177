use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

/// Single-line fill bar for catalog progress, captioned "answered/total".
/// Any progress at all shows at least one filled cell.
pub struct ProgressBar<'a> {
    answered: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(answered: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            answered: answered.min(total),
            total,
            theme,
        }
    }
}

fn fill_width(answered: usize, total: usize, width: u16) -> u16 {
    if total == 0 || width == 0 || answered == 0 {
        return 0;
    }
    let exact = (answered as f64 / total as f64 * width as f64) as u16;
    exact.clamp(1, width)
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let y = area.y;
        let filled = fill_width(self.answered, self.total, area.width);
        for x in area.x..area.x + area.width {
            let style = if x < area.x + filled {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, y)].set_style(style);
        }

        let caption = format!("{}/{}", self.answered, self.total);
        let caption_x = area.x + (area.width.saturating_sub(caption.len() as u16)) / 2;
        buf.set_string(caption_x, y, &caption, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_empty_session_is_zero() {
        assert_eq!(fill_width(0, 46, 40), 0);
    }

    #[test]
    fn test_fill_width_any_progress_shows_at_least_one_cell() {
        assert_eq!(fill_width(1, 46, 40), 1);
        assert!(fill_width(1, 46, 200) >= 1);
    }

    #[test]
    fn test_fill_width_complete_fills_the_row() {
        assert_eq!(fill_width(46, 46, 40), 40);
    }

    #[test]
    fn test_fill_width_degenerate_inputs() {
        assert_eq!(fill_width(3, 0, 40), 0);
        assert_eq!(fill_width(3, 46, 0), 0);
    }

    #[test]
    fn test_answered_is_clamped_to_total() {
        let theme = Theme::default();
        let bar = ProgressBar::new(50, 46, &theme);
        assert_eq!(bar.answered, 46);
    }
}
