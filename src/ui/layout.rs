use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Full,    // enough room for card history, progress bar, keymap footer
    Compact, // short terminals: card + input only
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.height >= 16 {
            LayoutTier::Full
        } else {
            LayoutTier::Compact
        }
    }

    pub fn show_progress_bar(self) -> bool {
        self == LayoutTier::Full
    }

    pub fn show_history(self) -> bool {
        self == LayoutTier::Full
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
            tier,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let target_w = (area.width.saturating_mul(percent_x.min(100)) / 100).min(area.width);
    let target_h = (area.height.saturating_mul(percent_y.min(100)) / 100).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_height() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 80, 24)), LayoutTier::Full);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 80, 10)), LayoutTier::Compact);
    }

    #[test]
    fn test_centered_rect_is_contained() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, area);
        assert!(inner.x >= area.x && inner.y >= area.y);
        assert!(inner.right() <= area.right() && inner.bottom() <= area.bottom());
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
    }
}
