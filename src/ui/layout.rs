use ratatui::layout::Rect;

/// Height of the bottom bar: shadow row plus action row.
pub const BOTTOM_BAR_HEIGHT: u16 = 2;

/// Split the frame into the scrollable main region and the persistent
/// bottom bar anchored at the bottom edge.
pub fn screen_regions(area: Rect) -> (Rect, Rect) {
    let bar_height = BOTTOM_BAR_HEIGHT.min(area.height);
    let bar = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(bar_height),
        width: area.width,
        height: bar_height,
    };
    let main = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(bar_height),
    };
    (main, bar)
}

/// Cap the region at `max_width` columns and center it horizontally.
/// On narrow terminals this is the identity.
pub fn responsive_width(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_anchored_to_the_bottom() {
        let area = Rect::new(0, 0, 80, 24);
        let (main, bar) = screen_regions(area);
        assert_eq!(bar.y, 22);
        assert_eq!(bar.height, 2);
        assert_eq!(main.height, 22);
        assert_eq!(main.y, 0);
    }

    #[test]
    fn tiny_frame_gives_everything_to_the_bar() {
        let area = Rect::new(0, 0, 80, 1);
        let (main, bar) = screen_regions(area);
        assert_eq!(bar.height, 1);
        assert_eq!(main.height, 0);
    }

    #[test]
    fn wide_terminal_centers_content() {
        let area = Rect::new(0, 0, 120, 24);
        let region = responsive_width(area, 80);
        assert_eq!(region.width, 80);
        assert_eq!(region.x, 20);
    }

    #[test]
    fn narrow_terminal_uses_full_width() {
        let area = Rect::new(0, 0, 60, 24);
        let region = responsive_width(area, 80);
        assert_eq!(region.width, 60);
        assert_eq!(region.x, 0);
    }
}
