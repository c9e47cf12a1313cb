//! Scroll-window bookkeeping for the dropdown overlay.
//!
//! Tracks the first visible row of a list so that the active row stays inside
//! the rendered window as navigation moves it around.

/// A window of `visible` rows over a list, starting at `offset`.
#[derive(Debug, Clone, Copy)]
pub struct ScrollWindow {
    offset: usize,
    visible: usize,
}

impl ScrollWindow {
    pub fn new(visible: usize) -> Self {
        Self {
            offset: 0,
            visible: visible.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
    }

    /// Reset the window to the top of the list.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll just enough to bring `row` into the window.
    ///
    /// `count` is the list length; the offset is also clamped so the window
    /// never starts past the end of a shrunken list.
    pub fn ensure_visible(&mut self, row: usize, count: usize) {
        if count == 0 {
            self.offset = 0;
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.visible {
            self.offset = row + 1 - self.visible;
        }
        let max_offset = count.saturating_sub(self.visible);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top() {
        let w = ScrollWindow::new(5);
        assert_eq!(w.offset(), 0);
        assert_eq!(w.visible(), 5);
    }

    #[test]
    fn visible_is_at_least_one() {
        let w = ScrollWindow::new(0);
        assert_eq!(w.visible(), 1);
    }

    #[test]
    fn scrolls_down_to_follow_row() {
        let mut w = ScrollWindow::new(3);
        w.ensure_visible(4, 10); // rows 2..=4 visible
        assert_eq!(w.offset(), 2);
    }

    #[test]
    fn scrolls_up_to_follow_row() {
        let mut w = ScrollWindow::new(3);
        w.ensure_visible(8, 10);
        w.ensure_visible(1, 10);
        assert_eq!(w.offset(), 1);
    }

    #[test]
    fn row_already_visible_is_noop() {
        let mut w = ScrollWindow::new(5);
        w.ensure_visible(3, 10);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn clamps_to_shrunken_list() {
        let mut w = ScrollWindow::new(3);
        w.ensure_visible(9, 10);
        w.ensure_visible(1, 2);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn empty_list_resets_offset() {
        let mut w = ScrollWindow::new(3);
        w.ensure_visible(9, 10);
        w.ensure_visible(0, 0);
        assert_eq!(w.offset(), 0);
    }
}
