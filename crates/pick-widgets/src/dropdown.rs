//! Render-only dropdown overlay for an option list.
//!
//! The overlay draws rows and a highlight; it holds no list state and handles
//! no input. [`Select`](crate::select::Select) owns the options, the active
//! row, and the scroll window, and passes them in per frame.

use crate::options::OptionData;
use crate::text;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

/// Position of the overlay relative to its anchor area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Render above the anchor area.
    Above,
    /// Render below the anchor area (default).
    #[default]
    Below,
}

/// Style configuration for the overlay.
#[derive(Debug, Clone)]
pub struct DropdownStyle {
    /// Style for inactive rows.
    pub item: Style,
    /// Style for the active (highlighted) row.
    pub active_item: Style,
    /// Style for the description column.
    pub description: Style,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            active_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Where an overlay actually landed on screen.
///
/// `area` is the full overlay including any border chrome; `inner` is the row
/// region. [`Select`](crate::select::Select) keeps the last geometry for
/// outside-press hit testing and for mapping a click to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub area: Rect,
    pub inner: Rect,
}

/// A dropdown overlay anchored above or below a trigger area.
#[derive(Debug, Clone, Default)]
pub struct DropdownView {
    position: Position,
    style: DropdownStyle,
    block: Option<Block<'static>>,
}

impl DropdownView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position relative to the anchor.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) for the overlay.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render `rows` into an overlay anchored at `anchor`.
    ///
    /// `active` is the highlighted position within `rows`, `offset` the first
    /// visible row, and `max_visible` the row budget. Returns the geometry
    /// that was drawn, or `None` when there was no room to draw anything.
    pub fn render(
        &self,
        frame: &mut Frame,
        anchor: Rect,
        rows: &[&OptionData],
        active: Option<usize>,
        offset: usize,
        max_visible: usize,
    ) -> Option<OverlayGeometry> {
        if rows.is_empty() {
            return None;
        }

        let visible_count = rows.len().min(max_visible.max(1));
        let chrome = if self.block.is_some() { 2 } else { 0 };
        let height = visible_count as u16 + chrome;

        let area = match self.position {
            Position::Above => {
                let y = anchor.y.saturating_sub(height);
                Rect::new(anchor.x, y, anchor.width, height.min(anchor.y))
            }
            Position::Below => Rect::new(anchor.x, anchor.y + anchor.height, anchor.width, height),
        };

        if area.height == 0 || area.width < 4 {
            return None;
        }

        frame.render_widget(Clear, area);

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        for (row, opt) in rows.iter().enumerate().skip(offset).take(visible_count) {
            let i = row - offset;
            if i as u16 >= inner.height {
                break;
            }
            let row_area = Rect {
                y: inner.y + i as u16,
                height: 1,
                ..inner
            };

            let is_active = active == Some(row);
            let style = if is_active {
                self.style.active_item
            } else {
                self.style.item
            };
            let prefix = if is_active { "▸ " } else { "  " };

            let budget = row_area.width.saturating_sub(2) as usize;
            let label = text::truncate(&opt.label, budget, "…");
            let mut spans = vec![Span::raw(prefix), Span::styled(label.clone(), style)];

            if let Some(ref desc) = opt.description {
                let remaining = budget.saturating_sub(text::display_width(&label) + 2);
                if remaining > 1 {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        text::truncate(desc, remaining, "…"),
                        self.style.description,
                    ));
                }
            }

            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }

        Some(OverlayGeometry { area, inner })
    }
}
