//! Input normalisation and click targets.
//!
//! Keyboard events arrive as [`InputEvent`]s; mouse and touch taps are
//! hit-tested against targets registered during the last render and arrive
//! as [`InputEvent::Click`] with a semantic action id.

use ratzilla::ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable character.
    Key(char),
    /// A tap on a registered target. Each page defines its own action ids.
    Click(u16),
    Up,
    Down,
    Left,
    Right,
    Tab,
    Backspace,
    Enter,
    Esc,
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Targets registered by the render pass, read back by the mouse handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a one-row target spanning `area`'s width. Rows outside
    /// `area` are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Register targets for a row of labels laid out left to right.
    ///
    /// `widths` holds `(display_width, action_id)` per label. Each target
    /// covers its label plus half of the gap on either side; the first and
    /// last extend to the edges of `area`.
    pub fn register_row_of_labels(&mut self, widths: &[(u16, u16)], gap: u16, area: Rect) {
        if widths.is_empty() || area.width == 0 {
            return;
        }

        let mut starts = Vec::with_capacity(widths.len());
        let mut cursor = 0u16;
        for (i, &(w, _)) in widths.iter().enumerate() {
            if i > 0 {
                cursor += gap;
            }
            starts.push(cursor);
            cursor += w;
        }

        let last = widths.len() - 1;
        for (i, &(w, action_id)) in widths.iter().enumerate() {
            let left = if i == 0 { 0 } else { starts[i] - gap / 2 - gap % 2 };
            let right = if i == last {
                area.width
            } else {
                starts[i] + w + gap / 2
            };
            let width = right.min(area.width).saturating_sub(left);
            if width > 0 {
                self.add_click_target(
                    Rect::new(area.x + left, area.y, width, area.height.max(1)),
                    action_id,
                );
            }
        }
    }

    /// Action id of the topmost target containing the cell, if any.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }
}

/// Phones in portrait get the collapsed navigation and single-column forms.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Pixel offset inside the grid container → cell index along one axis.
pub fn pixel_to_cell(offset_px: f64, extent_px: f64, cells: u16) -> Option<u16> {
    if extent_px <= 0.0 || cells == 0 || offset_px < 0.0 {
        return None;
    }
    let cell = (offset_px / (extent_px / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}
