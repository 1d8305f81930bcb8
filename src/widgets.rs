//! Clickable building blocks shared by the pages.
//!
//! - [`LinkBar`]: a single row of labelled links (nav bar, category filters).
//! - [`ClickableList`]: lines paired with the action fired when tapped.
//! - [`field_line`]: one form row (label, value, focus marker).

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── LinkBar ────────────────────────────────────────────────────

pub struct LinkBar<'a> {
    links: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> LinkBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            links: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn link(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.links.push((label.into(), style, action_id));
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Draw the bar and register one target per link.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let gap = Line::from(self.separator).width() as u16;
        let mut spans = Vec::new();
        let mut widths = Vec::new();

        for (i, (label, style, action_id)) in self.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {label} ");
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        let paragraph = match self.block {
            Some(block) => Paragraph::new(Line::from(spans)).block(block),
            None => Paragraph::new(Line::from(spans)),
        };
        f.render_widget(paragraph, area);

        // Full outer height so taps on the border still count.
        let hit_area = Rect::new(inner.x, area.y, inner.width, area.height.max(1));
        cs.register_row_of_labels(&widths, gap, hit_area);
    }
}

/// Highlighted when active, plain otherwise.
pub fn link_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines annotated with click actions as they are pushed; targets follow
/// their line wherever it ends up.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register targets for the clickable lines visible in `area`.
    ///
    /// `top_offset`/`bottom_offset` are rows taken by borders, `scroll` is
    /// the number of lines scrolled out at the top. Lines never wrap.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: usize,
    ) {
        let first_row = area.y + top_offset;
        let end_row = area.y + area.height.saturating_sub(bottom_offset);
        for &(idx, action_id) in &self.actions {
            if idx < scroll {
                continue;
            }
            let row = first_row as usize + (idx - scroll);
            if row >= end_row as usize {
                continue;
            }
            cs.add_row_target(area, row as u16, action_id);
        }
    }
}

/// Scroll offset that keeps `row` on screen, along with the row above it
/// (a section header, usually). `viewport == 0` means not laid out yet.
pub fn scroll_to_show(row: Option<usize>, scroll: usize, viewport: usize, total: usize) -> usize {
    if viewport == 0 {
        return scroll;
    }
    let mut scroll = scroll.min(total.saturating_sub(viewport));
    if let Some(row) = row {
        let top = row.saturating_sub(1);
        if top < scroll {
            scroll = top;
        } else if row >= scroll + viewport {
            scroll = row + 1 - viewport;
        }
    }
    scroll
}

// ── Form rows ──────────────────────────────────────────────────

/// Width of the label column in wide layouts.
pub const LABEL_WIDTH: usize = 18;

/// A form row: `▶ Label ........ value`, with select fields drawn as `‹ value ›`.
pub fn field_line(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    is_select: bool,
    narrow: bool,
) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_text = if narrow {
        format!("{label}: ")
    } else {
        format!("{label:<LABEL_WIDTH$}")
    };
    let (shown, value_style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (value.to_string(), Style::default().fg(Color::White))
    };
    let value_style = if focused {
        value_style.add_modifier(Modifier::UNDERLINED)
    } else {
        value_style
    };
    let body = match (is_select, focused) {
        (true, _) => format!("‹ {shown} ›"),
        (false, true) => format!("{shown}▏"),
        (false, false) => shown,
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(label_text, Style::default().fg(Color::Gray)),
        Span::styled(body, value_style),
    ])
}
