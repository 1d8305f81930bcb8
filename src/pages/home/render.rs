//! Home page rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::logic::{counter_value, palette_index, typed_title, typing_done};
use super::state::HomeState;

const PALETTES: [(Color, Color); 4] = [
    (Color::Blue, Color::Magenta),
    (Color::Magenta, Color::Red),
    (Color::LightBlue, Color::Cyan),
    (Color::Green, Color::LightGreen),
];

pub fn render(
    state: &HomeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let narrow = is_narrow_layout(area.width);
    let borders = if narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let about = about_paragraph(state, borders);
    let about_height = about.line_count(area.width.saturating_sub(2)) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(about_height.max(3)),
            Constraint::Min(3),
        ])
        .split(area);

    render_hero(state, f, chunks[0], borders, click_state);
    render_counters(state, f, chunks[1], borders, narrow);
    f.render_widget(about, chunks[2]);
    render_details(state, f, chunks[3], borders);
}

fn render_hero(
    state: &HomeState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let (primary, accent) = PALETTES[palette_index(state)];
    let cursor = if typing_done(state) { "" } else { "█" };

    let mut cl = ClickableList::new();
    cl.push(Line::from(""));
    cl.push(Line::from(vec![
        Span::styled(
            typed_title(state).to_string(),
            Style::default().fg(primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(accent)),
    ]));
    cl.push(Line::from(Span::styled(
        state.tagline.clone(),
        Style::default().fg(accent),
    )));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            "[B] Browse problem statements",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        GO_PROBLEMS,
    );
    cl.push_clickable(
        Line::from(Span::styled(
            "[R] Register your team",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        GO_REGISTER,
    );

    {
        let mut cs = click_state.borrow_mut();
        let top = if borders.contains(Borders::TOP) { 1 } else { 0 };
        cl.register_targets(area, &mut cs, top, 1, 0);
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(primary));
    let widget = Paragraph::new(cl.into_lines())
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(widget, area);
}

fn render_counters(state: &HomeState, f: &mut Frame, area: Rect, borders: Borders, narrow: bool) {
    let sep = if narrow { "  " } else { "    " };
    let mut spans = Vec::new();
    for (i, c) in state.counters.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(sep));
        }
        spans.push(Span::styled(
            format!("{}", counter_value(state, c)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", c.label),
            Style::default().fg(Color::Gray),
        ));
    }
    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(borders).border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(widget, area);
}

fn about_paragraph(state: &HomeState, borders: Borders) -> Paragraph<'static> {
    let lines: Vec<Line> = state
        .about
        .iter()
        .map(|t| Line::from(Span::styled(format!(" {t}"), Style::default().fg(Color::White))))
        .collect();
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::Green))
                .title(" About "),
        )
}

fn render_details(state: &HomeState, f: &mut Frame, area: Rect, borders: Borders) {
    let lines: Vec<Line> = state
        .details
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!(" {label}: "), Style::default().fg(Color::Gray)),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Event details "),
    );
    f.render_widget(widget, area);
}
