//! Register page rendering: notice banner and the scrolling form.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::notice::NoticeKind;
use crate::selector::ChoiceList;
use crate::widgets::{field_line, scroll_to_show, ClickableList};

use super::actions::*;
use super::logic;
use super::state::{Focus, FormRow, RegisterState};

pub fn render(
    state: &RegisterState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let notice = notice_paragraph(state);
    let notice_height = notice
        .as_ref()
        .map_or(0, |p| p.line_count(area.width.saturating_sub(2)) as u16);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(notice_height), Constraint::Min(3)])
        .split(area);

    let mut cs = click_state.borrow_mut();
    if let Some(notice) = notice {
        f.render_widget(notice, chunks[0]);
        // Tapping anywhere on the banner closes it.
        cs.add_click_target(chunks[0], NOTICE_CLOSE);
    }
    render_form(state, f, chunks[1], &mut cs);
}

fn notice_paragraph(state: &RegisterState) -> Option<Paragraph<'static>> {
    let notice = state.notices.latest()?;
    let (color, icon) = match notice.kind {
        NoticeKind::Success => (Color::Green, "✔"),
        NoticeKind::Error => (Color::Red, "✖"),
    };

    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(notice.text.clone(), Style::default().fg(Color::White)),
        ]),
        NOTICE_CLOSE,
    );
    cl.push_clickable(
        Line::from(Span::styled("   [x] close", Style::default().fg(Color::DarkGray))),
        NOTICE_CLOSE,
    );

    Some(
        Paragraph::new(cl.into_lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
    )
}

fn field_value(state: &RegisterState, focus: Focus) -> (String, &'static str, &'static str, bool) {
    match focus {
        Focus::Text(field) => (
            state.text(field).to_string(),
            field.label(),
            field.placeholder(),
            false,
        ),
        Focus::Year => (select_text(&state.year), "Year", "", true),
        Focus::TeamSize => (select_text(&state.team_size), "Team Size", "", true),
        Focus::Member(i) => (
            state.members.get(i).cloned().unwrap_or_default(),
            MEMBER_LABELS.get(i).copied().unwrap_or("Team Member"),
            "",
            false,
        ),
        Focus::Category => (select_text(&state.selector.category), "Category", "", true),
        Focus::ProblemStatement => (
            select_text(&state.selector.problem_statement),
            "Problem Statement",
            "",
            true,
        ),
        Focus::Submit => (String::new(), "", "", false),
    }
}

const MEMBER_LABELS: [&str; 3] = ["Team Member 2", "Team Member 3", "Team Member 4"];

/// Selected label, with its position once something is picked.
fn select_text(list: &ChoiceList) -> String {
    match list.selected_index() {
        0 => list.selected_label().to_string(),
        i => format!("{} ({i}/{})", list.selected_label(), list.entries().len()),
    }
}

fn submit_line(state: &RegisterState, focused: bool) -> Line<'static> {
    let (text, style) = if state.is_pending() {
        ("  Registering...  ", Style::default().fg(Color::DarkGray).bg(Color::Gray))
    } else if focused {
        (
            "  Register Team  ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  Register Team  ", Style::default().fg(Color::Black).bg(Color::Cyan))
    };
    let marker = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(text, style),
    ])
}

fn render_form(state: &RegisterState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let narrow = is_narrow_layout(area.width);
    let rows = logic::rows(state);
    let order = logic::focus_order(state);
    let current = logic::focused(state);
    let viewport = area.height.saturating_sub(2);
    state.viewport_rows.set(viewport);

    let mut cl = ClickableList::new();
    for row in &rows {
        match *row {
            FormRow::Section(title) => cl.push(Line::from(Span::styled(
                format!(" {title}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))),
            FormRow::Blank => cl.push(Line::from("")),
            FormRow::ProblemId => cl.push(field_line(
                "Problem ID",
                &state.selector.problem_id,
                "auto-filled",
                false,
                false,
                narrow,
            )),
            FormRow::Field(focus) => {
                let focused = current == Some(focus);
                let index = order.iter().position(|o| *o == focus).unwrap_or(0);
                let line = if focus == Focus::Submit {
                    submit_line(state, focused)
                } else {
                    let (value, label, placeholder, is_select) = field_value(state, focus);
                    field_line(label, &value, placeholder, focused, is_select, narrow)
                };
                cl.push_clickable(line, FIELD_BASE + index as u16);
            }
        }
    }

    let focus_row = current.and_then(|c| rows.iter().position(|r| *r == FormRow::Field(c)));
    let scroll = scroll_to_show(focus_row, state.scroll, viewport as usize, rows.len());
    cl.register_targets(area, cs, 1, 1, scroll);

    let widget = Paragraph::new(cl.into_lines())
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Team Registration "),
        );
    f.render_widget(widget, area);
}
