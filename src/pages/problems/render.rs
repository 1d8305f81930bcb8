//! Problems page rendering: filter bar, search box and the statement list.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::catalog::Category;
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{link_style, scroll_to_show, ClickableList, LinkBar};

use super::actions::*;
use super::logic::{self, Row};
use super::state::ProblemsState;

pub fn render(
    state: &ProblemsState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let narrow = is_narrow_layout(area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let mut cs = click_state.borrow_mut();
    render_filters(state, f, chunks[0], narrow, &mut cs);
    render_search(state, f, chunks[1], &mut cs);
    render_list(state, f, chunks[2], &mut cs);
}

fn filter_label(filter: Option<Category>) -> &'static str {
    filter.map_or("All", |c| c.label())
}

fn render_filters(state: &ProblemsState, f: &mut Frame, area: Rect, narrow: bool, cs: &mut ClickState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Tracks ");

    if narrow {
        LinkBar::new(" ")
            .block(block)
            .link("◀", Style::default().fg(Color::Yellow), FILTER_PREV)
            .link(filter_label(state.filter), link_style(true), FILTER_NEXT)
            .link("▶", Style::default().fg(Color::Yellow), FILTER_NEXT)
            .render(f, area, cs);
        return;
    }

    let mut bar = LinkBar::new(" ").block(block);
    for (i, option) in logic::filter_options(state).into_iter().enumerate() {
        let id = match i {
            0 => FILTER_ALL,
            n => FILTER_BASE + (n as u16 - 1),
        };
        bar = bar.link(filter_label(option), link_style(option == state.filter), id);
    }
    bar.render(f, area, cs);
}

fn render_search(state: &ProblemsState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let border = if state.search_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let line = if state.search.is_empty() && !state.search_focused {
        Line::from(Span::styled(
            " / to search by id or name",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if state.search_focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(" ⌕ ", Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}{cursor}", state.search), Style::default().fg(Color::White)),
        ])
    };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(widget, area);
    cs.add_click_target(area, SEARCH);
}

fn render_list(state: &ProblemsState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let rows = logic::rows(state);
    let total_visible = logic::visible(state).len();
    let viewport = area.height.saturating_sub(2);
    state.viewport_rows.set(viewport);

    let mut cl = ClickableList::new();
    for row in &rows {
        match *row {
            Row::Header(category) => cl.push(Line::from(Span::styled(
                format!(" {}", category.label()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))),
            Row::Card { index, problem, .. } => {
                let focused = index == state.cursor;
                let marker = if focused { " ▶ " } else { "   " };
                let name_style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Yellow)),
                        Span::styled(format!("{:<7} ", problem.id), Style::default().fg(Color::Magenta)),
                        Span::styled(problem.name, name_style),
                    ]),
                    CARD_BASE + index as u16,
                );
            }
        }
    }
    if rows.is_empty() {
        cl.push(Line::from(Span::styled(
            format!(" No problem statements match \"{}\"", state.search.trim()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let scroll = scroll_to_show(
        logic::cursor_row(&rows, state.cursor),
        state.scroll,
        viewport as usize,
        rows.len(),
    );
    cl.register_targets(area, cs, 1, 1, scroll);

    let title = format!(
        " {} of {} statements ",
        total_visible,
        state.catalog.len()
    );
    let widget = Paragraph::new(cl.into_lines())
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(title)
                .title_bottom(Line::from(" Enter: register with this statement ").right_aligned()),
        );
    f.render_widget(widget, area);
}
