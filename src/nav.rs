//! Site navigation bar: page links, the collapsed (hamburger) menu on narrow
//! screens, and the reaction to page scrolling.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::pages::PageChoice;
use crate::widgets::{link_style, ClickableList, LinkBar};

pub const NAV_HOME: u16 = 900;
pub const NAV_PROBLEMS: u16 = 901;
pub const NAV_REGISTER: u16 = 902;
pub const NAV_MENU: u16 = 903;

pub const LINKS: [(PageChoice, &str, u16); 3] = [
    (PageChoice::Home, "Home", NAV_HOME),
    (PageChoice::Problems, "Problems", NAV_PROBLEMS),
    (PageChoice::Register, "Register", NAV_REGISTER),
];

pub fn link_target(action_id: u16) -> Option<PageChoice> {
    LINKS
        .iter()
        .find(|(_, _, id)| *id == action_id)
        .map(|(choice, _, _)| *choice)
}

pub struct NavState {
    pub menu_open: bool,
    /// Drawn with a solid, highlighted border once the page is scrolled.
    pub elevated: bool,
    /// Hidden while the user scrolls down a long page.
    pub hidden: bool,
    last_scroll: u16,
    elevate_after: u16,
    hide_after: u16,
}

impl NavState {
    pub fn new(elevate_after: u16, hide_after: u16) -> Self {
        Self {
            menu_open: false,
            elevated: false,
            hidden: false,
            last_scroll: 0,
            elevate_after,
            hide_after,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// React to the current page's scroll offset. Only changes count, like
    /// a browser scroll event.
    pub fn on_scroll(&mut self, offset: u16) {
        if offset == self.last_scroll {
            return;
        }
        self.elevated = offset > self.elevate_after;
        self.hidden = offset > self.last_scroll && offset > self.hide_after;
        self.last_scroll = offset;
    }

    /// New page: back at the top.
    pub fn reset_scroll(&mut self) {
        self.last_scroll = 0;
        self.elevated = false;
        self.hidden = false;
    }

    /// Rows the bar occupies this frame.
    pub fn height(&self) -> u16 {
        if self.hidden && !self.menu_open {
            0
        } else {
            3
        }
    }
}

fn bar_block(nav: &NavState) -> Block<'static> {
    let border = if nav.elevated {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default().borders(Borders::ALL).border_style(border)
}

/// Event name plus either the links (wide) or the menu toggle (narrow).
pub fn render_bar(
    f: &mut Frame,
    area: Rect,
    nav: &NavState,
    current: PageChoice,
    event_name: &str,
    narrow: bool,
    cs: &mut ClickState,
) {
    if area.height == 0 {
        return;
    }
    let title = Span::styled(
        format!(" {event_name} "),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );

    if narrow {
        let burger = if nav.menu_open { "✕" } else { "☰" };
        let block = bar_block(nav).title(title);
        let line = Line::from(Span::styled(
            format!("{burger} Menu"),
            Style::default().fg(Color::Yellow),
        ))
        .right_aligned();
        f.render_widget(Paragraph::new(line).block(block), area);
        // The whole bar toggles the menu.
        cs.add_click_target(area, NAV_MENU);
        return;
    }

    let mut bar = LinkBar::new(" │ ").block(bar_block(nav).title(title));
    for (choice, label, id) in LINKS {
        bar = bar.link(label, link_style(choice == current), id);
    }
    bar.render(f, area, cs);
}

/// Narrow layout dropdown, drawn over the page below the bar.
pub fn render_menu(
    f: &mut Frame,
    below: Rect,
    current: PageChoice,
    cs: &mut ClickState,
) {
    let height = (LINKS.len() as u16 + 2).min(below.height);
    let area = Rect::new(below.x, below.y, below.width, height);

    let mut cl = ClickableList::new();
    for (choice, label, id) in LINKS {
        let marker = if choice == current { "● " } else { "  " };
        cl.push_clickable(
            Line::from(Span::styled(format!("{marker}{label}"), link_style(choice == current))),
            id,
        );
    }
    cl.register_targets(area, cs, 1, 1, 0);

    f.render_widget(Clear, area);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(widget, area);
}
