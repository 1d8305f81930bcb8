//! Problems page: browse the catalog, filter by track, search, and pick a
//! statement to register with.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::handoff::{self, HandoffRecord};
use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, PageChoice, Response, SiteContext};
use crate::storage::SharedStorage;

use actions::*;
use state::ProblemsState;

pub struct ProblemsPage {
    pub state: ProblemsState,
    storage: Rc<dyn SharedStorage>,
}

impl ProblemsPage {
    pub fn new(ctx: &SiteContext) -> Self {
        Self {
            state: ProblemsState::new(ctx.catalog),
            storage: Rc::clone(&ctx.storage),
        }
    }

    /// Hand the statement at `index` to the register page and go there.
    fn choose(&mut self, index: usize) -> Response {
        let Some((category, problem)) = logic::select(&mut self.state, index) else {
            return Response::Handled;
        };
        log::info!("problems: chose {} for registration", problem.id);
        handoff::publish(
            self.storage.as_ref(),
            &HandoffRecord {
                problem_id: problem.id.to_string(),
                problem_name: problem.name.to_string(),
                category: category.key().to_string(),
            },
        );
        Response::Navigate(PageChoice::Register)
    }

    fn handle_search_input(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::Key(c) => logic::type_char(&mut self.state, *c),
            InputEvent::Backspace => logic::backspace(&mut self.state),
            InputEvent::Enter | InputEvent::Esc | InputEvent::Tab => {
                self.state.search_focused = false;
            }
            InputEvent::Up => logic::move_cursor(&mut self.state, -1),
            InputEvent::Down => logic::move_cursor(&mut self.state, 1),
            _ => return self.handle_click(event),
        }
        Response::Handled
    }

    fn handle_click(&mut self, event: &InputEvent) -> Response {
        let InputEvent::Click(id) = *event else {
            return Response::Ignored;
        };
        let categories: Vec<_> = self.state.catalog.categories().collect();
        match id {
            FILTER_ALL => logic::set_filter(&mut self.state, None),
            FILTER_PREV => logic::cycle_filter(&mut self.state, false),
            FILTER_NEXT => logic::cycle_filter(&mut self.state, true),
            SEARCH => self.state.search_focused = true,
            id if (FILTER_BASE..FILTER_BASE + categories.len() as u16).contains(&id) => {
                let category = categories[(id - FILTER_BASE) as usize];
                logic::set_filter(&mut self.state, Some(category));
            }
            id if id >= CARD_BASE
                && ((id - CARD_BASE) as usize) < logic::visible(&self.state).len() =>
            {
                return self.choose((id - CARD_BASE) as usize)
            }
            _ => return Response::Ignored,
        }
        Response::Handled
    }
}

impl Page for ProblemsPage {
    fn handle_input(&mut self, event: &InputEvent) -> Response {
        if self.state.search_focused {
            return self.handle_search_input(event);
        }
        match event {
            InputEvent::Key('/') => self.state.search_focused = true,
            InputEvent::Left | InputEvent::Key('h') => logic::cycle_filter(&mut self.state, false),
            InputEvent::Right | InputEvent::Key('l') => logic::cycle_filter(&mut self.state, true),
            InputEvent::Up | InputEvent::Key('k') => logic::move_cursor(&mut self.state, -1),
            InputEvent::Down | InputEvent::Key('j') => logic::move_cursor(&mut self.state, 1),
            InputEvent::Enter => return self.choose(self.state.cursor),
            InputEvent::Esc if !self.state.search.is_empty() => logic::clear_search(&mut self.state),
            _ => return self.handle_click(event),
        }
        Response::Handled
    }

    fn tick(&mut self, _delta_ticks: u32) {}

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn scroll_offset(&self) -> u16 {
        self.state.scroll.min(u16::MAX as usize) as u16
    }

    fn wants_text(&self) -> bool {
        self.state.search_focused
    }

    fn help(&self) -> &'static str {
        if self.state.search_focused {
            "Type to search  [Enter] Done  [↑↓] Move"
        } else {
            "[/] Search  [←→] Track  [↑↓] Move  [Enter] Register"
        }
    }
}
